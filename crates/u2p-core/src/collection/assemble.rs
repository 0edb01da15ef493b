//! Batch planning and collection envelope assembly.

use super::error::ParseError;
use super::item::CollectionDocument;
use super::url::parse_url;

/// Base name used for batch and file naming when no collection name is given.
pub const DEFAULT_COLLECTION_NAME: &str = "collection";

/// Builds one or more collection documents from an ordered URL list.
///
/// Without a batch size (or with 0) the whole list becomes a single document
/// named `name` verbatim (`info.name` omitted when `name` is `None`). With a
/// positive batch size the list is partitioned into consecutive chunks of at
/// most that many URLs, in order, the last chunk possibly smaller; each chunk
/// becomes its own document named `{base}-{n}` with 1-based `n`.
///
/// The first URL that fails to parse aborts the whole run; no documents are
/// returned in that case.
pub fn assemble(
    urls: &[String],
    name: Option<&str>,
    host_override: Option<&str>,
    batch_size: Option<usize>,
) -> Result<Vec<CollectionDocument>, ParseError> {
    match batch_size {
        Some(size) if size > 0 => {
            let base = name.unwrap_or(DEFAULT_COLLECTION_NAME);
            let mut docs = Vec::with_capacity(urls.len().div_ceil(size));
            for (index, chunk) in urls.chunks(size).enumerate() {
                let batch_name = format!("{}-{}", base, index + 1);
                docs.push(build_document(chunk, Some(batch_name), host_override)?);
            }
            Ok(docs)
        }
        _ => Ok(vec![build_document(
            urls,
            name.map(str::to_string),
            host_override,
        )?]),
    }
}

fn build_document(
    urls: &[String],
    name: Option<String>,
    host_override: Option<&str>,
) -> Result<CollectionDocument, ParseError> {
    let mut items = Vec::with_capacity(urls.len());
    for url in urls {
        items.push(parse_url(url, host_override)?);
    }
    Ok(CollectionDocument::new(name, items))
}
