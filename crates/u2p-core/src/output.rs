//! Output writing: pretty-printed collection JSON to stdout or files.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

use crate::collection::{CollectionDocument, DEFAULT_COLLECTION_NAME};

/// Suffix Postman expects on exported collection files.
const FILE_SUFFIX: &str = ".postman_collection.json";

/// Serializes one document with the 4-space indent Postman exports use.
pub fn to_pretty_json(doc: &CollectionDocument) -> Result<String> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    doc.serialize(&mut ser)
        .context("serialize collection document")?;
    String::from_utf8(out).context("collection JSON is not UTF-8")
}

/// Emits every document: one file per document under `outpath`, or all of
/// them to stdout when `outpath` is absent.
pub fn write_documents(docs: &[CollectionDocument], outpath: Option<&Path>) -> Result<()> {
    match outpath {
        Some(dir) => write_files(docs, dir),
        None => print_documents(docs),
    }
}

/// File name for a document: `{name}.postman_collection.json`, falling back
/// to the default base when the document is unnamed.
pub fn file_name(doc: &CollectionDocument) -> String {
    let base = doc.info.name.as_deref().unwrap_or(DEFAULT_COLLECTION_NAME);
    format!("{base}{FILE_SUFFIX}")
}

// Sequential writes: the first failure aborts, files already written stay on
// disk. Multi-file output is not atomic.
fn write_files(docs: &[CollectionDocument], dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("create output directory: {}", dir.display()))?;

    for doc in docs {
        let path = dir.join(file_name(doc));
        let json = to_pretty_json(doc)?;
        fs::write(&path, json)
            .with_context(|| format!("write collection file: {}", path.display()))?;
        tracing::info!("wrote {}", path.display());
        println!("Saved {}", path.display());
    }
    Ok(())
}

fn print_documents(docs: &[CollectionDocument]) -> Result<()> {
    for doc in docs {
        println!("{}", to_pretty_json(doc)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::assemble;

    fn demo_doc() -> CollectionDocument {
        let urls = vec!["https://example.com/foo?q=1".to_string()];
        assemble(&urls, Some("Demo"), None, None)
            .unwrap()
            .remove(0)
    }

    #[test]
    fn pretty_json_uses_four_space_indent() {
        let json = to_pretty_json(&demo_doc()).unwrap();
        assert!(json.contains("\n    \"info\""));
        assert!(json.contains("\n            \"method\": \"GET\""));
    }

    #[test]
    fn file_name_from_document_name() {
        assert_eq!(file_name(&demo_doc()), "Demo.postman_collection.json");
    }

    #[test]
    fn file_name_fallback_when_unnamed() {
        let doc = CollectionDocument::new(None, Vec::new());
        assert_eq!(file_name(&doc), "collection.postman_collection.json");
    }

    #[test]
    fn writes_one_file_per_document() {
        let urls: Vec<String> = (0..4)
            .map(|i| format!("https://example.com/p/{i}"))
            .collect();
        let docs = assemble(&urls, Some("api"), None, Some(2)).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("collections");

        write_documents(&docs, Some(&out)).unwrap();

        for name in ["api-1", "api-2"] {
            let path = out.join(format!("{name}.postman_collection.json"));
            let data = fs::read_to_string(&path).unwrap();
            let value: serde_json::Value = serde_json::from_str(&data).unwrap();
            assert_eq!(value["info"]["name"], name);
            assert_eq!(value["item"].as_array().unwrap().len(), 2);
        }
    }

    #[test]
    fn write_failure_reports_path() {
        let doc = demo_doc();
        let dir = tempfile::tempdir().unwrap();
        // A regular file where a directory component is needed.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let err = write_documents(std::slice::from_ref(&doc), Some(&blocker.join("out")))
            .unwrap_err();
        assert!(err.to_string().contains("create output directory"));
    }
}
