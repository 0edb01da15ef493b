//! URL line to request item decomposition.

use super::error::ParseError;
use super::item::{RequestItem, RequestSpec, UrlSpec};
use super::query::parse_query;

/// Decomposes one raw URL line into a collection item.
///
/// The split is deliberately literal, not RFC parsing: the text before the
/// first `//` is the scheme, the next `/`-separated segment is the authority
/// (host\[:port\]), and everything after belongs to the path until a `?` in
/// the last segment starts the query string.
///
/// `host_override`, when non-empty, replaces the derived `scheme//authority`
/// host; `raw`, `path` and `query` are unaffected by the override.
///
/// A URL with nothing after the authority still yields `path == [""]`, so
/// `path` is never empty. That keeps the output shape of collections this
/// tool has historically produced for URLs like `https://host/`.
pub fn parse_url(url: &str, host_override: Option<&str>) -> Result<RequestItem, ParseError> {
    let (scheme, rest) = url
        .split_once("//")
        .ok_or_else(|| ParseError::MissingSchemeSeparator {
            url: url.to_string(),
        })?;

    // split always yields at least the authority, even for an empty rest.
    let mut segments: Vec<&str> = rest.split('/').collect();
    let authority = segments.remove(0);

    let parsed_host = format!("{scheme}//{authority}");
    let host = match host_override {
        Some(h) if !h.is_empty() => h.to_string(),
        _ => parsed_host,
    };

    let last = segments.pop().unwrap_or("");
    let (final_segment, raw_query) = match last.split_once('?') {
        Some((before, after)) => (before, Some(after)),
        None => (last, None),
    };

    let mut path: Vec<String> = segments.into_iter().map(str::to_string).collect();
    path.push(final_segment.to_string());

    let url_spec = UrlSpec {
        raw: url.to_string(),
        host,
        path,
        query: parse_query(raw_query),
    };

    Ok(RequestItem {
        name: url.to_string(),
        request: RequestSpec::get(url_spec),
    })
}
