//! Typed value objects for the Postman Collection v2.1.0 document shape.

use serde::Serialize;

/// Schema URL stamped into every collection's `info` block.
pub const SCHEMA_URL: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// One query-string pair. `value` is `None` when the pair had no `=`, and is
/// then omitted from the JSON entirely (not defaulted to an empty string).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParam {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A request header entry. Collections produced by this tool always carry an
/// empty header list; the type exists so the JSON shape matches the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderEntry {
    pub key: String,
    pub value: String,
}

/// Decomposed request URL: the raw input line plus host, path segments and
/// query pairs derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlSpec {
    pub raw: String,
    pub host: String,
    pub path: Vec<String>,
    pub query: Vec<QueryParam>,
}

/// Request description: fixed GET method, empty headers, decomposed URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestSpec {
    pub method: String,
    pub header: Vec<HeaderEntry>,
    pub url: UrlSpec,
}

impl RequestSpec {
    /// Builds the fixed-shape GET request around a decomposed URL.
    pub fn get(url: UrlSpec) -> Self {
        Self {
            method: "GET".to_string(),
            header: Vec::new(),
            url,
        }
    }
}

/// One collection item; `name` is the raw input line, unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestItem {
    pub name: String,
    pub request: RequestSpec,
}

/// Collection metadata. A `None` name is omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub schema: String,
}

/// A complete collection document: metadata plus ordered request items.
/// Immutable once constructed; serialized and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionDocument {
    pub info: CollectionInfo,
    pub item: Vec<RequestItem>,
}

impl CollectionDocument {
    pub fn new(name: Option<String>, item: Vec<RequestItem>) -> Self {
        Self {
            info: CollectionInfo {
                name,
                schema: SCHEMA_URL.to_string(),
            },
            item,
        }
    }
}
