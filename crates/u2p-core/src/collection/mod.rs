//! Postman collection building.
//!
//! Decomposes raw URL lines into request items (host, path segments, query
//! pairs) and wraps them in collection envelopes, optionally split into
//! fixed-size batches.

mod assemble;
mod error;
mod item;
mod query;
mod url;

pub use assemble::{assemble, DEFAULT_COLLECTION_NAME};
pub use error::ParseError;
pub use item::{
    CollectionDocument, CollectionInfo, HeaderEntry, QueryParam, RequestItem, RequestSpec,
    UrlSpec, SCHEMA_URL,
};
pub use query::parse_query;
pub use url::parse_url;
