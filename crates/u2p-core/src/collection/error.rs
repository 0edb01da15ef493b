//! Parse error for URL decomposition.

use thiserror::Error;

/// Error from decomposing a raw URL line into host/path/query.
///
/// One bad line aborts the whole conversion run; the assembler never skips
/// or repairs items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line has no `//` scheme separator, so no authority can be located.
    #[error("URL has no `//` scheme separator: {url:?}")]
    MissingSchemeSeparator { url: String },
}
