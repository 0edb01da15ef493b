//! Input reading: newline-delimited URL list, whole file in memory.

use anyhow::{Context, Result};
use std::path::Path;

/// Reads a UTF-8 file of newline-delimited URLs, dropping blank lines.
///
/// Fails if the file is missing or unreadable, or if nothing remains after
/// filtering blank lines. `str::lines` strips a trailing `\r`, so CRLF input
/// behaves the same as LF input.
pub fn read_url_list(path: &Path) -> Result<Vec<String>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("read URL list: {}", path.display()))?;

    let urls: Vec<String> = data
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if urls.is_empty() {
        anyhow::bail!("URL list is empty: {}", path.display());
    }

    tracing::debug!("read {} URL(s) from {}", urls.len(), path.display());
    Ok(urls)
}
