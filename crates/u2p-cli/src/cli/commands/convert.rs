//! `u2p convert <path>` – build collection document(s) from a URL list.

use anyhow::Result;
use std::path::Path;

use u2p_core::collection;
use u2p_core::input;
use u2p_core::output;

pub fn run_convert(
    path: &Path,
    name: Option<&str>,
    host: Option<&str>,
    outpath: Option<&Path>,
    split: Option<usize>,
) -> Result<()> {
    let urls = input::read_url_list(path)?;
    tracing::info!("converting {} URL(s) from {}", urls.len(), path.display());

    let docs = collection::assemble(&urls, name, host, split)?;
    output::write_documents(&docs, outpath)?;

    Ok(())
}
