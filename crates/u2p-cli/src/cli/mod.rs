//! CLI for the u2p URL-to-Postman converter.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use u2p_core::config;

use commands::run_convert;

/// Top-level CLI for the u2p converter.
#[derive(Debug, Parser)]
#[command(name = "u2p")]
#[command(about = "u2p: convert a URL list into Postman collection JSON", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Convert a newline-delimited URL list into collection document(s).
    Convert {
        /// Path to the input file (one URL per line; blank lines ignored).
        path: PathBuf,

        /// Collection name; also the base for batch and output file names.
        #[arg(long)]
        name: Option<String>,

        /// Host override applied to every item (e.g. a variable like {{base_url}}).
        #[arg(long)]
        host: Option<String>,

        /// Directory for one .postman_collection.json file per document; omit to print to stdout.
        #[arg(long)]
        outpath: Option<PathBuf>,

        /// Split the input into batches of at most N URLs, one document per batch.
        #[arg(long, value_name = "N")]
        split: Option<usize>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Convert {
                path,
                name,
                host,
                outpath,
                split,
            } => {
                // Flags win; config supplies the fallbacks.
                let name = name.or(cfg.default_name);
                let host = host.or(cfg.default_host);
                run_convert(
                    &path,
                    name.as_deref(),
                    host.as_deref(),
                    outpath.as_deref(),
                    split,
                )?;
            }
        }

        Ok(())
    }
}
