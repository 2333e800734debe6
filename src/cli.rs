use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Globedock - embed a built globe dashboard into a host page
#[derive(Parser, Debug)]
#[command(name = "globedock")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable NDJSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full render pass and emit the embeddable document
    Render {
        /// Root of the built static bundle
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Embed the live dev server instead of the static bundle
        #[arg(long)]
        dev: bool,

        /// Skip the availability probe (embed the endpoint regardless)
        #[arg(short, long)]
        force: bool,

        /// Dev server host
        #[arg(long)]
        host: Option<String>,

        /// Dev server port
        #[arg(short, long)]
        port: Option<u16>,

        /// Wrap the inlined bundle in an iframe srcdoc
        #[arg(long)]
        srcdoc: bool,

        /// Write the document here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Probe the dev server once (exit 0 if reachable)
    Probe {
        /// Host to probe
        #[arg(long)]
        host: Option<String>,

        /// Port to probe
        #[arg(short, long)]
        port: Option<u16>,

        /// Connect timeout in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
    },

    /// Report dev server reachability and bundle completeness
    Check {
        /// Root of the built static bundle
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Dev server port
        #[arg(short, long)]
        port: Option<u16>,
    },
}
