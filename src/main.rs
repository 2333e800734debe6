//! Globedock CLI - embed a built globe dashboard into a host page
//!
//! Usage: globedock <COMMAND>
//!
//! Commands:
//!   render  Run the full render pass and emit the embeddable document
//!   probe   Probe the dev server once
//!   check   Report dev server reachability and bundle completeness

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            root,
            dev,
            force,
            host,
            port,
            srcdoc,
            out,
        } => commands::render::cmd_render(
            root,
            dev,
            force,
            host,
            port,
            srcdoc,
            out,
            cli.json,
            cli.verbose,
        ),
        Commands::Probe {
            host,
            port,
            timeout_ms,
        } => commands::probe::cmd_probe(host, port, timeout_ms, cli.json, cli.verbose),
        Commands::Check { root, port } => {
            commands::check::cmd_check(root, port, cli.json, cli.verbose)
        }
    }
}
