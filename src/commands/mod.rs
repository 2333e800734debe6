pub mod check;
pub mod probe;
pub mod render;

use std::path::PathBuf;

use globedock::config::Config;
use globedock::ui::output;

/// Shared flag-over-config plumbing for the commands that take bundle
/// and endpoint overrides. Unknown-key warnings from the config file go
/// to stderr unless NDJSON output is active.
pub(crate) fn load_config(
    root: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    json: bool,
) -> anyhow::Result<Config> {
    let cwd = std::env::current_dir()?;
    let (mut config, warnings) = Config::load_or_default_with_warnings(Some(&cwd));

    if !json {
        output::print_config_warnings(&warnings);
    }

    if let Some(root) = root {
        config.bundle.root = root;
    }
    if let Some(host) = host {
        config.dev.host = host;
    }
    if let Some(port) = port {
        config.dev.port = port;
    }

    Ok(config)
}
