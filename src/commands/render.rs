use std::path::PathBuf;

use anyhow::{Context, Result};

use globedock::render::{render, Rendered};
use globedock::ui::{json as ui_json, UiContext};

#[allow(clippy::too_many_arguments)]
pub fn cmd_render(
    root: Option<PathBuf>,
    dev: bool,
    force: bool,
    host: Option<String>,
    port: Option<u16>,
    srcdoc: bool,
    out: Option<PathBuf>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let mut config = super::load_config(root, host, port, json)?;
    if dev {
        config.dev.use_dev_server = true;
    }
    if force {
        config.dev.force = true;
    }

    let mut render_config = config.render_config(verbose > 0);
    render_config.wrap_srcdoc = srcdoc;
    let probe = config.probe();

    match render(&render_config, &probe) {
        Rendered::Document(document) => {
            if let Some(out) = out {
                std::fs::write(&out, &document)
                    .with_context(|| format!("writing document to {}", out.display()))?;
                if json {
                    ui_json::emit(serde_json::json!({
                        "event": "document",
                        "path": out.display().to_string(),
                        "bytes": document.len(),
                    }))?;
                } else {
                    println!("Wrote {} bytes to {}", document.len(), out.display());
                }
            } else if json {
                ui_json::emit(serde_json::json!({
                    "event": "document",
                    "content": document,
                }))?;
            } else {
                print!("{document}");
            }
            Ok(())
        }
        Rendered::Diagnostic(diagnostic) => {
            if json {
                ui_json::emit(serde_json::json!({
                    "event": "diagnostic",
                    "kind": diagnostic.kind,
                    "title": diagnostic.title,
                    "body": diagnostic.body,
                }))?;
            } else {
                UiContext::detect(verbose).print_diagnostic(&diagnostic);
            }
            // Diagnostic is a handled outcome, distinct from usage errors.
            std::process::exit(2);
        }
    }
}
