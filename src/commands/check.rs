use std::path::PathBuf;

use anyhow::Result;

use globedock::assets::{self, AssetPattern};
use globedock::probe::AvailabilityCheck;
use globedock::ui::{json as ui_json, UiContext};

pub fn cmd_check(root: Option<PathBuf>, port: Option<u16>, json: bool, verbose: u8) -> Result<()> {
    let config = super::load_config(root, None, port, json)?;
    let ui = UiContext::detect(verbose);

    if !json {
        println!("Checking globe dashboard embed\n");
    }

    // Dev server reachability is informational; the static bundle is
    // what deployment depends on.
    let endpoint = config.endpoint();
    let reachable = config.probe().is_reachable(&endpoint);
    report(&ui, json, reachable, "dev server", &endpoint.to_string(), false)?;

    let bundle_root = &config.bundle.root;
    let entry = bundle_root.join(assets::ENTRY_DOCUMENT);
    let assets_dir = bundle_root.join(assets::ASSETS_DIR);

    let entry_ok = entry.is_file();
    let assets_ok = assets_dir.is_dir();
    let mut bundle_ok = entry_ok && assets_ok;

    report(
        &ui,
        json,
        entry_ok,
        "entry document",
        &entry.display().to_string(),
        true,
    )?;
    report(
        &ui,
        json,
        assets_ok,
        "assets directory",
        &assets_dir.display().to_string(),
        true,
    )?;

    if assets_ok {
        for pattern in AssetPattern::REQUIRED {
            match assets::resolve_pattern(&assets_dir, pattern) {
                Ok(path) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    report(&ui, json, true, &pattern.to_string(), &name, true)?;
                }
                Err(err) => {
                    bundle_ok = false;
                    report(&ui, json, false, &pattern.to_string(), &err.to_string(), true)?;
                }
            }
        }
    }

    if !json {
        println!();
        if bundle_ok {
            println!("Static bundle is complete.");
        } else {
            println!("Static bundle is unusable; run the build script and re-check.");
        }
    }

    if !bundle_ok {
        std::process::exit(1);
    }
    Ok(())
}

fn report(
    ui: &UiContext,
    json: bool,
    ok: bool,
    name: &str,
    detail: &str,
    required: bool,
) -> Result<()> {
    if json {
        ui_json::emit(serde_json::json!({
            "event": "check",
            "name": name,
            "status": if ok { "pass" } else if required { "error" } else { "warning" },
            "detail": detail,
        }))?;
    } else {
        ui.status_line(ok, name, detail);
    }
    Ok(())
}
