use anyhow::Result;

use globedock::probe::AvailabilityCheck;
use globedock::ui::{json as ui_json, UiContext};

pub fn cmd_probe(
    host: Option<String>,
    port: Option<u16>,
    timeout_ms: Option<u64>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let mut config = super::load_config(None, host, port, json)?;
    if let Some(timeout_ms) = timeout_ms {
        config.dev.probe_timeout_ms = timeout_ms;
    }

    let endpoint = config.endpoint();
    let reachable = config.probe().is_reachable(&endpoint);

    if json {
        ui_json::emit(serde_json::json!({
            "event": "probe",
            "endpoint": endpoint.to_string(),
            "reachable": reachable,
        }))?;
    } else {
        let ui = UiContext::detect(verbose);
        ui.status_line(
            reachable,
            &endpoint.to_string(),
            if reachable { "reachable" } else { "unreachable" },
        );
    }

    if !reachable {
        std::process::exit(1);
    }
    Ok(())
}
