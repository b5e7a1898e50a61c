use std::io::{self, Write};

use exoframe::DeployResult;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

pub fn deploy_success(result: &DeployResult) -> serde_json::Value {
    serde_json::json!({
        "event": "deploy",
        "status": "success",
        "image": result.image,
        "containers": result.container_ids(),
    })
}

pub fn deploy_failed(error: &str) -> serde_json::Value {
    serde_json::json!({
        "event": "deploy",
        "status": "failed",
        "error": error,
    })
}
