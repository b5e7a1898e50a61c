mod common;

use serde_json::Value;
use tempfile::tempdir;

use common::{exoframe, FakeServer, Route};

#[test]
fn test_deploy_json_emits_single_event() {
    let dir = tempdir().unwrap();
    let server = FakeServer::start(vec![Route::new(
        "POST",
        "/api/deploy",
        200,
        r#"[{"id":"abc123"},{"id":"def456"}]"#,
    )]);

    let output = exoframe(
        dir.path(),
        &["--json", "deploy", "web", "-p", "80:80", "--endpoint", &server.url],
    );

    assert!(output.status.success(), "stderr:\n{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "expected one NDJSON line; got:\n{}", stdout);

    let event: Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(event["event"], "deploy");
    assert_eq!(event["status"], "success");
    assert_eq!(event["image"], "web");
    assert_eq!(event["containers"], serde_json::json!(["abc123", "def456"]));
}

#[test]
fn test_deploy_json_failure_event() {
    let dir = tempdir().unwrap();
    let server = FakeServer::start(vec![Route::new("POST", "/api/deploy", 200, "")]);

    let output = exoframe(
        dir.path(),
        &["deploy", "web", "--json", "--endpoint", &server.url],
    );

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let event: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(event["status"], "failed");
    assert_eq!(event["error"], "Error deploying!");
}

#[test]
fn test_deploy_json_requires_image() {
    let dir = tempdir().unwrap();

    let output = exoframe(dir.path(), &["deploy", "--json"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let event: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(event["event"], "error");
    assert!(event["message"].as_str().unwrap().contains("image is required"));
}
