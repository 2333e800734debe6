mod common;

use common::TestEnv;

#[test]
fn test_check_passes_on_complete_bundle() {
    let env = TestEnv::new();
    env.write_bundle();

    let result = env.run(&["check"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("index-Ab12Cd34.js"));
    assert!(result.stdout.contains("globe-Ef56Gh78.js"));
    assert!(result.stdout.contains("index-Ij90Kl12.css"));
    assert!(result.stdout.contains("Static bundle is complete."));
}

#[test]
fn test_check_uses_ascii_markers_on_dumb_terminals() {
    let env = TestEnv::new();
    env.write_bundle();

    // TestEnv pins TERM=dumb.
    let result = env.run(&["check"]);
    assert!(result.stdout.contains("[OK]"));
    assert!(!result.stdout.contains('✓'));
}

#[test]
fn test_check_fails_without_assets_directory() {
    let env = TestEnv::new();
    env.write_file("static/index.html", "<html></html>");

    let result = env.run(&["check"]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("assets"));
    assert!(result.stdout.contains("unusable"));
}

#[test]
fn test_check_reports_missing_pattern() {
    let env = TestEnv::new();
    env.write_bundle();
    std::fs::remove_file(env.path("static/assets/index-Ij90Kl12.css")).unwrap();

    let result = env.run(&["check"]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("index-*.css"));
}

#[test]
fn test_check_dev_server_down_is_informational() {
    let env = TestEnv::new();
    env.write_bundle();

    // No dev server running on the default port in CI; the bundle is
    // complete, so check still succeeds.
    let result = env.run(&["check"]);
    assert!(result.success, "stderr: {}", result.stderr);
}

#[test]
fn test_check_json_events_are_parseable() {
    let env = TestEnv::new();
    env.write_bundle();

    let result = env.run(&["check", "--json"]);
    assert!(result.success);

    let mut saw_check = false;
    for line in result.stdout.lines() {
        let event: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(event["event"], "check");
        saw_check = true;
    }
    assert!(saw_check);
}
