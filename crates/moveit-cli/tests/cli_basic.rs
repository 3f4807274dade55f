//! Basic CLI E2E tests.
//!
//! Each test runs the binary against its own temporary data directory.

mod common;

use common::{assert_contains, parse_json_stream, run_cli, run_cli_failure, run_cli_success};

fn home() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

#[test]
fn test_status_on_fresh_install() {
    let home = home();
    let out = run_cli_success(home.path(), &["challenge", "status"]);
    let docs = parse_json_stream(&out);
    assert_eq!(docs[0]["type"], "state_snapshot");
    assert_eq!(docs[0]["level"], 1);
    assert_eq!(docs[0]["current_experience"], 0);
    assert_eq!(docs[0]["experience_to_next_level"], 64);
    assert!(docs[0]["active_challenge"].is_null());
}

#[test]
fn test_start_complete_cycle() {
    let home = home();
    let out = run_cli_success(home.path(), &["challenge", "start"]);
    let started = &parse_json_stream(&out)[0];
    assert_eq!(started["type"], "challenge_started");
    let amount = started["amount"].as_u64().unwrap();
    assert!(amount > 0);

    let out = run_cli_success(home.path(), &["challenge", "status"]);
    let status = &parse_json_stream(&out)[0];
    assert_eq!(status["active_challenge"]["index"], started["index"]);

    let out = run_cli_success(home.path(), &["challenge", "complete"]);
    let docs = parse_json_stream(&out);
    assert_eq!(docs[0]["type"], "challenge_completed");
    assert_eq!(docs[0]["challenges_completed"], 1);

    let out = run_cli_success(home.path(), &["challenge", "status"]);
    let status = &parse_json_stream(&out)[0];
    assert!(status["active_challenge"].is_null());
    assert_eq!(status["challenges_completed"], 1);
}

#[test]
fn test_complete_without_active_challenge() {
    let home = home();
    let (stdout, stderr, code) = run_cli(home.path(), &["challenge", "complete"]);
    assert_eq!(code, 0);
    assert_contains(&stderr, "no active challenge");
    let status = &parse_json_stream(&stdout)[0];
    assert_eq!(status["challenges_completed"], 0);
}

#[test]
fn test_reset_clears_active_challenge() {
    let home = home();
    run_cli_success(home.path(), &["challenge", "start"]);
    let out = run_cli_success(home.path(), &["challenge", "reset"]);
    assert_eq!(parse_json_stream(&out)[0]["type"], "challenge_reset");
    run_cli_success(home.path(), &["challenge", "reset"]);
    let out = run_cli_success(home.path(), &["challenge", "status"]);
    assert!(parse_json_stream(&out)[0]["active_challenge"].is_null());
}

#[test]
fn test_level_up_and_dismiss_with_custom_catalog() {
    let home = home();
    let catalog = home.path().join("catalog.json");
    std::fs::write(
        &catalog,
        r#"[{"type":"eye","description":"Look far away","amount":100}]"#,
    )
    .unwrap();
    run_cli_success(
        home.path(),
        &["config", "set", "catalog.path", catalog.to_str().unwrap()],
    );

    run_cli_success(home.path(), &["challenge", "start"]);
    let out = run_cli_success(home.path(), &["challenge", "complete"]);
    let docs = parse_json_stream(&out);
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[1]["type"], "level_up");
    assert_eq!(docs[1]["new_level"], 2);

    let out = run_cli_success(home.path(), &["challenge", "status"]);
    let status = &parse_json_stream(&out)[0];
    assert_eq!(status["level"], 2);
    assert_eq!(status["current_experience"], 36);
    assert_eq!(status["is_level_up_modal_open"], true);

    let out = run_cli_success(home.path(), &["level", "dismiss"]);
    assert_eq!(parse_json_stream(&out)[0]["type"], "level_up_dismissed");
    let (_, stderr, code) = run_cli(home.path(), &["level", "dismiss"]);
    assert_eq!(code, 0);
    assert_contains(&stderr, "no pending level-up");
}

#[test]
fn test_profile_show() {
    let home = home();
    run_cli_success(home.path(), &["config", "set", "profile.name", "Marlon"]);
    let out = run_cli_success(home.path(), &["profile", "show"]);
    assert_contains(&out, "Marlon");
    assert_contains(&out, "Level 1");

    let out = run_cli_success(home.path(), &["profile", "show", "--json"]);
    let profile = &parse_json_stream(&out)[0];
    assert_eq!(profile["name"], "Marlon");
    assert_eq!(profile["level"], 1);
}

#[test]
fn test_config_get_set() {
    let home = home();
    assert_eq!(
        run_cli_success(home.path(), &["config", "get", "notifications.sound"]).trim(),
        "true"
    );
    run_cli_success(home.path(), &["config", "set", "notifications.sound", "false"]);
    assert_eq!(
        run_cli_success(home.path(), &["config", "get", "notifications.sound"]).trim(),
        "false"
    );
    let (_, stderr, _) = run_cli_failure(home.path(), &["config", "get", "nope"]);
    assert_contains(&stderr, "unknown key");
    run_cli_failure(home.path(), &["config", "set", "notifications.sound", "maybe"]);
}

#[test]
fn test_catalog_list() {
    let home = home();
    let out = run_cli_success(home.path(), &["catalog", "list", "--json"]);
    let challenges = parse_json_stream(&out)[0].as_array().unwrap().clone();
    assert!(!challenges.is_empty());
    assert!(challenges.iter().all(|c| c["type"] == "body" || c["type"] == "eye"));

    let out = run_cli_success(home.path(), &["catalog", "list"]);
    assert_contains(&out, "xp");
}

#[test]
fn test_invalid_catalog_fails() {
    let home = home();
    let catalog = home.path().join("empty.json");
    std::fs::write(&catalog, "[]").unwrap();
    run_cli_success(
        home.path(),
        &["config", "set", "catalog.path", catalog.to_str().unwrap()],
    );
    let (_, stderr, _) = run_cli_failure(home.path(), &["challenge", "start"]);
    assert_contains(&stderr, "Empty collection");
}

#[test]
fn test_swapped_catalog_drops_active_challenge() {
    let home = home();
    let first = home.path().join("first.json");
    let second = home.path().join("second.json");
    std::fs::write(&first, r#"[{"type":"body","description":"only","amount":20}]"#).unwrap();
    std::fs::write(&second, r#"[{"type":"body","description":"swapped","amount":60}]"#).unwrap();

    run_cli_success(
        home.path(),
        &["config", "set", "catalog.path", first.to_str().unwrap()],
    );
    run_cli_success(home.path(), &["challenge", "start"]);
    run_cli_success(
        home.path(),
        &["config", "set", "catalog.path", second.to_str().unwrap()],
    );

    let (stdout, stderr, code) = run_cli(home.path(), &["challenge", "complete"]);
    assert_eq!(code, 0);
    assert_contains(&stderr, "no active challenge");
    let status = &parse_json_stream(&stdout)[0];
    assert_eq!(status["current_experience"], 0);
    assert_eq!(status["challenges_completed"], 0);
}

#[test]
fn test_profile_show_rejects_broken_config() {
    let home = home();
    std::fs::write(home.path().join("config.toml"), "profile = [").unwrap();
    let (_, stderr, _) = run_cli_failure(home.path(), &["profile", "show"]);
    assert_contains(&stderr, "error:");
}
