//! Sync Command Tests
//!
//! `sync run` drives the simulated Notion session on virtual time, so these
//! finish instantly and see the same event sequence every run.

use anyhow::Result;
use medidata_testing::TestWorld;
use medidata_testing::assertions::{assert_badge_level, assert_progress_sequence};

#[test]
fn test_empty_token_reports_one_error_notice() -> Result<()> {
    let world = TestWorld::new().json();

    let result = world.run(&["sync", "run", "--token", "   "])?;
    assert!(result.success(), "validation errors are rendered: {}", result.stderr());

    let json = result.json()?;
    assert_badge_level(&json, "error")?;
    assert_eq!(json["content"]["state"], "disconnected");
    assert_eq!(json["content"]["syncs_completed"], 0);
    assert_eq!(json["content"]["error"], "Notion integration token must not be empty");

    let notices = json["content"]["notices"].as_array().expect("notices array");
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0]["level"], "error");
    assert_eq!(notices[0]["description"], "Please enter your Notion integration token");

    assert_progress_sequence(&json, &[])?;
    assert_eq!(json["content"]["records"].as_array().map(Vec::len), Some(4));
    Ok(())
}

#[test]
fn test_connect_then_one_manual_sync() -> Result<()> {
    let world = TestWorld::new().json();

    let result = world.run(&["sync", "run", "--token", "secret_abc"])?;
    assert!(result.success(), "sync should succeed: {}", result.stderr());

    let json = result.json()?;
    assert_badge_level(&json, "success")?;
    assert_eq!(json["content"]["connector"], "mock");
    assert_eq!(json["content"]["state"], "connected");
    assert_eq!(json["content"]["progress"], 100);
    assert_eq!(json["content"]["syncs_completed"], 1);
    assert_eq!(json["content"]["elapsed_ms"], 4500);

    // Connecting reports 100, then the manual sync restarts from 0.
    assert_progress_sequence(&json, &[100, 0, 20, 40, 60, 80, 100])?;

    let records = json["content"]["records"].as_array().expect("records array");
    assert_eq!(records.len(), 5);
    assert_eq!(records[0]["exam_type"], "Full Database");
    assert_eq!(records[0]["status"], "completed");
    assert_eq!(records[0]["details"], "Manual sync completed successfully");
    assert_eq!(records[0]["style"]["hue"], "green");

    let titles: Vec<&str> = json["content"]["notices"]
        .as_array()
        .expect("notices array")
        .iter()
        .filter_map(|notice| notice["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["Connected successfully", "Sync completed"]);
    Ok(())
}

#[test]
fn test_config_pacing_and_repeated_syncs() -> Result<()> {
    let world = TestWorld::new().json();
    world.write_config("[sync]\nconnect_delay_ms = 100\ntick_interval_ms = 10\nprogress_step = 50\n")?;

    let result = world.run(&["sync", "run", "--token", "t", "--force-syncs", "2"])?;
    assert!(result.success(), "sync should succeed: {}", result.stderr());

    let json = result.json()?;
    assert_progress_sequence(&json, &[100, 0, 50, 100, 0, 50, 100])?;
    assert_eq!(json["content"]["elapsed_ms"], 140);
    assert_eq!(json["content"]["syncs_completed"], 2);
    assert_eq!(json["content"]["records"].as_array().map(Vec::len), Some(6));
    Ok(())
}

#[test]
fn test_skip_flags_narrow_enabled_categories() -> Result<()> {
    let world = TestWorld::new().json();

    let result = world.run(&[
        "sync",
        "run",
        "--token",
        "t",
        "--force-syncs",
        "0",
        "--skip-genetic",
        "--no-dashboards",
    ])?;
    assert!(result.success());

    let json = result.json()?;
    assert_eq!(json["content"]["options"]["sync_genetic"], false);
    assert_eq!(json["content"]["options"]["create_dashboards"], false);
    assert_eq!(
        json["content"]["enabled_categories"],
        serde_json::json!(["metabolic", "microbiota", "laboratory"])
    );
    assert_progress_sequence(&json, &[100])?;
    Ok(())
}

#[test]
fn test_text_output_shows_history() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["sync", "run", "--token", "t"])?;
    assert!(result.success());

    let stdout = result.stdout();
    assert!(stdout.contains("Connector: mock"));
    assert!(stdout.contains("State:     connected (progress 100%)"));
    assert!(stdout.contains("Connected successfully: Your Notion workspace is now connected with MediData"));
    assert!(stdout.contains("Sync history"));
    assert!(stdout.contains("Full Database"));
    assert!(!stdout.contains("Timeline"));
    Ok(())
}

#[test]
fn test_verbose_output_adds_timeline() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["sync", "run", "--token", "t", "--verbose"])?;
    assert!(result.success());

    let stdout = result.stdout();
    assert!(stdout.contains("Timeline (4500ms virtual)"));
    assert!(stdout.contains("state disconnected -> connecting"));
    assert!(stdout.contains("+  2000ms state connecting -> connected"));
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() -> Result<()> {
    let world = TestWorld::new();
    world.write_config("[sync]\nprogress_step = 0\n")?;

    let result = world.run(&["sync", "run", "--token", "t"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("progress_step must be between 1 and 100"));
    Ok(())
}
