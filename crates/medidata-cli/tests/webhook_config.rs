//! Webhook & Config Command Tests

use anyhow::Result;
use medidata_testing::TestWorld;
use medidata_testing::assertions::assert_badge_level;

#[test]
fn test_webhook_payload_shape() -> Result<()> {
    let world = TestWorld::new().json();

    let result = world.run(&["webhook", "payload"])?;
    assert!(result.success());

    let json = result.json()?;
    let endpoint = &json["content"]["endpoint"];
    assert_eq!(endpoint["url"], "https://lovable.app/webhooks/lab-exams");
    assert_eq!(endpoint["method"], "POST");
    assert_eq!(endpoint["content_type"], "application/json");

    let payload = &json["content"]["payload"];
    assert_eq!(payload["patient_id"], "P-12345");
    assert_eq!(payload["exam_type"], "Laboratory");
    assert_eq!(
        payload["exam_data"],
        serde_json::json!({"glucose": 98, "cholesterol": 180, "triglycerides": 140})
    );
    assert_eq!(payload["timestamp"], "2025-05-16T17:45:00Z");
    Ok(())
}

#[test]
fn test_webhook_url_comes_from_config() -> Result<()> {
    let world = TestWorld::new().json();
    world.write_config("[webhook]\nurl = \"https://example.test/hook\"\n")?;

    let result = world.run(&["webhook", "payload"])?;
    assert!(result.success());

    let json = result.json()?;
    assert_eq!(json["content"]["endpoint"]["url"], "https://example.test/hook");
    Ok(())
}

#[test]
fn test_webhook_dry_run_sends_nothing() -> Result<()> {
    let world = TestWorld::new().json();

    let result = world.run(&["webhook", "send", "--dry-run", "--url", "https://example.test/hook"])?;
    assert!(result.success(), "dry run should succeed: {}", result.stderr());

    let json = result.json()?;
    assert_badge_level(&json, "info")?;
    assert_eq!(json["content"]["delivered"], true);
    assert_eq!(json["content"]["sink"], "dry-run");
    assert_eq!(json["content"]["endpoint"]["url"], "https://example.test/hook");
    assert_ne!(json["content"]["payload"]["timestamp"], "2025-05-16T17:45:00Z");

    let titles: Vec<&str> = json["content"]["notices"]
        .as_array()
        .expect("notices array")
        .iter()
        .filter_map(|notice| notice["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["Sending test payload", "Webhook sent"]);
    Ok(())
}

#[test]
fn test_webhook_unreachable_endpoint_reports_failure() -> Result<()> {
    let world = TestWorld::new().json();
    world.write_config("[webhook]\ntimeout_ms = 1000\n")?;

    let result = world.run(&["webhook", "send", "--url", "http://127.0.0.1:1/hook"])?;
    assert!(result.success(), "failures are rendered: {}", result.stderr());

    let json = result.json()?;
    assert_badge_level(&json, "error")?;
    assert_eq!(json["content"]["delivered"], false);
    assert_eq!(json["content"]["sink"], "http");
    assert!(json["content"]["error"].is_string());

    let notices = json["content"]["notices"].as_array().expect("notices array");
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[1]["level"], "error");
    assert_eq!(notices[1]["description"], "Failed to send test webhook");
    Ok(())
}

#[test]
fn test_config_show_without_file_uses_defaults() -> Result<()> {
    let world = TestWorld::new().json();

    let result = world.run(&["config", "show"])?;
    assert!(result.success());

    let json = result.json()?;
    assert_badge_level(&json, "info")?;
    assert_eq!(json["content"]["exists"], false);
    assert_eq!(json["content"]["config"]["sync"]["connect_delay_ms"], 2000);
    assert_eq!(json["content"]["config"]["sync"]["tick_interval_ms"], 500);
    assert_eq!(json["content"]["config"]["sync"]["progress_step"], 20);
    assert_eq!(json["content"]["config"]["notion"]["create_dashboards"], true);
    Ok(())
}

#[test]
fn test_config_init_refuses_to_overwrite() -> Result<()> {
    let world = TestWorld::new();

    let first = world.run(&["config", "init"])?;
    assert!(first.success(), "init should succeed: {}", first.stderr());
    assert!(world.config_path().exists());

    let second = world.run(&["config", "init"])?;
    assert!(!second.success());
    assert!(second.stderr().contains("already exists"));
    assert!(second.stderr().contains("medidata config init --force"));

    let forced = world.run(&["config", "init", "--force"])?;
    assert!(forced.success());
    assert!(forced.stdout().contains("Config overwritten"));
    Ok(())
}

#[test]
fn test_config_show_reads_written_file() -> Result<()> {
    let world = TestWorld::new();
    world.write_config("[sync]\nprogress_step = 25\n")?;

    let result = world.run(&["config", "show"])?;
    assert!(result.success());
    assert!(result.stdout().contains("progress_step = 25"));
    assert!(result.stdout().contains("connect_delay_ms = 2000"));
    Ok(())
}
