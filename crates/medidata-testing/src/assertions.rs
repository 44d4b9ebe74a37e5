//! Assertions over the JSON envelope `{ "badge": ..., "content": ..., "suggestions": [...] }`.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the badge level (`success`, `info`, `warning`, `error`).
pub fn assert_badge_level(json: &Value, expected: &str) -> Result<()> {
    let level = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' string in JSON")?;

    if level != expected {
        anyhow::bail!("Expected badge level {}, got {}", expected, level);
    }

    Ok(())
}

/// Assert the number of rendered cards in a patient view.
pub fn assert_card_count(json: &Value, expected: usize) -> Result<()> {
    let cards = json["content"]["cards"]
        .as_array()
        .context("Expected 'content.cards' array in JSON")?;

    if cards.len() != expected {
        anyhow::bail!("Expected {} cards, got {}", expected, cards.len());
    }

    Ok(())
}

/// Assert the sequence of progress percentages reported by a sync run.
pub fn assert_progress_sequence(json: &Value, expected: &[u64]) -> Result<()> {
    let events = json["content"]["events"]
        .as_array()
        .context("Expected 'content.events' array in JSON")?;

    let progress: Vec<u64> = events
        .iter()
        .filter(|event| event["kind"] == "progress")
        .filter_map(|event| event["percent"].as_u64())
        .collect();

    if progress != expected {
        anyhow::bail!("Expected progress {:?}, got {:?}", expected, progress);
    }

    Ok(())
}

/// Assert that the rows of card `index` have exactly these `(depth, key)` pairs.
pub fn assert_card_rows(json: &Value, index: usize, expected: &[(u64, &str)]) -> Result<()> {
    let rows = json["content"]["cards"][index]["rows"]
        .as_array()
        .with_context(|| format!("Expected 'content.cards[{}].rows' array in JSON", index))?;

    let actual: Vec<(u64, &str)> = rows
        .iter()
        .filter_map(|row| Some((row["depth"].as_u64()?, row["key"].as_str()?)))
        .collect();

    if actual != expected {
        anyhow::bail!("Expected rows {:?}, got {:?}", expected, actual);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assert_progress_sequence() {
        let json = json!({
            "content": {
                "events": [
                    {"kind": "state_changed", "from": "connecting", "to": "connected"},
                    {"kind": "progress", "percent": 0},
                    {"kind": "progress", "percent": 100}
                ]
            }
        });

        assert!(assert_progress_sequence(&json, &[0, 100]).is_ok());
        assert!(assert_progress_sequence(&json, &[100]).is_err());
    }

    #[test]
    fn test_assert_card_rows() {
        let json = json!({
            "content": {
                "cards": [{
                    "rows": [
                        {"depth": 0, "key": "A", "value": 1},
                        {"depth": 0, "key": "B"},
                        {"depth": 1, "key": "C", "value": 2}
                    ]
                }]
            }
        });

        assert!(assert_card_rows(&json, 0, &[(0, "A"), (0, "B"), (1, "C")]).is_ok());
        assert!(assert_card_rows(&json, 0, &[(0, "A")]).is_err());
        assert!(assert_card_rows(&json, 1, &[]).is_err());
    }

    #[test]
    fn test_assert_badge_level() {
        let json = json!({"badge": {"label": "ok", "level": "success"}});
        assert!(assert_badge_level(&json, "success").is_ok());
        assert!(assert_badge_level(&json, "error").is_err());
    }
}
