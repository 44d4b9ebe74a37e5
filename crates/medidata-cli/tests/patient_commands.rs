//! Patient & Taxonomy Command Tests
//!
//! Rendering of the bundled roster and of roster files, plus tag lookups.

use anyhow::Result;
use medidata_testing::TestWorld;
use medidata_testing::assertions::{assert_badge_level, assert_card_count, assert_card_rows};
use medidata_testing::fixtures::minimal_roster_json;

#[test]
fn test_patient_list_uses_bundled_sample() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["patient", "list"])?;

    assert!(result.success(), "list should succeed: {}", result.stderr());
    assert!(result.stdout().contains("Source: bundled sample"));
    assert!(result.stdout().contains("Roseli Aparecida Goncalves Brombim"));
    assert!(result.stdout().contains("1 patient(s)"));
    Ok(())
}

#[test]
fn test_patient_list_quiet_prints_names_only() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["patient", "list", "--quiet"])?;

    assert!(result.success());
    assert_eq!(result.stdout(), "Roseli Aparecida Goncalves Brombim\n");
    Ok(())
}

#[test]
fn test_patient_show_json_flattens_metabolomics() -> Result<()> {
    let world = TestWorld::new().json();

    let result = world.run(&["patient", "show"])?;
    assert!(result.success(), "show should succeed: {}", result.stderr());

    let json = result.json()?;
    assert_badge_level(&json, "success")?;
    assert_card_count(&json, 5)?;
    assert_eq!(json["content"]["initials"], "RA");
    assert_eq!(json["content"]["leaf_count"], 45);
    assert_eq!(json["content"]["cards"][2]["label"], "Metabolômica");
    assert_eq!(json["content"]["cards"][2]["category"], "metabolic");
    assert_eq!(json["content"]["cards"][2]["style"]["hue"], "metabolic");
    assert_eq!(json["content"]["cards"][0]["category"], "custom");
    assert_eq!(json["content"]["cards"][0]["style"]["background"], "bg-gray-100");

    assert_card_rows(
        &json,
        2,
        &[
            (0, "Glycolysis"),
            (0, "Krebs Cycle"),
            (0, "Fatty Acid Oxidation"),
            (0, "Ketones"),
            (0, "Amino Acid Metabolism"),
            (1, "Phenylalanine"),
            (1, "Tyrosine"),
            (1, "Tryptophan"),
            (0, "Nutrition"),
            (1, "Vitamin B12"),
            (1, "Folate"),
            (1, "Vitamin B6"),
            (1, "Biotin"),
            (0, "Microbial Metabolites"),
            (1, "Amino Acid"),
            (1, "Polyphenols"),
            (1, "Isoflavones"),
        ],
    )?;

    let nutrition = &json["content"]["cards"][2]["rows"][8];
    assert!(nutrition.get("value").is_none(), "headers carry no value");
    assert_eq!(json["content"]["cards"][2]["rows"][0]["value"], "14.9");
    Ok(())
}

#[test]
fn test_patient_show_text_indents_nested_rows() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["patient", "show", "--card", "metabolômica"])?;

    assert!(result.success(), "show should succeed: {}", result.stderr());
    let stdout = result.stdout();
    assert!(stdout.contains("[Metabolômica] metabolic"));
    assert!(stdout.contains("\n  Glycolysis: 14.9\n"));
    assert!(stdout.contains("\n  Nutrition\n    Vitamin B12: Normal\n"));
    assert!(!stdout.contains("[Microbiota]"));
    Ok(())
}

#[test]
fn test_patient_show_card_filter_keeps_one_card() -> Result<()> {
    let world = TestWorld::new().json();

    let result = world.run(&["patient", "show", "--card", "microbiota"])?;
    assert!(result.success());

    let json = result.json()?;
    assert_card_count(&json, 1)?;
    assert_eq!(json["content"]["cards"][0]["label"], "Microbiota");
    assert_eq!(json["content"]["leaf_count"], 9);
    assert!(json.get("suggestions").is_none());
    Ok(())
}

#[test]
fn test_patient_show_unknown_card_fails() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["patient", "show", "--card", "Dermatology"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("has no card 'Dermatology'"));
    Ok(())
}

#[test]
fn test_patient_show_index_out_of_range_fails() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["patient", "show", "--index", "3"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("No patient at index 3 (roster has 1)"));
    Ok(())
}

#[test]
fn test_patient_show_reads_roster_file() -> Result<()> {
    let world = TestWorld::new().json();
    let path = world.write_file("roster.json", &minimal_roster_json())?;
    let path = path.to_string_lossy().to_string();

    let result = world.run(&["patient", "show", "--file", &path])?;
    assert!(result.success(), "show should succeed: {}", result.stderr());

    let json = result.json()?;
    assert_eq!(json["content"]["name"], "Ana Souza");
    assert_eq!(json["content"]["id"], "P-0001");
    assert_eq!(json["content"]["risk_level"], "medium");
    assert_eq!(json["content"]["risk_style"]["hue"], "yellow");
    assert_eq!(json["content"]["cards"][0]["category"], "custom");
    assert_eq!(json["content"]["cards"][1]["category"], "genetic");
    assert_card_rows(&json, 1, &[(0, "Risco"), (0, "Painel"), (1, "APOE")])?;
    Ok(())
}

#[test]
fn test_patient_list_rejects_malformed_file() -> Result<()> {
    let world = TestWorld::new();
    let path = world.write_file("broken.json", "{\"patients\": [{\"name\": 1}]}")?;
    let path = path.to_string_lossy().to_string();

    let result = world.run(&["patient", "list", "--file", &path])?;

    assert!(!result.success());
    assert!(result.stderr().contains("Failed to load roster"));
    Ok(())
}

#[test]
fn test_taxonomy_lookup_unknown_tag_is_neutral() -> Result<()> {
    let world = TestWorld::new().json();

    let result = world.run(&["taxonomy", "lookup", "category", "Dermatology"])?;
    assert!(result.success());

    let json = result.json()?;
    assert_badge_level(&json, "warning")?;
    assert!(json["content"]["matched"].is_null());
    assert_eq!(json["content"]["style"]["background"], "bg-gray-100");
    assert_eq!(json["content"]["style"]["hue"], "gray");
    Ok(())
}

#[test]
fn test_taxonomy_lookup_accepts_portuguese_label() -> Result<()> {
    let world = TestWorld::new().json();

    let result = world.run(&["taxonomy", "lookup", "category", "Genética"])?;
    assert!(result.success());

    let json = result.json()?;
    assert_badge_level(&json, "success")?;
    assert_eq!(json["content"]["matched"], "genetic");
    assert_eq!(json["content"]["style"]["hue"], "genetic");
    Ok(())
}

#[test]
fn test_taxonomy_list_covers_every_tag() -> Result<()> {
    let world = TestWorld::new().json();

    let result = world.run(&["taxonomy", "list"])?;
    assert!(result.success());

    let json = result.json()?;
    let count = |key: &str| json["content"][key].as_array().map(Vec::len);
    assert_eq!(count("categories"), Some(4));
    assert_eq!(count("statuses"), Some(3));
    assert_eq!(count("risks"), Some(3));
    assert_eq!(json["content"]["neutral"]["hue"], "gray");
    Ok(())
}
