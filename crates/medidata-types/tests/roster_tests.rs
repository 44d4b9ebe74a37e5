use medidata_types::{CardCategory, ExamCategory, FieldValue, PatientRoster, RiskLevel};
use std::io::Write;
use tempfile::TempDir;

const ROSTER: &str = r#"{
  "patients": [
    {
      "id": "P-12345",
      "name": "Roseli Aparecida Goncalves Brombim",
      "age": 68,
      "gender": "Feminino",
      "birthdate": "31/07/1956",
      "risk_level": "medium",
      "cards": [
        {"type": "Basic Info", "content": {"Nome": "Roseli", "Idade": 68}},
        {"type": "Metabolômica", "content": {
          "Glycolysis": "14.9",
          "Amino Acid Metabolism": {"Phenylalanine": "37.1", "Tyrosine": "41.8"}
        }}
      ]
    }
  ]
}"#;

#[test]
fn test_roster_round_trips_through_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("patients.json");
    std::fs::File::create(&path)?.write_all(ROSTER.as_bytes())?;

    let roster = PatientRoster::load_from(&path)?;

    let patient = roster.get(0).expect("one patient");
    assert_eq!(patient.id.as_deref(), Some("P-12345"));
    assert_eq!(patient.risk_level, Some(RiskLevel::Medium));
    assert_eq!(patient.initials(), "RA");

    let categories: Vec<CardCategory> = patient.cards.iter().map(|c| c.category()).collect();
    assert_eq!(
        categories,
        vec![
            CardCategory::Custom("Basic Info".to_string()),
            CardCategory::Exam(ExamCategory::Metabolic),
        ]
    );

    let metabolic = &patient.cards[1].content;
    assert_eq!(
        metabolic.keys().collect::<Vec<_>>(),
        vec!["Glycolysis", "Amino Acid Metabolism"]
    );
    assert!(matches!(
        metabolic.get("Amino Acid Metabolism"),
        Some(FieldValue::Nested(_))
    ));
    Ok(())
}

#[test]
fn test_malformed_roster_reports_json_error() {
    let err = PatientRoster::from_json_str(r#"{"patients": [{"name": 5}]}"#).unwrap_err();
    assert!(err.to_string().starts_with("JSON error"));
}

#[test]
fn test_missing_file_reports_io_error() {
    let err = PatientRoster::load_from(std::path::Path::new("/nonexistent/medidata.json")).unwrap_err();
    assert!(err.to_string().starts_with("IO error"));
}
