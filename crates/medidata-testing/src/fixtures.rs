//! Sample data shared by the integration tests.

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use medidata_runtime::FixedClock;
use medidata_types::{FieldMap, PatientRoster};
use std::path::{Path, PathBuf};

/// The roster bundled with the CLI.
pub const SAMPLE_ROSTER_JSON: &str = include_str!("../../medidata-cli/assets/sample_patients.json");

pub fn sample_roster() -> PatientRoster {
    PatientRoster::from_json_str(SAMPLE_ROSTER_JSON).expect("bundled roster must parse")
}

/// A chain `level0 -> level1 -> ... -> leaf` with `depth` nested maps.
///
/// `depth == 0` yields a single leaf at the top level.
pub fn nested_fields(depth: usize) -> FieldMap {
    let mut current = FieldMap::new().with("leaf", "value");
    for level in (0..depth).rev() {
        current = FieldMap::new().with(format!("level{}", level), current);
    }
    current
}

/// A roster with one patient: a custom `Notes` card and a nested `Genetic` card.
pub fn minimal_roster_json() -> String {
    serde_json::json!({
        "patients": [{
            "id": "P-0001",
            "name": "Ana Souza",
            "age": 41,
            "gender": "Feminino",
            "birthdate": "02/03/1984",
            "risk_level": "medium",
            "cards": [
                {"type": "Notes", "content": {"Observação": "Sem queixas"}},
                {"type": "Genetic", "content": {"Risco": "Baixo", "Painel": {"APOE": "e3/e3"}}}
            ]
        }]
    })
    .to_string()
}

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 16, 17, 45, 0)
        .single()
        .expect("valid fixed timestamp")
}

pub fn fixed_clock() -> FixedClock {
    FixedClock(fixed_time())
}

/// Write `content` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, content)?;
    Ok(path)
}
