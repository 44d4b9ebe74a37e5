use super::HandlerContext;
use crate::args::hints::cmd;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use medidata_types::PatientRoster;
use std::path::Path;

const BUNDLED_ROSTER: &str = include_str!("../../assets/sample_patients.json");
const BUNDLED_SOURCE: &str = "bundled sample";

fn load_roster(file: Option<&Path>) -> Result<(String, PatientRoster)> {
    match file {
        Some(path) => {
            let roster = PatientRoster::load_from(path)
                .with_context(|| format!("Failed to load roster from {}", path.display()))?;
            tracing::debug!(path = %path.display(), patients = roster.len(), "roster loaded");
            Ok((path.display().to_string(), roster))
        }
        None => {
            let roster = PatientRoster::from_json_str(BUNDLED_ROSTER)
                .context("Bundled sample roster is invalid")?;
            Ok((BUNDLED_SOURCE.to_string(), roster))
        }
    }
}

pub fn handle_list(file: Option<&Path>, ctx: &HandlerContext) -> Result<()> {
    let (source, roster) = load_roster(file)?;
    ctx.render(presenters::present_patient_list(source, &roster))
}

pub fn handle_show(
    file: Option<&Path>,
    index: usize,
    card: Option<&str>,
    ctx: &HandlerContext,
) -> Result<()> {
    let (_, roster) = load_roster(file)?;

    let Some(patient) = roster.get(index) else {
        anyhow::bail!(
            "No patient at index {} (roster has {}); see `{}`",
            index,
            roster.len(),
            cmd::PATIENT_LIST
        );
    };

    if let Some(label) = card
        && patient.card(label).is_none()
    {
        let known: Vec<&str> = patient.cards.iter().map(|c| c.label.as_str()).collect();
        anyhow::bail!(
            "Patient '{}' has no card '{}' (cards: {})",
            patient.name,
            label,
            known.join(", ")
        );
    }

    ctx.render(presenters::present_patient_detail(index, patient, card))
}
