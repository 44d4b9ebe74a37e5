use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CardViewModel, CommandResultViewModel, Guidance, PatientDetailViewModel, PatientListEntry,
    PatientListViewModel, RowViewModel, StatusBadge,
};
use medidata_engine::taxonomy::risk_descriptor;
use medidata_engine::{CardRendering, CardSummary, render_patient, summarize_patient};
use medidata_types::{PatientRecord, PatientRoster};

pub fn present_patient_list(
    source: String,
    roster: &PatientRoster,
) -> CommandResultViewModel<PatientListViewModel> {
    let patients: Vec<PatientListEntry> = roster
        .patients
        .iter()
        .enumerate()
        .map(|(index, patient)| {
            let summary = summarize_patient(patient);
            PatientListEntry {
                index,
                id: patient.id.clone(),
                name: patient.name.clone(),
                initials: summary.initials,
                age: patient.age,
                gender: patient.gender.clone(),
                birthdate: patient.birthdate.clone(),
                risk_level: patient.risk_level.map(|level| level.as_str().to_string()),
                risk_style: patient.risk_level.map(risk_descriptor),
                card_count: summary.card_count,
                exam_card_count: summary.exam_card_count,
            }
        })
        .collect();

    let content = PatientListViewModel { source, patients };
    let mut result = CommandResultViewModel::new(content);

    if result.content.patients.is_empty() {
        result = result
            .with_badge(StatusBadge::info("No patients in roster"))
            .with_suggestion(
                Guidance::new("Render a roster exported as {\"patients\": [...]}")
                    .with_command(cmd::PATIENT_SHOW_FILE),
            );
    } else {
        let count = result.content.patients.len();
        result = result
            .with_badge(StatusBadge::success(format!("{} patient(s)", count)))
            .with_suggestion(
                Guidance::new("Render a patient's exam cards").with_command(cmd::PATIENT_SHOW),
            );
    }

    result
}

fn present_card(rendering: CardRendering<'_>, summary: &CardSummary) -> CardViewModel {
    let rows = rendering
        .rows
        .map(|row| RowViewModel {
            depth: row.depth(),
            key: row.key().to_string(),
            value: row.value().cloned(),
        })
        .collect();

    CardViewModel {
        label: rendering.label.to_string(),
        category: rendering.category.tag().to_string(),
        style: rendering.descriptor,
        field_count: summary.field_count,
        leaf_count: summary.leaf_count,
        depth: summary.depth,
        rows,
    }
}

/// `card_label` has already been checked against the patient's cards.
pub fn present_patient_detail(
    index: usize,
    patient: &PatientRecord,
    card_label: Option<&str>,
) -> CommandResultViewModel<PatientDetailViewModel> {
    let summary = summarize_patient(patient);

    let cards: Vec<CardViewModel> = render_patient(patient)
        .into_iter()
        .zip(summary.cards.iter())
        .filter(|(rendering, _)| {
            card_label.is_none_or(|label| rendering.label.eq_ignore_ascii_case(label))
        })
        .map(|(rendering, card)| present_card(rendering, card))
        .collect();

    let leaf_count: usize = cards.iter().map(|card| card.leaf_count).sum();
    let card_count = cards.len();

    let content = PatientDetailViewModel {
        index,
        id: patient.id.clone(),
        name: patient.name.clone(),
        initials: summary.initials,
        age: patient.age,
        gender: patient.gender.clone(),
        birthdate: patient.birthdate.clone(),
        risk_level: patient.risk_level.map(|level| level.as_str().to_string()),
        risk_style: patient.risk_level.map(risk_descriptor),
        leaf_count,
        cards,
    };

    let mut result = CommandResultViewModel::new(content).with_badge(StatusBadge::success(format!(
        "{} card(s), {} value(s)",
        card_count, leaf_count
    )));

    if card_label.is_none()
        && let Some(first_exam) = patient
            .cards
            .iter()
            .find(|card| card.category().exam().is_some())
    {
        result = result.with_suggestion(
            Guidance::new("Show a single card")
                .with_command(fmt::patient_show_card(index, &first_exam.label)),
        );
    }

    result
}
