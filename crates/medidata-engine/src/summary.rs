use medidata_types::{CardCategory, PatientRecord};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSummary {
    pub label: String,
    pub category: String,
    pub field_count: usize,
    pub leaf_count: usize,
    pub depth: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientSummary {
    pub name: String,
    pub initials: String,
    pub card_count: usize,
    pub exam_card_count: usize,
    pub leaf_count: usize,
    pub cards: Vec<CardSummary>,
}

pub(crate) fn summarize(patient: &PatientRecord) -> PatientSummary {
    let cards: Vec<CardSummary> = patient
        .cards
        .iter()
        .map(|card| CardSummary {
            label: card.label.clone(),
            category: card.category().tag().to_string(),
            field_count: card.content.len(),
            leaf_count: card.content.leaf_count(),
            depth: card.content.depth(),
        })
        .collect();

    let exam_card_count = patient
        .cards
        .iter()
        .filter(|card| matches!(card.category(), CardCategory::Exam(_)))
        .count();

    PatientSummary {
        name: patient.name.clone(),
        initials: patient.initials(),
        card_count: cards.len(),
        exam_card_count,
        leaf_count: cards.iter().map(|c| c.leaf_count).sum(),
        cards,
    }
}
