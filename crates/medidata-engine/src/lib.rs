// Engine module - pure presentation logic shared by every front end.
// Nothing here performs I/O or can fail; callers own all state.

mod card;
pub mod render;
mod summary;
pub mod taxonomy;

pub use card::{CardRendering, render_card};
pub use render::{Row, Rows, render_fields};
pub use summary::{CardSummary, PatientSummary};
pub use taxonomy::{Descriptor, Hue, NEUTRAL};

use medidata_types::PatientRecord;

// Façade API - stable entry points for the CLI layer

/// Render every card of a patient, in card order.
pub fn render_patient(patient: &PatientRecord) -> Vec<CardRendering<'_>> {
    patient.cards.iter().map(render_card).collect()
}

/// Card and field statistics for one patient.
pub fn summarize_patient(patient: &PatientRecord) -> PatientSummary {
    summary::summarize(patient)
}
