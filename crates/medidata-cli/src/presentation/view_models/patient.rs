use medidata_engine::Descriptor;
use medidata_types::Scalar;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct PatientListViewModel {
    /// Roster file path, or "bundled sample".
    pub source: String,
    pub patients: Vec<PatientListEntry>,
}

#[derive(Debug, Serialize)]
pub struct PatientListEntry {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub initials: String,
    pub age: u32,
    pub gender: String,
    pub birthdate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_style: Option<Descriptor>,
    pub card_count: usize,
    pub exam_card_count: usize,
}

#[derive(Debug, Serialize)]
pub struct PatientDetailViewModel {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub initials: String,
    pub age: u32,
    pub gender: String,
    pub birthdate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_style: Option<Descriptor>,
    pub leaf_count: usize,
    pub cards: Vec<CardViewModel>,
}

#[derive(Debug, Serialize)]
pub struct CardViewModel {
    pub label: String,
    pub category: String,
    pub style: Descriptor,
    pub field_count: usize,
    pub leaf_count: usize,
    pub depth: usize,
    pub rows: Vec<RowViewModel>,
}

/// A flattened field line. Headers carry no value.
#[derive(Debug, Serialize)]
pub struct RowViewModel {
    pub depth: usize,
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Scalar>,
}

impl RowViewModel {
    pub fn is_header(&self) -> bool {
        self.value.is_none()
    }
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for PatientListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::patient::PatientListView;
        Box::new(PatientListView::new(self, mode))
    }
}

impl CreateView for PatientDetailViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::patient::PatientDetailView;
        Box::new(PatientDetailView::new(self, mode))
    }
}
