use medidata_engine::Descriptor;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct TaxonomyListViewModel {
    pub categories: Vec<TaxonomyEntry>,
    pub statuses: Vec<TaxonomyEntry>,
    pub risks: Vec<TaxonomyEntry>,
    pub neutral: Descriptor,
}

#[derive(Debug, Serialize)]
pub struct TaxonomyEntry {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub style: Descriptor,
}

#[derive(Debug, Serialize)]
pub struct TaxonomyLookupViewModel {
    pub kind: String,
    pub tag: String,
    /// Canonical tag the input resolved to; `None` means the neutral fallback.
    pub matched: Option<String>,
    pub style: Descriptor,
}

impl CreateView for TaxonomyListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::taxonomy::TaxonomyListView;
        Box::new(TaxonomyListView::new(self, mode))
    }
}

impl CreateView for TaxonomyLookupViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::taxonomy::TaxonomyLookupView;
        Box::new(TaxonomyLookupView::new(self, mode))
    }
}
