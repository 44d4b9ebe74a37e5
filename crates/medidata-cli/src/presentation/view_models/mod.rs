pub mod common;
pub mod config;
pub mod patient;
pub mod result;
pub mod sync;
pub mod taxonomy;
pub mod webhook;

pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use config::{ConfigInitViewModel, ConfigShowViewModel};
pub use patient::{
    CardViewModel, PatientDetailViewModel, PatientListEntry, PatientListViewModel, RowViewModel,
};
pub use result::CommandResultViewModel;
pub use sync::{SyncRecordViewModel, SyncRunViewModel};
pub use taxonomy::{TaxonomyEntry, TaxonomyListViewModel, TaxonomyLookupViewModel};
pub use webhook::{WebhookPayloadViewModel, WebhookSendViewModel};

use std::fmt;

/// Bridge from a view model to its text view for a given density.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
