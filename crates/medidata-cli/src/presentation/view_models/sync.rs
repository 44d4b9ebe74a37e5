use chrono::{DateTime, Utc};
use medidata_engine::Descriptor;
use medidata_runtime::{ConnectionState, Notice, TimedEvent};
use medidata_types::{NotionOptions, SyncStatus};
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct SyncRunViewModel {
    pub connector: String,
    pub state: ConnectionState,
    pub progress: u8,
    pub last_sync: Option<DateTime<Utc>>,
    pub elapsed_ms: u64,
    pub options: Option<NotionOptions>,
    pub enabled_categories: Vec<String>,
    pub syncs_requested: u32,
    pub syncs_completed: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub notices: Vec<Notice>,
    pub records: Vec<SyncRecordViewModel>,
    pub events: Vec<TimedEvent>,
}

#[derive(Debug, Serialize)]
pub struct SyncRecordViewModel {
    pub exam_type: String,
    pub status: SyncStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub style: Descriptor,
}

impl CreateView for SyncRunViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::sync::SyncRunView;
        Box::new(SyncRunView::new(self, mode))
    }
}
