use crate::error::{Error, Result};
use crate::patient::ExamCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Completed,
    Pending,
    Failed,
}

impl SyncStatus {
    pub const ALL: [SyncStatus; 3] = [SyncStatus::Completed, SyncStatus::Pending, SyncStatus::Failed];

    pub fn as_str(&self) -> &'static str {
        match self {
            SyncStatus::Completed => "completed",
            SyncStatus::Pending => "pending",
            SyncStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SyncStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "completed" => Ok(SyncStatus::Completed),
            "pending" => Ok(SyncStatus::Pending),
            "failed" => Ok(SyncStatus::Failed),
            _ => Err(Error::UnknownTag {
                kind: "sync status",
                tag: s.to_string(),
            }),
        }
    }
}

/// Outcome of one synchronization attempt. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncRecord {
    pub exam_type: String,
    pub status: SyncStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl SyncRecord {
    pub fn completed(exam_type: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            exam_type: exam_type.into(),
            status: SyncStatus::Completed,
            timestamp,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Sync history, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SyncLog {
    records: Vec<SyncRecord>,
}

impl SyncLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four per-category entries shown before any manual sync has run.
    pub fn seeded(at: DateTime<Utc>) -> Self {
        let counts = [
            (ExamCategory::Metabolic, 34),
            (ExamCategory::Microbiota, 28),
            (ExamCategory::Genetic, 15),
            (ExamCategory::Laboratory, 17),
        ];

        let records = counts
            .into_iter()
            .map(|(category, count)| {
                SyncRecord::completed(category.exam_title(), at)
                    .with_details(format!("{} records synced successfully", count))
            })
            .collect();

        Self { records }
    }

    pub fn prepend(&mut self, record: SyncRecord) {
        self.records.insert(0, record);
    }

    pub fn latest(&self) -> Option<&SyncRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SyncRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[SyncRecord] {
        &self.records
    }
}

/// Which exam families the Notion workspace should receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotionOptions {
    pub sync_metabolic: bool,
    pub sync_microbiota: bool,
    pub sync_genetic: bool,
    pub sync_laboratory: bool,
    pub create_dashboards: bool,
}

impl Default for NotionOptions {
    fn default() -> Self {
        Self {
            sync_metabolic: true,
            sync_microbiota: true,
            sync_genetic: true,
            sync_laboratory: true,
            create_dashboards: true,
        }
    }
}

impl NotionOptions {
    pub fn syncs(&self, category: ExamCategory) -> bool {
        match category {
            ExamCategory::Metabolic => self.sync_metabolic,
            ExamCategory::Microbiota => self.sync_microbiota,
            ExamCategory::Genetic => self.sync_genetic,
            ExamCategory::Laboratory => self.sync_laboratory,
        }
    }

    pub fn enabled_categories(&self) -> Vec<ExamCategory> {
        ExamCategory::ALL
            .into_iter()
            .filter(|category| self.syncs(*category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 16, 17, 45, 0).unwrap()
    }

    #[test]
    fn test_prepend_keeps_newest_first() {
        let mut log = SyncLog::seeded(at());
        assert_eq!(log.len(), 4);

        log.prepend(SyncRecord::completed("Full Database", at()));
        assert_eq!(log.latest().unwrap().exam_type, "Full Database");
        assert_eq!(log.as_slice()[1].exam_type, "Metabolic Exams");
    }

    #[test]
    fn test_seeded_details() {
        let log = SyncLog::seeded(at());
        let details: Vec<_> = log.iter().filter_map(|r| r.details.as_deref()).collect();
        assert_eq!(details[0], "34 records synced successfully");
        assert_eq!(details[3], "17 records synced successfully");
    }

    #[test]
    fn test_notion_options_default_all_on() {
        let options = NotionOptions::default();
        assert_eq!(options.enabled_categories().len(), 4);
        assert!(options.create_dashboards);
    }

    #[test]
    fn test_notion_options_partial_toml_like_json() {
        let options: NotionOptions = serde_json::from_str(r#"{"sync_genetic": false}"#).unwrap();
        assert!(!options.syncs(ExamCategory::Genetic));
        assert_eq!(
            options.enabled_categories(),
            vec![ExamCategory::Metabolic, ExamCategory::Microbiota, ExamCategory::Laboratory]
        );
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("Pending".parse::<SyncStatus>().unwrap(), SyncStatus::Pending);
        assert!("done".parse::<SyncStatus>().is_err());
    }
}
