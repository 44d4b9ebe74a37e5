use chrono::{DateTime, TimeZone, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Body posted to the lab-exam webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub patient_id: String,
    pub exam_type: String,
    pub exam_data: IndexMap<String, serde_json::Number>,
    pub timestamp: DateTime<Utc>,
}

impl WebhookPayload {
    /// The documented example payload.
    pub fn template() -> Self {
        let mut exam_data = IndexMap::new();
        exam_data.insert("glucose".to_string(), 98u64.into());
        exam_data.insert("cholesterol".to_string(), 180u64.into());
        exam_data.insert("triglycerides".to_string(), 140u64.into());

        Self {
            patient_id: "P-12345".to_string(),
            exam_type: "Laboratory".to_string(),
            exam_data,
            timestamp: Utc
                .with_ymd_and_hms(2025, 5, 16, 17, 45, 0)
                .single()
                .unwrap_or_default(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
