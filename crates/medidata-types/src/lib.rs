pub mod error;
pub mod fields;
pub mod patient;
pub mod sync;
pub mod webhook;

pub use error::{Error, Result};
pub use fields::{FieldIter, FieldMap, FieldValue, Scalar};
pub use patient::{CardCategory, CardSection, ExamCategory, PatientRecord, PatientRoster, RiskLevel};
pub use sync::{NotionOptions, SyncLog, SyncRecord, SyncStatus};
pub use webhook::WebhookPayload;
