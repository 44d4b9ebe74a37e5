pub mod config;
pub mod patient;
pub mod sync;
pub mod taxonomy;
pub mod webhook;

pub use config::{present_config_init, present_config_show};
pub use patient::{present_patient_detail, present_patient_list};
pub use sync::present_sync_run;
pub use taxonomy::{present_taxonomy_list, present_taxonomy_lookup};
pub use webhook::{present_webhook_payload, present_webhook_send};
