pub mod clock;
pub mod config;
pub mod connector;
pub mod error;
pub mod notice;
pub mod scheduler;
pub mod sync;
pub mod webhook;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, SyncSettings, WebhookSettings, resolve_workspace_path};
pub use connector::{ConnectError, Connector, MockConnector};
pub use error::{Error, Result};
pub use notice::{Notice, NoticeLevel};
pub use scheduler::{Scheduler, TimerId};
pub use sync::{
    ConnectionState, FULL_SYNC_EXAM_TYPE, SyncError, SyncEvent, SyncSession, SyncTimer, TimedEvent,
};
pub use webhook::{
    DryRunSink, HttpSink, RecordingSink, WebhookDelivery, WebhookEndpoint, WebhookSink,
    send_test_payload,
};
