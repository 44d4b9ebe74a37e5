//! Simulated Notion workspace connection.
//!
//! ```text
//!  Disconnected --submit(token)--> Connecting --connect delay--> Connected
//!       ^                              |                           |  ^
//!       +------ connector refused -----+                force_sync |  | progress reaches 100
//!                                                                  v  |
//!                                                            (progress ticks)
//! ```
//!
//! The session owns its scheduler; nothing happens until the caller advances
//! virtual time. Every observable effect is queued as a [`TimedEvent`] and
//! handed out by [`SyncSession::drain_events`].

use crate::clock::{Clock, SystemClock};
use crate::config::SyncSettings;
use crate::connector::{Connector, MockConnector};
use crate::notice::Notice;
use crate::scheduler::{Scheduler, TimerId};
use chrono::{DateTime, Utc};
use medidata_types::{NotionOptions, SyncLog, SyncRecord};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

pub const FULL_SYNC_EXAM_TYPE: &str = "Full Database";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConnectionState::Disconnected => "disconnected",
            ConnectionState::Connecting => "connecting",
            ConnectionState::Connected => "connected",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncTimer {
    ConnectElapsed,
    ProgressTick,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SyncEvent {
    StateChanged {
        from: ConnectionState,
        to: ConnectionState,
    },
    Progress {
        percent: u8,
    },
    RecordAdded {
        record: SyncRecord,
    },
    Notice {
        notice: Notice,
    },
}

/// An event with the virtual time at which it happened.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimedEvent {
    #[serde(rename = "at_ms", serialize_with = "serialize_millis")]
    pub at: Duration,
    #[serde(flatten)]
    pub event: SyncEvent,
}

/// Whole milliseconds, saturating at `u64::MAX`.
pub fn saturating_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn serialize_millis<S: serde::Serializer>(at: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(saturating_millis(*at))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// Token was empty or whitespace; a validation notice was emitted.
    EmptyToken,
    InvalidTransition {
        operation: &'static str,
        state: ConnectionState,
    },
    /// A manual sync is still ticking.
    SyncInFlight,
    /// The session was torn down and accepts no more operations.
    TornDown,
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::EmptyToken => write!(f, "Notion integration token must not be empty"),
            SyncError::InvalidTransition { operation, state } => {
                write!(f, "Cannot {} while {}", operation, state)
            }
            SyncError::SyncInFlight => write!(f, "A sync is already in progress"),
            SyncError::TornDown => write!(f, "Sync session has been torn down"),
        }
    }
}

impl std::error::Error for SyncError {}

pub struct SyncSession {
    settings: SyncSettings,
    state: ConnectionState,
    progress: u8,
    last_sync: Option<DateTime<Utc>>,
    log: SyncLog,
    options: Option<NotionOptions>,
    pending_token: Option<String>,
    connect_timer: Option<TimerId>,
    tick_timer: Option<TimerId>,
    scheduler: Scheduler<SyncTimer>,
    clock: Box<dyn Clock>,
    connector: Box<dyn Connector>,
    outbox: Vec<TimedEvent>,
    torn_down: bool,
}

impl SyncSession {
    pub fn new(settings: SyncSettings) -> Self {
        Self {
            settings,
            state: ConnectionState::Disconnected,
            progress: 0,
            last_sync: None,
            log: SyncLog::new(),
            options: None,
            pending_token: None,
            connect_timer: None,
            tick_timer: None,
            scheduler: Scheduler::new(),
            clock: Box::new(SystemClock),
            connector: Box::new(MockConnector),
            outbox: Vec::new(),
            torn_down: false,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_connector(mut self, connector: impl Connector + 'static) -> Self {
        self.connector = Box::new(connector);
        self
    }

    pub fn with_log(mut self, log: SyncLog) -> Self {
        self.log = log;
        self
    }

    // --------------------------------------------------------
    // Queries
    // --------------------------------------------------------

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    pub fn is_syncing(&self) -> bool {
        self.tick_timer.is_some()
    }

    /// True while connecting or while a manual sync is ticking.
    pub fn is_busy(&self) -> bool {
        self.state == ConnectionState::Connecting || self.is_syncing()
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn last_sync(&self) -> Option<DateTime<Utc>> {
        self.last_sync
    }

    pub fn records(&self) -> &SyncLog {
        &self.log
    }

    /// Options captured at the last successful submission.
    pub fn options(&self) -> Option<&NotionOptions> {
        self.options.as_ref()
    }

    pub fn settings(&self) -> &SyncSettings {
        &self.settings
    }

    pub fn connector_name(&self) -> &str {
        self.connector.name()
    }

    pub fn elapsed(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Virtual time until the next timer fires, if any is pending.
    pub fn next_wait(&self) -> Option<Duration> {
        self.scheduler
            .next_due()
            .map(|due| due.saturating_sub(self.scheduler.now()))
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    // --------------------------------------------------------
    // Operations
    // --------------------------------------------------------

    pub fn submit(&mut self, token: &str, options: NotionOptions) -> Result<(), SyncError> {
        self.ensure_alive()?;

        if self.state != ConnectionState::Disconnected {
            tracing::warn!(state = %self.state, "submit rejected");
            return Err(SyncError::InvalidTransition {
                operation: "submit",
                state: self.state,
            });
        }

        if token.trim().is_empty() {
            tracing::warn!("submit rejected: empty integration token");
            self.emit(SyncEvent::Notice {
                notice: Notice::error("Error", "Please enter your Notion integration token"),
            });
            return Err(SyncError::EmptyToken);
        }

        self.options = Some(options);
        self.pending_token = Some(token.to_string());
        self.transition(ConnectionState::Connecting);
        self.connect_timer = Some(
            self.scheduler
                .schedule_once(self.settings.connect_delay(), SyncTimer::ConnectElapsed),
        );
        tracing::debug!(
            delay_ms = self.settings.connect_delay_ms,
            connector = self.connector.name(),
            "connect scheduled"
        );
        Ok(())
    }

    pub fn force_sync(&mut self) -> Result<(), SyncError> {
        self.ensure_alive()?;

        if self.state != ConnectionState::Connected {
            tracing::warn!(state = %self.state, "force_sync rejected");
            return Err(SyncError::InvalidTransition {
                operation: "force_sync",
                state: self.state,
            });
        }
        if self.is_syncing() {
            tracing::warn!(progress = self.progress, "force_sync rejected: sync in flight");
            return Err(SyncError::SyncInFlight);
        }

        self.set_progress(0);
        self.tick_timer = Some(
            self.scheduler
                .schedule_every(self.settings.tick_interval(), SyncTimer::ProgressTick),
        );
        tracing::debug!(interval_ms = self.settings.tick_interval_ms, "manual sync started");
        Ok(())
    }

    /// Advance virtual time, firing every timer that falls due. Returns the
    /// number of timers fired. A torn-down session fires nothing.
    pub fn advance(&mut self, by: Duration) -> usize {
        if self.torn_down {
            return 0;
        }

        let deadline = self.scheduler.now() + by;
        let mut fired = 0;
        while let Some((id, timer)) = self.scheduler.pop_due(deadline) {
            fired += 1;
            self.on_timer(id, timer);
        }
        self.scheduler.move_to(deadline);
        fired
    }

    /// Fire pending timers until none remain. Terminates because connect is
    /// one-shot and progress ticks stop at 100 (the step is at least 1).
    pub fn run_until_idle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(wait) = self.next_wait() {
            if self.torn_down {
                break;
            }
            fired += self.advance(wait);
        }
        fired
    }

    /// Cancel every pending timer. Later operations fail with `TornDown` and
    /// `advance` becomes a no-op, so no state changes after the consumer is gone.
    pub fn teardown(&mut self) -> usize {
        let cancelled = self.scheduler.cancel_all();
        self.connect_timer = None;
        self.tick_timer = None;
        self.pending_token = None;
        self.torn_down = true;
        tracing::debug!(cancelled, "sync session torn down");
        cancelled
    }

    pub fn drain_events(&mut self) -> Vec<TimedEvent> {
        std::mem::take(&mut self.outbox)
    }

    // --------------------------------------------------------
    // Timer handlers
    // --------------------------------------------------------

    fn on_timer(&mut self, id: TimerId, timer: SyncTimer) {
        tracing::debug!(?timer, at_ms = saturating_millis(self.scheduler.now()), "timer fired");
        match timer {
            SyncTimer::ConnectElapsed if self.connect_timer == Some(id) => self.finish_connect(),
            SyncTimer::ProgressTick if self.tick_timer == Some(id) => self.tick(),
            _ => tracing::debug!(?timer, "stale timer ignored"),
        }
    }

    fn finish_connect(&mut self) {
        self.connect_timer = None;
        let token = self.pending_token.take().unwrap_or_default();
        let options = self.options.unwrap_or_default();

        match self.connector.connect(&token, &options) {
            Ok(()) => {
                let now = self.clock.now();
                self.transition(ConnectionState::Connected);
                self.last_sync = Some(now);
                self.set_progress(100);
                tracing::info!(connector = self.connector.name(), "workspace connected");
                self.emit(SyncEvent::Notice {
                    notice: Notice::success(
                        "Connected successfully",
                        "Your Notion workspace is now connected with MediData",
                    ),
                });
            }
            Err(err) => {
                tracing::warn!(connector = self.connector.name(), reason = %err, "connect failed");
                self.options = None;
                self.transition(ConnectionState::Disconnected);
                self.emit(SyncEvent::Notice {
                    notice: Notice::error(
                        "Connection failed",
                        "Failed to connect to Notion. Please check your token and try again.",
                    ),
                });
            }
        }
    }

    fn tick(&mut self) {
        // A zero step would never reach 100 and leave the tick timer armed.
        let step = self.settings.progress_step.max(1);
        let next = self.progress.saturating_add(step).min(100);
        self.set_progress(next);

        if next < 100 {
            return;
        }

        if let Some(id) = self.tick_timer.take() {
            self.scheduler.cancel(id);
        }

        let now = self.clock.now();
        self.last_sync = Some(now);
        let record = SyncRecord::completed(FULL_SYNC_EXAM_TYPE, now)
            .with_details("Manual sync completed successfully");
        self.log.prepend(record.clone());
        tracing::info!(records = self.log.len(), "manual sync completed");

        self.emit(SyncEvent::RecordAdded { record });
        self.emit(SyncEvent::Notice {
            notice: Notice::success("Sync completed", "All data has been synchronized with Notion"),
        });
    }

    // --------------------------------------------------------
    // Helpers
    // --------------------------------------------------------

    fn ensure_alive(&self) -> Result<(), SyncError> {
        if self.torn_down {
            Err(SyncError::TornDown)
        } else {
            Ok(())
        }
    }

    fn transition(&mut self, to: ConnectionState) {
        let from = self.state;
        self.state = to;
        tracing::debug!(%from, %to, "state changed");
        self.emit(SyncEvent::StateChanged { from, to });
    }

    fn set_progress(&mut self, percent: u8) {
        self.progress = percent;
        self.emit(SyncEvent::Progress { percent });
    }

    fn emit(&mut self, event: SyncEvent) {
        self.outbox.push(TimedEvent {
            at: self.scheduler.now(),
            event,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::connector::ConnectError;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 16, 17, 45, 0).unwrap()
    }

    fn session() -> SyncSession {
        SyncSession::new(SyncSettings::default()).with_clock(FixedClock(at()))
    }

    fn events(session: &mut SyncSession) -> Vec<SyncEvent> {
        session.drain_events().into_iter().map(|e| e.event).collect()
    }

    struct RefusingConnector;

    impl Connector for RefusingConnector {
        fn name(&self) -> &str {
            "refusing"
        }

        fn connect(&self, _token: &str, _options: &NotionOptions) -> Result<(), ConnectError> {
            Err(ConnectError::new("invalid token"))
        }
    }

    #[test]
    fn test_blank_token_emits_one_notice_and_keeps_state() {
        let mut session = session();
        let result = session.submit("   ", NotionOptions::default());

        assert_eq!(result, Err(SyncError::EmptyToken));
        assert_eq!(session.state(), ConnectionState::Disconnected);
        assert_eq!(session.pending_timers(), 0);

        let emitted = events(&mut session);
        assert_eq!(emitted.len(), 1);
        match &emitted[0] {
            SyncEvent::Notice { notice } => {
                assert_eq!(notice.description, "Please enter your Notion integration token")
            }
            other => panic!("Expected notice, got {:?}", other),
        }
    }

    #[test]
    fn test_connect_completes_after_delay() {
        let mut session = session();
        session.submit("secret_abc", NotionOptions::default()).unwrap();
        assert_eq!(session.state(), ConnectionState::Connecting);
        assert!(session.is_busy());

        assert_eq!(session.advance(Duration::from_millis(1999)), 0);
        assert_eq!(session.state(), ConnectionState::Connecting);

        assert_eq!(session.advance(Duration::from_millis(1)), 1);
        assert_eq!(session.state(), ConnectionState::Connected);
        assert_eq!(session.progress(), 100);
        assert_eq!(session.last_sync(), Some(at()));
        assert!(!session.is_busy());
    }

    #[test]
    fn test_submit_twice_is_invalid_transition() {
        let mut session = session();
        session.submit("secret_abc", NotionOptions::default()).unwrap();
        let err = session.submit("secret_abc", NotionOptions::default()).unwrap_err();
        assert_eq!(
            err,
            SyncError::InvalidTransition {
                operation: "submit",
                state: ConnectionState::Connecting,
            }
        );
    }

    #[test]
    fn test_force_sync_requires_connection() {
        let mut session = session();
        assert!(matches!(
            session.force_sync(),
            Err(SyncError::InvalidTransition { .. })
        ));
        assert!(events(&mut session).is_empty());
    }

    #[test]
    fn test_force_sync_rejected_while_in_flight() {
        let mut session = session();
        session.submit("secret_abc", NotionOptions::default()).unwrap();
        session.run_until_idle();
        session.force_sync().unwrap();
        assert_eq!(session.force_sync(), Err(SyncError::SyncInFlight));
    }

    #[test]
    fn test_refused_connection_is_retryable() {
        let mut session = session().with_connector(RefusingConnector);
        session.submit("secret_bad", NotionOptions::default()).unwrap();
        session.run_until_idle();

        assert_eq!(session.state(), ConnectionState::Disconnected);
        assert!(session.options().is_none());
        let emitted = events(&mut session);
        assert!(emitted.iter().any(|e| matches!(
            e,
            SyncEvent::Notice { notice } if notice.title == "Connection failed"
        )));

        session = session.with_connector(MockConnector);
        session.submit("secret_good", NotionOptions::default()).unwrap();
        session.run_until_idle();
        assert!(session.is_connected());
    }

    #[test]
    fn test_teardown_cancels_pending_connect() {
        let mut session = session();
        session.submit("secret_abc", NotionOptions::default()).unwrap();
        assert_eq!(session.teardown(), 1);

        assert_eq!(session.advance(Duration::from_secs(10)), 0);
        assert_eq!(session.state(), ConnectionState::Connecting);
        assert_eq!(session.force_sync(), Err(SyncError::TornDown));
    }

    #[test]
    fn test_options_snapshot_taken_at_submit() {
        let mut session = session();
        let options = NotionOptions {
            sync_genetic: false,
            ..NotionOptions::default()
        };
        session.submit("secret_abc", options).unwrap();
        assert_eq!(session.options(), Some(&options));
    }

    #[test]
    fn test_timed_event_serializes_flat() {
        let event = TimedEvent {
            at: Duration::from_millis(2500),
            event: SyncEvent::Progress { percent: 100 },
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json, serde_json::json!({"at_ms": 2500, "kind": "progress", "percent": 100}));
    }

    #[test]
    fn test_zero_progress_step_still_completes() {
        let settings = SyncSettings {
            progress_step: 0,
            ..SyncSettings::default()
        };
        let mut session = SyncSession::new(settings).with_clock(FixedClock(at()));
        session.submit("secret_abc", NotionOptions::default()).unwrap();
        session.advance(Duration::from_secs(2));
        session.force_sync().unwrap();

        let fired = session.advance(Duration::from_secs(3600));
        assert_eq!(fired, 100);
        assert_eq!(session.progress(), 100);
        assert!(!session.is_syncing());
        assert_eq!(session.next_wait(), None);
        assert_eq!(session.records().len(), 1);
    }

    #[test]
    fn test_millis_saturate_instead_of_truncating() {
        assert_eq!(saturating_millis(Duration::from_millis(4500)), 4500);
        assert_eq!(saturating_millis(Duration::MAX), u64::MAX);

        let event = TimedEvent {
            at: Duration::MAX,
            event: SyncEvent::Progress { percent: 0 },
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["at_ms"], u64::MAX);
    }
}
