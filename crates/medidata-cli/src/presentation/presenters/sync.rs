use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, StatusBadge, SyncRecordViewModel, SyncRunViewModel,
};
use medidata_engine::taxonomy::status_descriptor;
use medidata_runtime::sync::saturating_millis;
use medidata_runtime::{Notice, SyncEvent, SyncSession, TimedEvent};

pub fn present_sync_run(
    session: &SyncSession,
    events: Vec<TimedEvent>,
    syncs_requested: u32,
    syncs_completed: u32,
    error: Option<String>,
) -> CommandResultViewModel<SyncRunViewModel> {
    let notices: Vec<Notice> = events
        .iter()
        .filter_map(|timed| match &timed.event {
            SyncEvent::Notice { notice } => Some(notice.clone()),
            _ => None,
        })
        .collect();

    let records: Vec<SyncRecordViewModel> = session
        .records()
        .iter()
        .map(|record| SyncRecordViewModel {
            exam_type: record.exam_type.clone(),
            status: record.status,
            timestamp: record.timestamp,
            details: record.details.clone(),
            style: status_descriptor(record.status),
        })
        .collect();

    let options = session.options().copied();
    let enabled_categories: Vec<String> = options
        .map(|options| {
            options
                .enabled_categories()
                .into_iter()
                .map(|category| category.as_str().to_string())
                .collect()
        })
        .unwrap_or_default();

    let content = SyncRunViewModel {
        connector: session.connector_name().to_string(),
        state: session.state(),
        progress: session.progress(),
        last_sync: session.last_sync(),
        elapsed_ms: saturating_millis(session.elapsed()),
        options,
        enabled_categories,
        syncs_requested,
        syncs_completed,
        error,
        notices,
        records,
        events,
    };

    let mut result = CommandResultViewModel::new(content);

    if let Some(error) = result.content.error.clone() {
        result = result
            .with_badge(StatusBadge::error(error))
            .with_suggestion(
                Guidance::new("Provide an integration token").with_command(cmd::SYNC_RUN),
            );
    } else if session.is_connected() {
        result = result
            .with_badge(StatusBadge::success(format!(
                "Connected, {}/{} sync(s) completed",
                syncs_completed, syncs_requested
            )))
            .with_suggestion(
                Guidance::new("Run more manual syncs")
                    .with_command(fmt::sync_run_with(syncs_requested + 1)),
            );
    } else {
        result = result
            .with_badge(StatusBadge::warning(format!("Session ended {}", session.state())))
            .with_suggestion(Guidance::new("Connect again").with_command(cmd::SYNC_RUN));
    }

    result
}
