use super::HandlerContext;
use crate::args::SyncOptionArgs;
use crate::presentation::presenters;
use anyhow::Result;
use chrono::Utc;
use medidata_runtime::{Config, SyncError, SyncSession, SystemClock};
use medidata_types::{NotionOptions, SyncLog};

pub struct SyncRunRequest<'a> {
    pub token: &'a str,
    pub force_syncs: u32,
    pub realtime: bool,
    pub options: &'a SyncOptionArgs,
}

fn apply_skips(mut options: NotionOptions, skips: &SyncOptionArgs) -> NotionOptions {
    if skips.skip_metabolic {
        options.sync_metabolic = false;
    }
    if skips.skip_microbiota {
        options.sync_microbiota = false;
    }
    if skips.skip_genetic {
        options.sync_genetic = false;
    }
    if skips.skip_laboratory {
        options.sync_laboratory = false;
    }
    if skips.no_dashboards {
        options.create_dashboards = false;
    }
    options
}

/// Fire timers until the session goes quiet. `realtime` sleeps through each
/// gap; otherwise virtual time jumps straight to the next deadline.
fn drive(session: &mut SyncSession, realtime: bool) {
    while let Some(wait) = session.next_wait() {
        if realtime {
            std::thread::sleep(wait);
        }
        session.advance(wait);
    }
}

pub fn handle_run(
    config: &Config,
    request: SyncRunRequest<'_>,
    ctx: &HandlerContext,
) -> Result<()> {
    let options = apply_skips(config.notion, request.options);
    let mut session = SyncSession::new(config.sync.clone())
        .with_clock(SystemClock)
        .with_log(SyncLog::seeded(Utc::now()));

    let mut completed = 0;
    let error = match session.submit(request.token, options) {
        Err(err) => Some(err.to_string()),
        Ok(()) => {
            drive(&mut session, request.realtime);
            let mut failure: Option<SyncError> = None;
            for _ in 0..request.force_syncs {
                if let Err(err) = session.force_sync() {
                    failure = Some(err);
                    break;
                }
                drive(&mut session, request.realtime);
                completed += 1;
            }
            failure.map(|err| err.to_string())
        }
    };

    session.teardown();
    let events = session.drain_events();
    tracing::info!(
        state = %session.state(),
        completed,
        events = events.len(),
        "sync run finished"
    );

    ctx.render(presenters::present_sync_run(
        &session,
        events,
        request.force_syncs,
        completed,
        error,
    ))
}
