use std::fmt;

use super::style;
use crate::presentation::view_models::{StatusLevel, SyncRunViewModel, ViewMode};
use medidata_engine::Hue;
use medidata_runtime::{NoticeLevel, SyncEvent, TimedEvent};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

fn notice_hue(level: NoticeLevel) -> Hue {
    match level {
        NoticeLevel::Info => Hue::Gray,
        NoticeLevel::Success => Hue::Green,
        NoticeLevel::Error => Hue::Red,
    }
}

fn describe_event(event: &SyncEvent) -> String {
    match event {
        SyncEvent::StateChanged { from, to } => format!("state {} -> {}", from, to),
        SyncEvent::Progress { percent } => format!("progress {}%", percent),
        SyncEvent::RecordAdded { record } => format!("record added: {}", record.exam_type),
        SyncEvent::Notice { notice } => format!("notice: {}", notice.title),
    }
}

fn write_event(f: &mut fmt::Formatter, timed: &TimedEvent) -> fmt::Result {
    writeln!(
        f,
        "  {} {}",
        style::dim(&format!("+{:>6}ms", timed.at.as_millis())),
        describe_event(&timed.event)
    )
}

pub struct SyncRunView<'a> {
    data: &'a SyncRunViewModel,
    mode: ViewMode,
}

impl<'a> SyncRunView<'a> {
    pub fn new(data: &'a SyncRunViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.state)
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{} {}% syncs={}/{} records={}",
            self.data.state,
            self.data.progress,
            self.data.syncs_completed,
            self.data.syncs_requested,
            self.data.records.len()
        )
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Connector: {}", self.data.connector)?;
        writeln!(
            f,
            "State:     {} (progress {}%)",
            style::bold(&self.data.state.to_string()),
            self.data.progress
        )?;
        if let Some(last_sync) = &self.data.last_sync {
            writeln!(f, "Last sync: {}", last_sync.format(TIMESTAMP_FORMAT))?;
        }
        if let Some(options) = &self.data.options {
            let dashboards = if options.create_dashboards {
                " + dashboards"
            } else {
                ""
            };
            let categories = if self.data.enabled_categories.is_empty() {
                "none".to_string()
            } else {
                self.data.enabled_categories.join(", ")
            };
            writeln!(f, "Syncing:   {}{}", categories, dashboards)?;
        }

        if !self.data.notices.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", style::bold("Notices"))?;
            for notice in &self.data.notices {
                let title = style::paint(&notice.title, notice_hue(notice.level));
                let icon = StatusLevel::from(notice.level).icon();
                writeln!(f, "  {} {}: {}", icon, title, notice.description)?;
            }
        }

        if !self.data.records.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", style::bold("Sync history"))?;
            for record in &self.data.records {
                let status = style::paint(&format!("{:<9}", record.status.as_str()), record.style.hue);
                write!(
                    f,
                    "  {:<18} {} {}",
                    record.exam_type,
                    status,
                    record.timestamp.format(TIMESTAMP_FORMAT)
                )?;
                if let Some(details) = &record.details {
                    write!(f, "  {}", style::dim(details))?;
                }
                writeln!(f)?;
            }
        }

        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_standard(f)?;
        writeln!(f)?;
        writeln!(
            f,
            "{} {}",
            style::bold("Timeline"),
            style::dim(&format!("({}ms virtual)", self.data.elapsed_ms))
        )?;
        for timed in &self.data.events {
            write_event(f, timed)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for SyncRunView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}
