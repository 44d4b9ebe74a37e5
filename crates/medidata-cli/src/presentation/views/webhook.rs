use std::fmt;

use super::style;
use crate::presentation::view_models::{ViewMode, WebhookPayloadViewModel, WebhookSendViewModel};
use medidata_runtime::{NoticeLevel, WebhookEndpoint};

fn write_endpoint(f: &mut fmt::Formatter, endpoint: &WebhookEndpoint) -> fmt::Result {
    writeln!(f, "{} {}", style::bold(endpoint.method), endpoint.url)?;
    writeln!(f, "Content-Type: {}", endpoint.content_type)
}

// --------------------------------------------------------
// Webhook Payload View
// --------------------------------------------------------

pub struct WebhookPayloadView<'a> {
    data: &'a WebhookPayloadViewModel,
    mode: ViewMode,
}

impl<'a> WebhookPayloadView<'a> {
    pub fn new(data: &'a WebhookPayloadViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for WebhookPayloadView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let body = serde_json::to_string_pretty(&self.data.payload).map_err(|_| fmt::Error)?;
        match self.mode {
            ViewMode::Minimal | ViewMode::Compact => writeln!(f, "{}", body),
            ViewMode::Standard | ViewMode::Verbose => {
                write_endpoint(f, &self.data.endpoint)?;
                writeln!(f)?;
                writeln!(f, "{}", body)
            }
        }
    }
}

// --------------------------------------------------------
// Webhook Send View
// --------------------------------------------------------

pub struct WebhookSendView<'a> {
    data: &'a WebhookSendViewModel,
    mode: ViewMode,
}

impl<'a> WebhookSendView<'a> {
    pub fn new(data: &'a WebhookSendViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for WebhookSendView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let delivery = &self.data.delivery;
        let outcome = if delivery.delivered { "delivered" } else { "failed" };

        match self.mode {
            ViewMode::Minimal => writeln!(f, "{}", outcome),
            ViewMode::Compact => writeln!(
                f,
                "{} {} via {}",
                outcome, delivery.endpoint.url, delivery.sink
            ),
            ViewMode::Standard | ViewMode::Verbose => {
                write_endpoint(f, &delivery.endpoint)?;
                writeln!(f, "Sink: {}", delivery.sink)?;
                writeln!(f)?;
                for notice in &delivery.notices {
                    let marker = match notice.level {
                        NoticeLevel::Info => "·",
                        NoticeLevel::Success => "✓",
                        NoticeLevel::Error => "✗",
                    };
                    writeln!(f, "{} {}", marker, notice.description)?;
                }
                if let Some(error) = &delivery.error {
                    writeln!(f, "  {}", style::dim(error))?;
                }
                if self.mode == ViewMode::Verbose {
                    let body =
                        serde_json::to_string_pretty(&delivery.payload).map_err(|_| fmt::Error)?;
                    writeln!(f)?;
                    writeln!(f, "{}", body)?;
                }
                Ok(())
            }
        }
    }
}
