//! Test delivery of a lab-exam payload to an external endpoint.
//!
//! Delivery is fire-and-forget: the endpoint's response status and body are
//! never inspected, and only a failure to send the request counts as an error.

use crate::clock::Clock;
use crate::config::WebhookSettings;
use crate::notice::Notice;
use crate::{Error, Result};
use medidata_types::WebhookPayload;
use serde::Serialize;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookEndpoint {
    pub url: String,
    pub method: &'static str,
    pub content_type: &'static str,
}

impl WebhookEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: "POST",
            content_type: "application/json",
        }
    }

    pub fn from_settings(settings: &WebhookSettings) -> Self {
        Self::new(settings.url.clone())
    }
}

pub trait WebhookSink {
    fn name(&self) -> &str;

    /// Send `payload`. Errors only when the request could not be sent.
    fn fire(&self, endpoint: &WebhookEndpoint, payload: &WebhookPayload) -> Result<()>;
}

/// Posts over HTTP(S) with a bounded timeout.
pub struct HttpSink {
    client: reqwest::blocking::Client,
}

impl HttpSink {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("medidata/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    pub fn from_settings(settings: &WebhookSettings) -> Result<Self> {
        Self::new(settings.timeout())
    }
}

impl WebhookSink for HttpSink {
    fn name(&self) -> &str {
        "http"
    }

    fn fire(&self, endpoint: &WebhookEndpoint, payload: &WebhookPayload) -> Result<()> {
        let response = self
            .client
            .post(&endpoint.url)
            .header(reqwest::header::CONTENT_TYPE, endpoint.content_type)
            .json(payload)
            .send()?;
        tracing::debug!(url = %endpoint.url, status = %response.status(), "webhook request sent");
        Ok(())
    }
}

/// Logs the request and sends nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunSink;

impl WebhookSink for DryRunSink {
    fn name(&self) -> &str {
        "dry-run"
    }

    fn fire(&self, endpoint: &WebhookEndpoint, payload: &WebhookPayload) -> Result<()> {
        tracing::info!(
            url = %endpoint.url,
            method = endpoint.method,
            patient_id = %payload.patient_id,
            "dry run: webhook not sent"
        );
        Ok(())
    }
}

/// Keeps every delivered payload in memory. Can be told to refuse deliveries.
#[derive(Debug, Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<(String, WebhookPayload)>>,
    refuse: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refusing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            refuse: true,
        }
    }

    /// Delivered `(url, payload)` pairs, oldest first.
    pub fn sent(&self) -> Vec<(String, WebhookPayload)> {
        match self.sent.lock() {
            Ok(sent) => sent.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl WebhookSink for RecordingSink {
    fn name(&self) -> &str {
        "recording"
    }

    fn fire(&self, endpoint: &WebhookEndpoint, payload: &WebhookPayload) -> Result<()> {
        if self.refuse {
            return Err(Error::Transport(format!("connection refused: {}", endpoint.url)));
        }
        let mut sent = match self.sent.lock() {
            Ok(sent) => sent,
            Err(poisoned) => poisoned.into_inner(),
        };
        sent.push((endpoint.url.clone(), payload.clone()));
        Ok(())
    }
}

/// Result of one test delivery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookDelivery {
    pub endpoint: WebhookEndpoint,
    pub sink: String,
    pub payload: WebhookPayload,
    pub delivered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub notices: Vec<Notice>,
}

/// Stamp the template payload with the current time and fire it once.
pub fn send_test_payload(
    sink: &dyn WebhookSink,
    endpoint: &WebhookEndpoint,
    clock: &dyn Clock,
) -> WebhookDelivery {
    let payload = WebhookPayload::template().with_timestamp(clock.now());
    let mut notices = vec![Notice::info(
        "Sending test payload",
        "Sending test payload to webhook endpoint",
    )];

    tracing::info!(url = %endpoint.url, sink = sink.name(), "sending test webhook");
    let error = match sink.fire(endpoint, &payload) {
        Ok(()) => {
            notices.push(Notice::success(
                "Webhook sent",
                "Test webhook sent successfully",
            ));
            None
        }
        Err(err) => {
            tracing::warn!(url = %endpoint.url, error = %err, "test webhook failed");
            notices.push(Notice::error("Webhook failed", "Failed to send test webhook"));
            Some(err.to_string())
        }
    };

    WebhookDelivery {
        endpoint: endpoint.clone(),
        sink: sink.name().to_string(),
        payload,
        delivered: error.is_none(),
        error,
        notices,
    }
}
