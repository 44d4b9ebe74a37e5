use medidata_runtime::{WebhookDelivery, WebhookEndpoint};
use medidata_types::WebhookPayload;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct WebhookPayloadViewModel {
    pub endpoint: WebhookEndpoint,
    pub payload: WebhookPayload,
}

#[derive(Debug, Serialize)]
pub struct WebhookSendViewModel {
    #[serde(flatten)]
    pub delivery: WebhookDelivery,
}

impl CreateView for WebhookPayloadViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::webhook::WebhookPayloadView;
        Box::new(WebhookPayloadView::new(self, mode))
    }
}

impl CreateView for WebhookSendViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::webhook::WebhookSendView;
        Box::new(WebhookSendView::new(self, mode))
    }
}
