use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use medidata_runtime::{
    Config, DryRunSink, HttpSink, SystemClock, WebhookEndpoint, WebhookSink, send_test_payload,
};

fn endpoint(config: &Config, url: Option<&str>) -> WebhookEndpoint {
    match url {
        Some(url) => WebhookEndpoint::new(url),
        None => WebhookEndpoint::from_settings(&config.webhook),
    }
}

pub fn handle_payload(config: &Config, ctx: &HandlerContext) -> Result<()> {
    ctx.render(presenters::present_webhook_payload(endpoint(config, None)))
}

pub fn handle_send(
    config: &Config,
    url: Option<&str>,
    dry_run: bool,
    ctx: &HandlerContext,
) -> Result<()> {
    let endpoint = endpoint(config, url);
    let sink: Box<dyn WebhookSink> = if dry_run {
        Box::new(DryRunSink)
    } else {
        Box::new(HttpSink::from_settings(&config.webhook)?)
    };

    let delivery = send_test_payload(sink.as_ref(), &endpoint, &SystemClock);
    ctx.render(presenters::present_webhook_send(delivery, dry_run))
}
