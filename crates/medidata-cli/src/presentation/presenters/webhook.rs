use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, StatusBadge, WebhookPayloadViewModel, WebhookSendViewModel,
};
use medidata_runtime::{WebhookDelivery, WebhookEndpoint};
use medidata_types::WebhookPayload;

pub fn present_webhook_payload(
    endpoint: WebhookEndpoint,
) -> CommandResultViewModel<WebhookPayloadViewModel> {
    CommandResultViewModel::new(WebhookPayloadViewModel {
        endpoint,
        payload: WebhookPayload::template(),
    })
    .with_suggestion(
        Guidance::new("Preview a delivery without sending").with_command(cmd::WEBHOOK_DRY_RUN),
    )
}

pub fn present_webhook_send(
    delivery: WebhookDelivery,
    dry_run: bool,
) -> CommandResultViewModel<WebhookSendViewModel> {
    let url = delivery.endpoint.url.clone();
    let delivered = delivery.delivered;
    let result = CommandResultViewModel::new(WebhookSendViewModel { delivery });

    match (delivered, dry_run) {
        (true, true) => result
            .with_badge(StatusBadge::info(format!("Dry run, nothing sent to {}", url)))
            .with_suggestion(
                Guidance::new("Inspect the payload").with_command(cmd::WEBHOOK_PAYLOAD),
            ),
        (true, false) => result.with_badge(StatusBadge::success(format!("Sent to {}", url))),
        (false, _) => result
            .with_badge(StatusBadge::error(format!("Could not reach {}", url)))
            .with_suggestion(
                Guidance::new("Check the payload without a network call")
                    .with_command(cmd::WEBHOOK_DRY_RUN),
            ),
    }
}
