use axum::{
    body::{Bytes, to_bytes},
    extract::{Request, State},
    http::{Method, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::ado::AdoEvent;
use crate::chat::ChatMessage;

use super::{AppState, auth, failure, success};

/// Largest event body we buffer. ADO payloads are a few kilobytes.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Handle incoming Azure DevOps service hook events
///
/// This endpoint:
/// 1. Rejects anything but POST and requests failing Basic auth
/// 2. Classifies the event against the trigger table
/// 3. Delivers at most one notification to the matching Google Chat space
///
/// The body is only read once method and credentials have been accepted.
/// Delivery is awaited so the response status reflects whether the
/// notification went out.
pub async fn handle_ado_event(State(state): State<Arc<AppState>>, request: Request) -> Response {
    let (parts, body) = request.into_parts();

    if parts.method != Method::POST {
        warn!(method = %parts.method, "Received non-POST request");
        return failure(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response();
    }

    let authorization = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if let Err(e) = auth::verify_basic_auth(authorization, state.config.credentials()) {
        match e {
            auth::AuthError::NotConfigured => error!(reason = %e, "Webhook authentication failed"),
            _ => warn!(reason = %e, "Webhook authentication failed"),
        }
        return failure(StatusCode::UNAUTHORIZED, "Authentication Required").into_response();
    }
    debug!("Basic authentication successful");

    if !state.config.has_any_destination() {
        error!("No Google Chat webhook URL is configured, cannot send notifications");
        return failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Webhook processor configuration error",
        )
        .into_response();
    }

    let body: Bytes = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(body) => body,
        Err(e) => {
            // Past the size limit, or the client went away mid-body
            warn!(error = %e, limit = MAX_BODY_BYTES, "Failed to read ADO webhook body");
            return failure(StatusCode::PAYLOAD_TOO_LARGE, "Payload Too Large").into_response();
        }
    };

    let event: AdoEvent = match serde_json::from_slice(&body) {
        Ok(event) => event,
        Err(e) => {
            error!(error = %e, "Failed to decode ADO webhook payload");
            debug!(body = %String::from_utf8_lossy(&body), "Raw payload that failed to parse");
            send_diagnostic(&state, &format!("Failed to decode JSON payload: {e}")).await;
            return failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error processing webhook",
            )
            .into_response();
        }
    };

    info!(event_type = %event.event_type(), "Received ADO event");

    let Some(classified) = state.router.classify(&event) else {
        return success("Webhook received, no notification required").into_response();
    };

    let recipient = classified.recipient;
    let Some(webhook_url) = state.config.destination(recipient) else {
        warn!(
            recipient = %recipient,
            "No Google Chat webhook URL configured for recipient, skipping notification"
        );
        return success("Webhook received, no notification required").into_response();
    };

    info!(recipient = %recipient, "Sending notification to Google Chat");
    match state.chat.send(Some(webhook_url), &classified.message).await {
        Ok(()) => success("Webhook received and notification sent").into_response(),
        Err(e) => {
            error!(recipient = %recipient, error = %e, "Failed to deliver notification");
            send_diagnostic(
                &state,
                &format!("Failed to deliver notification to {recipient}: {e}"),
            )
            .await;
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Webhook received but failed to send notification",
            )
            .into_response()
        }
    }
}

/// Best-effort "DEBUG ERROR" message to the first configured destination.
/// Failures are logged and otherwise ignored.
async fn send_diagnostic(state: &AppState, detail: &str) {
    let Some((recipient, webhook_url)) = state.config.fallback_destination() else {
        warn!("No destination available for diagnostic message");
        return;
    };

    let message = ChatMessage::text(format!("DEBUG ERROR: {detail}"));
    if let Err(e) = state.chat.send(Some(webhook_url), &message).await {
        warn!(
            recipient = %recipient,
            error = %e,
            "Failed to send diagnostic message (ignored)"
        );
    }
}
