pub mod ado;
pub mod auth;

pub use ado::handle_ado_event;

use crate::chat::ChatClient;
use crate::config::Config;
use crate::router::EventRouter;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Serialize;
use std::sync::Arc;

/// Application state shared across handlers
pub struct AppState {
    pub config: Arc<Config>,
    pub router: EventRouter,
    pub chat: ChatClient,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            router: EventRouter::default(),
            chat: ChatClient::new(),
        }
    }
}

/// JSON body of every webhook response
#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub status: &'static str,
    pub message: &'static str,
}

pub(crate) fn success(message: &'static str) -> (StatusCode, Json<WebhookResponse>) {
    (
        StatusCode::OK,
        Json(WebhookResponse {
            status: "success",
            message,
        }),
    )
}

pub(crate) fn failure(
    status: StatusCode,
    message: &'static str,
) -> (StatusCode, Json<WebhookResponse>) {
    (
        status,
        Json(WebhookResponse {
            status: "error",
            message,
        }),
    )
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "destinations_configured": state.config.destination_count(),
        "triggers_loaded": state.router.trigger_count()
    }))
}
