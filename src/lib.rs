//! Bridge between Azure DevOps service hooks and Google Chat incoming webhooks.
//!
//! A `workitem.commented` event whose comment contains a known trigger (a
//! name tag or the effort review phrase) is turned into a Google Chat message
//! and posted to the space bound to that trigger's recipient.

pub mod ado;
pub mod chat;
pub mod config;
pub mod router;
pub mod routes;

use axum::{
    Router as AxumRouter,
    routing::{any, get},
};
use std::sync::Arc;

use crate::routes::{AppState, handle_ado_event, health_check};

/// Build the HTTP router
pub fn build_app(state: Arc<AppState>) -> AxumRouter {
    AxumRouter::new()
        // Method filtering happens in the handler so non-POST gets a JSON body
        .route("/ado/events", any(handle_ado_event))
        // Path used by the Netlify function this service replaces
        .route("/.netlify/functions/ado_webhook", any(handle_ado_event))
        .route("/health", get(health_check))
        .with_state(state)
}
