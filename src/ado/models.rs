use serde::Deserialize;

/// Event type of the only notification we act on.
pub const WORK_ITEM_COMMENTED: &str = "workitem.commented";

/// Minimal deserialization of an Azure DevOps service hook payload.
///
/// Only the event type is typed. `message`, `resource` and
/// `resourceContainers` differ per event type, so they stay as raw JSON and
/// are read with optional lookups; an unexpected shape then degrades to
/// defaults instead of failing the parse.
#[derive(Debug, Clone, Deserialize)]
pub struct AdoEvent {
    /// The event type (e.g. "workitem.commented", "git.pullrequest.created")
    #[serde(rename = "eventType", default)]
    pub event_type: Option<String>,

    /// Short summary of the event (`text`, `html`, `markdown` renderings)
    #[serde(default)]
    pub message: serde_json::Value,

    /// The object the event is about (work item, pull request, ...)
    #[serde(default)]
    pub resource: serde_json::Value,

    /// Containing collection/account/project
    #[serde(rename = "resourceContainers", default)]
    pub resource_containers: serde_json::Value,
}

impl AdoEvent {
    pub fn event_type(&self) -> &str {
        self.event_type.as_deref().unwrap_or("unknown")
    }
}
