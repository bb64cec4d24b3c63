pub mod triggers;

pub use triggers::{MessageFormat, Trigger, default_triggers};

use crate::ado::{AdoEvent, CommentedWorkItem, WORK_ITEM_COMMENTED};
use crate::chat::ChatMessage;
use std::fmt;
use tracing::{debug, info};

/// A named notification target. Each one has its own Google Chat webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recipient {
    Hans,
    Alexis,
    Justin,
    Effort,
}

impl Recipient {
    /// Order in which destinations are tried for diagnostic messages
    pub const FALLBACK_ORDER: [Recipient; 4] = [
        Recipient::Hans,
        Recipient::Alexis,
        Recipient::Justin,
        Recipient::Effort,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Recipient::Hans => "hans",
            Recipient::Alexis => "alexis",
            Recipient::Justin => "justin",
            Recipient::Effort => "effort",
        }
    }

    /// Google Chat user id to @-mention, for recipients that have one
    pub fn mention_user_id(&self) -> Option<&'static str> {
        match self {
            Recipient::Effort => Some(triggers::EFFORT_REVIEWER_USER_ID),
            _ => None,
        }
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying an event that needs a notification
#[derive(Debug, Clone, PartialEq)]
pub struct Classified {
    pub recipient: Recipient,
    pub message: ChatMessage,
}

/// Decides which recipient (if any) an ADO event should notify and builds
/// the message for it.
pub struct EventRouter {
    triggers: Vec<Trigger>,
}

impl Default for EventRouter {
    fn default() -> Self {
        Self::new(default_triggers())
    }
}

impl EventRouter {
    pub fn new(triggers: Vec<Trigger>) -> Self {
        Self { triggers }
    }

    /// Classify an event. `None` means no notification is needed.
    pub fn classify(&self, event: &AdoEvent) -> Option<Classified> {
        let event_type = event.event_type();
        if event_type != WORK_ITEM_COMMENTED {
            info!(event_type = %event_type, "Event type not handled, skipping");
            return None;
        }

        let Some(item) = CommentedWorkItem::from_event(event) else {
            info!("No comment text found in System.History, skipping");
            return None;
        };

        let Some(trigger) = self.triggers.iter().find(|t| t.matches(&item.comment)) else {
            info!(
                work_item_id = %item.id,
                "No trigger found in comment, skipping notification"
            );
            return None;
        };

        info!(
            work_item_id = %item.id,
            trigger = %trigger.needle,
            recipient = %trigger.recipient,
            "Trigger found in comment"
        );
        debug!(link = ?item.link, "Resolved work item link");

        Some(Classified {
            recipient: trigger.recipient,
            message: trigger.build_message(&item),
        })
    }

    pub fn trigger_count(&self) -> usize {
        self.triggers.len()
    }
}
