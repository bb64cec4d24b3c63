use crate::ado::CommentedWorkItem;
use crate::chat::{Card, CardHeader, ChatMessage, Widget};

use super::Recipient;

/// Phrase that asks the effort reviewer to look at a work item
pub const EFFORT_REVIEW_PHRASE: &str = "Please review the total effort";

/// Google Chat user id of the effort reviewer, used for the @-mention
pub const EFFORT_REVIEWER_USER_ID: &str = "117432558693318220469";

const COMMENT_ICON_URL: &str = "https://img.icons8.com/color/48/000000/comments.png";

/// How a matched trigger renders its notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageFormat {
    /// Plain text that @-mentions the recipient's chat user
    Mention,
    /// Cards v2 summary of the comment
    Card,
}

/// One routing rule: if `needle` occurs in the comment, notify `recipient`.
#[derive(Debug, Clone)]
pub struct Trigger {
    pub needle: &'static str,
    pub recipient: Recipient,
    pub format: MessageFormat,
}

impl Trigger {
    pub const fn new(needle: &'static str, recipient: Recipient, format: MessageFormat) -> Self {
        Self {
            needle,
            recipient,
            format,
        }
    }

    /// Case-sensitive substring match against the comment text
    pub fn matches(&self, comment: &str) -> bool {
        comment.contains(self.needle)
    }

    pub fn build_message(&self, item: &CommentedWorkItem) -> ChatMessage {
        match self.format {
            MessageFormat::Mention => {
                mention_message(self.recipient.mention_user_id(), self.needle, item.link.as_deref())
            }
            MessageFormat::Card => comment_card(item),
        }
    }
}

/// The routing table, highest priority first.
///
/// The effort phrase outranks the name tags, so a comment that asks for an
/// effort review and also tags someone only goes to the effort reviewer.
pub fn default_triggers() -> Vec<Trigger> {
    vec![
        Trigger::new(EFFORT_REVIEW_PHRASE, Recipient::Effort, MessageFormat::Mention),
        Trigger::new("@Hans", Recipient::Hans, MessageFormat::Card),
        Trigger::new("@Alexis", Recipient::Alexis, MessageFormat::Card),
        Trigger::new("@Justin", Recipient::Justin, MessageFormat::Card),
    ]
}

/// `<users/ID> phrase: link`
pub fn mention_message(user_id: Option<&str>, phrase: &str, link: Option<&str>) -> ChatMessage {
    let mut text = String::new();
    if let Some(id) = user_id {
        text.push_str(&format!("<users/{id}> "));
    }
    text.push_str(phrase);
    if let Some(link) = link {
        text.push_str(&format!(": {link}"));
    }
    ChatMessage::text(text)
}

/// Card summarising a new comment on a work item.
pub fn comment_card(item: &CommentedWorkItem) -> ChatMessage {
    let mut widgets = vec![
        Widget::paragraph(format!("<b>Project:</b> {}", item.project)),
        Widget::paragraph(format!(
            "<b>Comment:</b><br>{}",
            item.comment.replace("\r\n", "<br>").replace('\n', "<br>")
        )),
    ];
    if let Some(link) = &item.link {
        widgets.push(Widget::link_button("View Work Item", link.as_str()));
    }

    ChatMessage::Card(Card {
        card_id: format!("comment-wi-{}-rev-{}", item.id, item.rev),
        header: CardHeader {
            title: format!("New Comment on {} #{}", item.work_item_type, item.id),
            subtitle: format!("{} | By: {}", item.title, item.commenter),
            image_url: COMMENT_ICON_URL.to_string(),
            image_type: "CIRCLE".to_string(),
        },
        widgets,
    })
}
