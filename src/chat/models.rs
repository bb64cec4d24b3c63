use serde::{Serialize, Serializer};

/// A message posted to a Google Chat incoming webhook.
///
/// Serializes to either `{"text": ...}` or the Cards v2 envelope
/// `{"cardsV2": [{"cardId": ..., "card": {"header": ..., "sections": [...]}}]}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatMessage {
    Text { text: String },
    Card(Card),
}

impl ChatMessage {
    pub fn text(text: impl Into<String>) -> Self {
        ChatMessage::Text { text: text.into() }
    }
}

/// A single-section card.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Stable id, lets Google Chat spot redelivered events
    pub card_id: String,
    pub header: CardHeader,
    pub widgets: Vec<Widget>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardHeader {
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
    /// "CIRCLE" or "SQUARE"
    pub image_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Widget {
    TextParagraph { text: String },
    ButtonList { buttons: Vec<Button> },
}

impl Widget {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Widget::TextParagraph { text: text.into() }
    }

    /// A button list holding one button that opens `url`.
    pub fn link_button(text: impl Into<String>, url: impl Into<String>) -> Self {
        Widget::ButtonList {
            buttons: vec![Button {
                text: text.into(),
                on_click: OnClick {
                    open_link: OpenLink { url: url.into() },
                },
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub text: String,
    pub on_click: OnClick,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnClick {
    pub open_link: OpenLink,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenLink {
    pub url: String,
}

// ── Wire envelopes ──────────────────────────────────────────────────────

#[derive(Serialize)]
struct TextPayload<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct CardsPayload<'a> {
    #[serde(rename = "cardsV2")]
    cards_v2: [CardEnvelope<'a>; 1],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CardEnvelope<'a> {
    card_id: &'a str,
    card: CardBody<'a>,
}

#[derive(Serialize)]
struct CardBody<'a> {
    header: &'a CardHeader,
    sections: [Section<'a>; 1],
}

#[derive(Serialize)]
struct Section<'a> {
    widgets: &'a [Widget],
}

impl Serialize for ChatMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ChatMessage::Text { text } => TextPayload { text }.serialize(serializer),
            ChatMessage::Card(card) => CardsPayload {
                cards_v2: [CardEnvelope {
                    card_id: &card.card_id,
                    card: CardBody {
                        header: &card.header,
                        sections: [Section {
                            widgets: &card.widgets,
                        }],
                    },
                }],
            }
            .serialize(serializer),
        }
    }
}
