use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use super::AdoEvent;

/// `[text](url)` in the markdown rendering of the event summary
static MARKDOWN_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]\((.*?)\)").expect("markdown link regex compiles"));

/// `<a href="url">` in the html rendering of the event summary
static HTML_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<a href="(.*?)">"#).expect("html link regex compiles"));

/// The fields of a `workitem.commented` event needed to build a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentedWorkItem {
    pub id: String,
    pub rev: String,
    pub work_item_type: String,
    pub title: String,
    pub commenter: String,
    pub project: String,
    pub comment: String,
    /// Link to the work item, `None` when nothing could be resolved
    pub link: Option<String>,
}

impl CommentedWorkItem {
    /// Read the work item out of an event.
    ///
    /// Returns `None` when the comment text (`System.History`) is missing or
    /// blank; without it there is nothing to match triggers against.
    pub fn from_event(event: &AdoEvent) -> Option<Self> {
        let resource = &event.resource;
        let fields = &resource["fields"];

        let comment = comment_text(resource)?;

        Some(Self {
            id: scalar(&resource["id"]).unwrap_or_else(|| "N/A".to_string()),
            rev: scalar(&resource["rev"]).unwrap_or_else(|| "N/A".to_string()),
            work_item_type: scalar(&fields["System.WorkItemType"])
                .unwrap_or_else(|| "Work Item".to_string()),
            title: scalar(&fields["System.Title"]).unwrap_or_else(|| "N/A".to_string()),
            commenter: commenter(&fields["System.ChangedBy"])
                .unwrap_or_else(|| "Unknown User".to_string()),
            project: project_name(event).unwrap_or_else(|| "Unknown Project".to_string()),
            comment,
            link: work_item_link(event),
        })
    }
}

/// The newest comment, taken from the work item's `System.History` field.
pub fn comment_text(resource: &Value) -> Option<String> {
    resource["fields"]["System.History"]
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Resolve a link to the work item. First match wins:
/// markdown summary, html summary, `_links.html.href`, `url`.
///
/// An empty link or the placeholder `#` counts as no link.
pub fn work_item_link(event: &AdoEvent) -> Option<String> {
    let message = &event.message;

    let from_markdown = message["markdown"]
        .as_str()
        .and_then(|md| MARKDOWN_LINK_RE.captures(md))
        .map(|caps| caps[1].to_string());

    let from_html = || {
        message["html"]
            .as_str()
            .and_then(|html| HTML_LINK_RE.captures(html))
            .map(|caps| caps[1].replace("&amp;", "&"))
    };

    let from_resource = || {
        non_empty_str(&event.resource["_links"]["html"]["href"])
            .filter(|l| is_link(l))
            .or_else(|| non_empty_str(&event.resource["url"]).filter(|l| is_link(l)))
    };

    from_markdown
        .filter(|l| is_link(l))
        .or_else(|| from_html().filter(|l| is_link(l)))
        .or_else(from_resource)
}

fn is_link(candidate: &str) -> bool {
    !candidate.is_empty() && candidate != "#"
}

/// Project name from the work item fields, else from the resource containers.
fn project_name(event: &AdoEvent) -> Option<String> {
    non_empty_str(&event.resource["fields"]["System.TeamProject"])
        .or_else(|| non_empty_str(&event.resource_containers["project"]["name"]))
}

/// `System.ChangedBy` is an identity object on newer payloads and a
/// `"Name <email>"` string on older ones.
fn commenter(value: &Value) -> Option<String> {
    match value {
        Value::Object(_) => non_empty_str(&value["displayName"]),
        Value::String(_) => non_empty_str(value),
        _ => None,
    }
}

/// Render a string or number field; ids and revisions come as either.
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn non_empty_str(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
