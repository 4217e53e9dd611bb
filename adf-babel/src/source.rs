//! Issue export adapter.
//!
//! Reads a Jira-style issue export and turns it into a [`TicketReport`]:
//!
//! ```json
//! {
//!   "key": "OPS-42",
//!   "fields": {
//!     "summary": "...",
//!     "description": { "type": "doc", ... },
//!     "environment": "...",
//!     "project": { "name": "Acme" },
//!     "customfield_10059": { "type": "doc", ... },
//!     "comment": { "comments": [ ... ] }
//!   },
//!   "comments": [
//!     { "created": "2025-08-13T09:41:22.123+0200",
//!       "author": { "displayName": "Ops" },
//!       "body": { "type": "doc", ... } }
//!   ]
//! }
//! ```
//!
//! Comments may sit at the top level (as fetched from the comment endpoint)
//! or under `fields.comment.comments` (as embedded in the issue); both lists
//! are read, top level first.

use crate::report::{Body, Comment, ReportOptions, TicketReport};
use serde::Deserialize;
use serde_json::{Map, Value};
use time::macros::format_description;
use time::PrimitiveDateTime;

/// Raw issue export.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueExport {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(default)]
    pub comments: Vec<RawComment>,
}

/// Raw comment record. `created` and `author` are read leniently.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawComment {
    #[serde(default)]
    pub created: Value,
    #[serde(default)]
    pub author: Value,
    #[serde(default)]
    pub body: Value,
}

static NULL: Value = Value::Null;

#[derive(Debug, Default, Deserialize)]
struct EmbeddedComments {
    #[serde(default)]
    comments: Vec<RawComment>,
}

impl IssueExport {
    pub fn from_json_str(source: &str) -> Result<IssueExport, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Convert into a report, comments sorted oldest first.
    pub fn to_report(&self, options: &ReportOptions) -> TicketReport {
        let embedded = self
            .fields
            .get("comment")
            .cloned()
            .and_then(|value| serde_json::from_value::<EmbeddedComments>(value).ok())
            .unwrap_or_default();

        let mut comments: Vec<Comment> = self
            .comments
            .iter()
            .chain(embedded.comments.iter())
            .map(|raw| raw.to_comment(&options.unknown_author))
            .collect();
        sort_comments(&mut comments);

        TicketReport {
            key: self.key.clone(),
            client: self
                .field("project")
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string),
            summary: self.field("summary").as_str().map(str::to_string),
            references: Body::from_value(self.field(&options.references_field)),
            environment: Body::from_value(self.field(&options.environment_field)),
            description: Body::from_value(self.field("description")),
            comments,
        }
    }

    fn field(&self, name: &str) -> &Value {
        self.fields.get(name).unwrap_or(&NULL)
    }
}

impl RawComment {
    fn to_comment(&self, unknown_author: &str) -> Comment {
        let timestamp = self.created.as_str().and_then(parse_timestamp);
        if timestamp.is_none() {
            log::debug!("unparsable comment timestamp {}", self.created);
        }
        Comment {
            timestamp,
            author: self
                .author_name()
                .unwrap_or_else(|| unknown_author.to_string()),
            body: Body::from_value(&self.body),
        }
    }

    /// `author.displayName`, or a bare string author.
    fn author_name(&self) -> Option<String> {
        match &self.author {
            Value::String(name) => Some(name.clone()),
            Value::Object(author) => author
                .get("displayName")
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => None,
        }
    }
}

/// Parse the `YYYY-MM-DDTHH:MM:SS` prefix of a timestamp; fractional seconds
/// and offsets are ignored.
pub fn parse_timestamp(raw: &str) -> Option<PrimitiveDateTime> {
    let prefix = raw.get(..19)?;
    PrimitiveDateTime::parse(
        prefix,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    )
    .ok()
}

/// Stable sort, oldest first. Comments without a timestamp come first.
pub fn sort_comments(comments: &mut [Comment]) {
    comments.sort_by_key(|comment| comment.timestamp);
}

/// Parse an issue export and convert it into a report.
pub fn load_report(source: &str, options: &ReportOptions) -> Result<TicketReport, serde_json::Error> {
    Ok(IssueExport::from_json_str(source)?.to_report(options))
}
