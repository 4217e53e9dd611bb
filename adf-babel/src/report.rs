//! Ticket report assembly.
//!
//! A report is a fixed sequence of sections (title, summary, customer
//! references, environment, description, comments) built from a
//! [`TicketReport`]. Rich-text fields go through the transducer; short
//! reference fields are reduced to plain text lines.

use crate::adf::nodes::MarkupNode;
use crate::common::plain_text::extract_text;
use crate::ir::nodes::{Document, Heading, OutputBlock, Paragraph, Run};
use crate::transduce::{TransduceOptions, Transducer};
use serde_json::Value;
use time::format_description::{self, OwnedFormatItem};
use time::PrimitiveDateTime;

/// A rich-text field as found in the source record.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Body {
    /// An ADF document.
    Markup(MarkupNode),
    /// A legacy plain-text value.
    Plain(String),
    /// Null, missing or of an unusable type.
    #[default]
    Absent,
}

impl Body {
    /// Objects with a `content` key are markup, strings are plain text,
    /// anything else is absent.
    pub fn from_value(value: &Value) -> Body {
        match value {
            Value::Object(fields) if fields.contains_key("content") => {
                Body::Markup(MarkupNode::from_value(value))
            }
            Value::String(text) => Body::Plain(text.clone()),
            _ => Body::Absent,
        }
    }

    /// Plain text of the field, line breaks preserved.
    pub fn plain_text(&self) -> String {
        match self {
            Body::Markup(node) => extract_text(std::slice::from_ref(node)),
            Body::Plain(text) => text.clone(),
            Body::Absent => String::new(),
        }
    }
}

/// One comment, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    /// `None` when the source timestamp could not be parsed.
    pub timestamp: Option<PrimitiveDateTime>,
    pub author: String,
    pub body: Body,
}

/// Everything a report shows about one ticket.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TicketReport {
    pub key: String,
    pub client: Option<String>,
    pub summary: Option<String>,
    pub references: Body,
    pub environment: Body,
    pub description: Body,
    /// Sorted by timestamp, oldest first.
    pub comments: Vec<Comment>,
}

/// Labels, placeholders and source field names used by reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub summary_label: String,
    pub references_label: String,
    pub environment_label: String,
    pub description_label: String,
    pub comments_label: String,
    /// Shown for empty short fields.
    pub missing: String,
    pub no_description: String,
    pub no_comments: String,
    /// Shown in place of a comment without a body.
    pub empty_comment: String,
    pub unknown_author: String,
    /// Issue field holding customer references.
    pub references_field: String,
    /// Issue field holding environment notes.
    pub environment_field: String,
    /// `time` format description for comment headers.
    pub timestamp_format: String,
}

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "[day]-[month]-[year] [hour]:[minute]";

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            summary_label: "Summary".to_string(),
            references_label: "Customer references".to_string(),
            environment_label: "Environment".to_string(),
            description_label: "Detailed description".to_string(),
            comments_label: "Comments".to_string(),
            missing: "-".to_string(),
            no_description: "(no description provided)".to_string(),
            no_comments: "(no comments)".to_string(),
            empty_comment: "—".to_string(),
            unknown_author: "Unknown".to_string(),
            references_field: "customfield_10059".to_string(),
            environment_field: "environment".to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// Assemble the report document for `report`.
pub fn build_report(
    report: &TicketReport,
    options: &ReportOptions,
    transduce: &TransduceOptions,
) -> Document {
    let transducer = Transducer::new(transduce.clone());
    let mut blocks = Vec::new();

    let client = report.client.as_deref().unwrap_or(&options.missing);
    blocks.push(heading(0, format!("{client} - {}", report.key)));

    blocks.push(heading(1, &options.summary_label));
    let summary = report
        .summary
        .as_deref()
        .map(str::trim)
        .filter(|summary| !summary.is_empty())
        .unwrap_or(&options.missing);
    blocks.push(OutputBlock::Paragraph(Paragraph::plain(summary)));

    blocks.push(heading(1, &options.references_label));
    blocks.extend(text_lines(&report.references, &options.missing));

    blocks.push(heading(1, &options.environment_label));
    blocks.extend(text_lines(&report.environment, &options.missing));

    blocks.push(heading(1, &options.description_label));
    blocks.extend(body_blocks(
        &report.description,
        &transducer,
        &options.no_description,
    ));

    blocks.push(heading(1, &options.comments_label));
    if report.comments.is_empty() {
        blocks.push(OutputBlock::Paragraph(Paragraph::plain(&options.no_comments)));
    }
    let timestamp_format = timestamp_format(&options.timestamp_format);
    for comment in &report.comments {
        let stamp = comment
            .timestamp
            .and_then(|ts| ts.format(&timestamp_format).ok())
            .unwrap_or_else(|| options.missing.clone());
        let mut header = Run::plain(format!("[{stamp}] {}", comment.author));
        header.bold = true;
        blocks.push(OutputBlock::Paragraph(Paragraph::new(vec![header])));
        blocks.extend(body_blocks(&comment.body, &transducer, &options.empty_comment));
        blocks.push(OutputBlock::Paragraph(Paragraph::default()));
    }

    Document { blocks }
}

fn heading(level: usize, text: impl Into<String>) -> OutputBlock {
    OutputBlock::Heading(Heading {
        level,
        runs: vec![Run::plain(text)],
    })
}

/// One plain paragraph per non-blank line, or the placeholder.
fn text_lines(body: &Body, missing: &str) -> Vec<OutputBlock> {
    let text = body.plain_text();
    let lines: Vec<OutputBlock> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| OutputBlock::Paragraph(Paragraph::plain(line)))
        .collect();
    if lines.is_empty() {
        vec![OutputBlock::Paragraph(Paragraph::plain(missing))]
    } else {
        lines
    }
}

fn body_blocks(body: &Body, transducer: &Transducer, absent: &str) -> Vec<OutputBlock> {
    match body {
        Body::Markup(node) => transducer.transduce(node.children(), 0),
        Body::Plain(text) => vec![OutputBlock::Paragraph(Paragraph::plain(text.trim()))],
        Body::Absent => vec![OutputBlock::Paragraph(Paragraph::plain(absent))],
    }
}

fn timestamp_format(description: &str) -> OwnedFormatItem {
    match format_description::parse_owned::<2>(description) {
        Ok(format) => format,
        Err(err) => {
            log::warn!("invalid timestamp format '{description}' ({err}), using the default");
            time::macros::format_description!("[day]-[month]-[year] [hour]:[minute]").into()
        }
    }
}
