//! XML-like block tag serialization
//!
//! Serializes output blocks directly to an XML-like format.
//!
//! ## Format
//!
//! - Block kind → tag name (kebab-case)
//! - Block fields (level, marker, panel type, language) → attributes
//! - Plain text → text content
//! - Nested blocks, table rows and cells → nested tags
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <heading level="1">Summary</heading>
//!   <paragraph>Hello world</paragraph>
//!   <list-line level="1" marker="1.">First</list-line>
//!   <panel type="info">
//!     <paragraph>Inside</paragraph>
//!   </panel>
//! </document>
//! ```
//!
//! With the `runs` parameter, runs are shown as `<run>` children carrying
//! their styles as attributes, and line breaks as `<break/>`.

use super::common::{bool_param, marker_label, run_styles};
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::{runs_text, Document, OutputBlock, Run};
use std::collections::HashMap;

/// Format a single block
fn format_block(block: &OutputBlock, indent_level: usize, show_runs: bool) -> String {
    let mut output = String::new();
    let indent = "  ".repeat(indent_level);
    let tag = to_tag_name(block.kind());

    let mut attrs: Vec<(&str, String)> = Vec::new();
    match block {
        OutputBlock::Heading(heading) => attrs.push(("level", heading.level.to_string())),
        OutputBlock::ListLine(line) => {
            attrs.push(("level", line.level.to_string()));
            attrs.push(("marker", marker_label(line.marker, "-")));
        }
        OutputBlock::Panel(panel) => {
            if let Some(panel_type) = &panel.panel_type {
                attrs.push(("type", panel_type.clone()));
            }
        }
        OutputBlock::CodeBlock(code) => {
            if let Some(language) = &code.language {
                attrs.push(("language", language.clone()));
            }
        }
        OutputBlock::Paragraph(_) | OutputBlock::Table(_) => {}
    }
    let open = format!("{indent}<{tag}{}>", format_attrs(&attrs));

    if let Some(runs) = block_runs(block) {
        if show_runs && !runs.is_empty() {
            output.push_str(&open);
            output.push('\n');
            for run in runs {
                output.push_str(&format_run(run, indent_level + 1));
            }
            output.push_str(&format!("{indent}</{tag}>\n"));
        } else {
            output.push_str(&format!("{open}{}</{tag}>\n", escape_xml(&runs_text(runs))));
        }
        return output;
    }

    match block {
        OutputBlock::CodeBlock(code) => {
            output.push_str(&format!("{open}{}</{tag}>\n", escape_xml(&code.text)));
        }
        OutputBlock::Table(table) => {
            output.push_str(&open);
            output.push('\n');
            for row in &table.rows {
                output.push_str(&format!("{indent}  <row>\n"));
                for cell in row {
                    output.push_str(&format!("{indent}    <cell>{}</cell>\n", escape_xml(cell)));
                }
                output.push_str(&format!("{indent}  </row>\n"));
            }
            output.push_str(&format!("{indent}</{tag}>\n"));
        }
        OutputBlock::Panel(panel) => {
            output.push_str(&open);
            output.push('\n');
            for child in &panel.blocks {
                output.push_str(&format_block(child, indent_level + 1, show_runs));
            }
            output.push_str(&format!("{indent}</{tag}>\n"));
        }
        OutputBlock::Heading(_) | OutputBlock::Paragraph(_) | OutputBlock::ListLine(_) => {}
    }

    output
}

fn block_runs(block: &OutputBlock) -> Option<&[Run]> {
    match block {
        OutputBlock::Heading(heading) => Some(heading.runs.as_slice()),
        OutputBlock::Paragraph(paragraph) => Some(paragraph.runs.as_slice()),
        OutputBlock::ListLine(line) => Some(line.runs.as_slice()),
        _ => None,
    }
}

fn format_run(run: &Run, indent_level: usize) -> String {
    let indent = "  ".repeat(indent_level);
    if run.is_line_break() {
        return format!("{indent}<break/>\n");
    }
    format!(
        "{indent}<run{}>{}</run>\n",
        format_attrs(&run_styles(run)),
        escape_xml(&run.text)
    )
}

fn format_attrs(attrs: &[(&str, String)]) -> String {
    attrs
        .iter()
        .map(|(name, value)| format!(" {name}=\"{}\"", escape_xml(value)))
        .collect()
}

/// Convert a block kind to a tag name (e.g., "ListLine" → "list-line")
fn to_tag_name(node_type: &str) -> String {
    let mut tag = String::new();
    for (i, c) in node_type.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            tag.push('-');
        }
        tag.extend(c.to_lowercase());
    }
    tag
}

/// Serialize a document to block tag format
pub fn serialize_document(doc: &Document) -> String {
    serialize_document_with_params(doc, &HashMap::new())
}

/// Serialize a document to block tag format with optional parameters
///
/// # Parameters
///
/// - `"runs"`: When set to `"true"`, text blocks list their runs as `<run>`
///   children instead of their plain text.
pub fn serialize_document_with_params(doc: &Document, params: &HashMap<String, String>) -> String {
    let show_runs = bool_param(params, "runs");

    let mut result = String::new();
    result.push_str("<document>\n");
    for block in &doc.blocks {
        result.push_str(&format_block(block, 1, show_runs));
    }
    result.push_str("</document>");
    result
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}

/// Format implementation for XML-like tag format
pub struct TagFormat;

impl Format for TagFormat {
    fn name(&self) -> &str {
        "tag"
    }

    fn description(&self) -> &str {
        "XML-like tag format with hierarchical structure"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tag", "xml"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_document(doc))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        Ok(serialize_document_with_params(doc, options))
    }
}
