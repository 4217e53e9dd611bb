//! Plain-text rendering of output blocks
//!
//! Layout rules:
//!
//! - Level 0 and 1 headings are underlined with `=` and `-`; deeper headings
//!   are prefixed with `#` marks. Every heading but the first is preceded by a
//!   blank line.
//! - Paragraphs print their text; line-break runs start new lines.
//! - List lines are indented by `indent` once per level above 1, followed by
//!   the bullet glyph or `N.`. Continuation lines align with the text.
//! - Table rows are printed with their cells joined by ` | `.
//! - Panels are drawn with a left rule, their type on the first line.
//! - Code blocks are indented by four spaces.
//!
//! Styling is dropped.

use super::common::marker_label;
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::{runs_text, Document, OutputBlock};
use std::collections::HashMap;

/// Options for text rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOptions {
    /// Marker of bullet list lines
    pub bullet: String,
    /// Indentation added per list level
    pub indent: String,
}

impl Default for TextOptions {
    fn default() -> Self {
        TextOptions {
            bullet: "•".to_string(),
            indent: "  ".to_string(),
        }
    }
}

impl TextOptions {
    /// Apply `bullet` and `indent` serializer parameters.
    pub fn with_params(&self, params: &HashMap<String, String>) -> Result<Self, FormatError> {
        let mut options = self.clone();
        for (key, value) in params {
            match key.as_str() {
                "bullet" => options.bullet = value.clone(),
                "indent" => options.indent = value.clone(),
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'text' has no parameter '{other}'"
                    )))
                }
            }
        }
        Ok(options)
    }
}

/// Render a document as plain text.
pub fn serialize_to_text(doc: &Document, options: &TextOptions) -> String {
    let mut lines = Vec::new();
    render_blocks(&doc.blocks, options, &mut lines);
    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn render_blocks(blocks: &[OutputBlock], options: &TextOptions, lines: &mut Vec<String>) {
    for block in blocks {
        render_block(block, options, lines);
    }
}

fn render_block(block: &OutputBlock, options: &TextOptions, lines: &mut Vec<String>) {
    match block {
        OutputBlock::Heading(heading) => {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            let text = runs_text(&heading.runs);
            match heading.level {
                0 | 1 => {
                    let rule = if heading.level == 0 { "=" } else { "-" };
                    let width = text.chars().count();
                    lines.push(text);
                    lines.push(rule.repeat(width.max(1)));
                }
                level => lines.push(format!("{} {text}", "#".repeat(level.min(6)))),
            }
        }
        OutputBlock::Paragraph(paragraph) => {
            lines.extend(runs_text(&paragraph.runs).split('\n').map(str::to_string));
        }
        OutputBlock::ListLine(line) => {
            let indent = options.indent.repeat(line.level.saturating_sub(1));
            let marker = marker_label(line.marker, &options.bullet);
            let hanging = " ".repeat(marker.chars().count() + 1);
            let text = runs_text(&line.runs);
            for (i, part) in text.split('\n').enumerate() {
                if i == 0 {
                    lines.push(format!("{indent}{marker} {part}"));
                } else {
                    lines.push(format!("{indent}{hanging}{part}"));
                }
            }
        }
        OutputBlock::Table(table) => {
            for row in &table.rows {
                let cells: Vec<String> = row.iter().map(|cell| cell.replace('\n', " / ")).collect();
                lines.push(cells.join(" | "));
            }
        }
        OutputBlock::Panel(panel) => {
            let mut inner = Vec::new();
            render_blocks(&panel.blocks, options, &mut inner);
            if let Some(panel_type) = &panel.panel_type {
                lines.push(format!("┃ [{panel_type}]"));
            }
            lines.extend(inner.into_iter().map(|line| {
                if line.is_empty() {
                    "┃".to_string()
                } else {
                    format!("┃ {line}")
                }
            }));
        }
        OutputBlock::CodeBlock(code) => {
            lines.extend(code.text.split('\n').map(|line| format!("    {line}")));
        }
    }
}

/// Format implementation for plain text
#[derive(Debug, Clone, Default)]
pub struct TextFormat {
    options: TextOptions,
}

impl TextFormat {
    pub fn new(options: TextOptions) -> Self {
        Self { options }
    }
}

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain text with indented lists and boxed panels"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_to_text(doc, &self.options))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        Ok(serialize_to_text(doc, &self.options.with_params(options)?))
    }
}
