//! Treeviz formatter for output blocks
//!
//! Treeviz is a visual representation of a converted document, one node per
//! line, with the nesting drawn as a tree.
//!
//! So the format is :
//! <prefix><connector> <icon> <label> (truncated to 30 characters)
//!
//! Example:
//!
//! ⧉ Document (4 blocks)
//! ├─ § h1 Summary
//! ├─ ¶ Hello world
//! ├─ • L1 1. First item
//! └─ ▣ info (1 blocks)
//!   └─ ¶ Inside the panel
//!
//! Icons
//!     Document: ⧉
//!     Heading: §
//!     Paragraph: ¶
//!     ListLine: •
//!     Table: ▦, Row: ▤, Cell: ▢
//!     Panel: ▣
//!     CodeBlock: 𝒱
//!     Run: ◦
//!     Break: ↵
//!
//! The same drawing is used by [`markup_to_treeviz_str`] to show the input
//! markup tree, with ADF type names as labels.

use super::common::{bool_param, marker_label, run_styles};
use super::icons::get_icon;
use crate::adf::nodes::{Mark, MarkupNode};
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::{runs_text, Document, OutputBlock, Run};
use std::collections::HashMap;

const LABEL_WIDTH: usize = 30;

/// One drawn line and the lines nested under it.
struct Entry {
    icon: &'static str,
    label: String,
    children: Vec<Entry>,
}

impl Entry {
    fn leaf(icon: &'static str, label: impl Into<String>) -> Self {
        Entry {
            icon,
            label: label.into(),
            children: Vec::new(),
        }
    }
}

fn format_entry(entry: &Entry, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        entry.icon,
        truncate(&entry.label)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(&entry.children, &child_prefix, output);
}

fn format_children(children: &[Entry], prefix: &str, output: &mut String) {
    let child_count = children.len();
    for (i, child) in children.iter().enumerate() {
        format_entry(child, prefix, i == child_count - 1, output);
    }
}

fn truncate(label: &str) -> String {
    let flat = label.replace('\n', "↵");
    if flat.chars().count() > LABEL_WIDTH {
        let mut short: String = flat.chars().take(LABEL_WIDTH - 1).collect();
        short.push('…');
        short
    } else {
        flat
    }
}

fn run_entries(runs: &[Run]) -> Vec<Entry> {
    runs.iter()
        .map(|run| {
            if run.is_line_break() {
                return Entry::leaf(get_icon("Break"), "break");
            }
            let styles: Vec<String> = run_styles(run)
                .into_iter()
                .map(|(name, value)| {
                    if value == "true" {
                        name.to_string()
                    } else {
                        format!("{name}={value}")
                    }
                })
                .collect();
            let label = if styles.is_empty() {
                run.text.clone()
            } else {
                format!("[{}] {}", styles.join(","), run.text)
            };
            Entry::leaf(get_icon("Run"), label)
        })
        .collect()
}

fn block_entry(block: &OutputBlock, show_runs: bool) -> Entry {
    let icon = get_icon(block.kind());
    let runs = |runs: &[Run]| {
        if show_runs {
            run_entries(runs)
        } else {
            Vec::new()
        }
    };

    match block {
        OutputBlock::Heading(heading) => Entry {
            icon,
            label: format!("h{} {}", heading.level, runs_text(&heading.runs)),
            children: runs(&heading.runs),
        },
        OutputBlock::Paragraph(paragraph) => Entry {
            icon,
            label: runs_text(&paragraph.runs),
            children: runs(&paragraph.runs),
        },
        OutputBlock::ListLine(line) => Entry {
            icon,
            label: format!(
                "L{} {} {}",
                line.level,
                marker_label(line.marker, "-"),
                runs_text(&line.runs)
            ),
            children: runs(&line.runs),
        },
        OutputBlock::Table(table) => Entry {
            icon,
            label: format!("{} rows", table.rows.len()),
            children: table
                .rows
                .iter()
                .map(|row| Entry {
                    icon: get_icon("Row"),
                    label: format!("{} cells", row.len()),
                    children: row
                        .iter()
                        .map(|cell| Entry::leaf(get_icon("Cell"), cell.as_str()))
                        .collect(),
                })
                .collect(),
        },
        OutputBlock::Panel(panel) => Entry {
            icon,
            label: format!(
                "{} ({} blocks)",
                panel.panel_type.as_deref().unwrap_or("panel"),
                panel.blocks.len()
            ),
            children: panel
                .blocks
                .iter()
                .map(|block| block_entry(block, show_runs))
                .collect(),
        },
        OutputBlock::CodeBlock(code) => Entry::leaf(
            icon,
            format!(
                "{} {}",
                code.language.as_deref().unwrap_or("code"),
                code.text
            ),
        ),
    }
}

fn mark_name(mark: &Mark) -> String {
    match mark {
        Mark::Bold => "strong".to_string(),
        Mark::Italic => "em".to_string(),
        Mark::Underline => "underline".to_string(),
        Mark::Strike => "strike".to_string(),
        Mark::Subscript => "sub".to_string(),
        Mark::Superscript => "sup".to_string(),
        Mark::TextColor(color) => format!("color={color}"),
        Mark::Monospace => "code".to_string(),
        Mark::Link(href) => format!("link={href}"),
    }
}

fn markup_entry(node: &MarkupNode) -> Entry {
    let label = match node {
        MarkupNode::Text(text) if text.marks.is_empty() => text.text.clone(),
        MarkupNode::Text(text) => {
            let marks: Vec<String> = text.marks.iter().map(mark_name).collect();
            format!("[{}] {}", marks.join(","), text.text)
        }
        MarkupNode::Heading(heading) => format!("heading level={}", heading.level),
        MarkupNode::OrderedList(list) => format!("orderedList order={}", list.start),
        MarkupNode::Panel(panel) => match &panel.panel_type {
            Some(panel_type) => format!("panel {panel_type}"),
            None => "panel".to_string(),
        },
        MarkupNode::CodeBlock(code) => match &code.language {
            Some(language) => format!("codeBlock {language}"),
            None => "codeBlock".to_string(),
        },
        other => other.kind().to_string(),
    };
    Entry {
        icon: get_icon(node.kind()),
        label,
        children: node.children().iter().map(markup_entry).collect(),
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    to_treeviz_str_with_params(doc, &HashMap::new())
}

/// Convert a document to treeviz string with optional parameters
///
/// # Parameters
///
/// - `"runs"`: When set to `"true"`, every heading, paragraph and list line
///   lists its runs (with their styles) as children.
pub fn to_treeviz_str_with_params(doc: &Document, params: &HashMap<String, String>) -> String {
    let show_runs = bool_param(params, "runs");

    let icon = get_icon("Document");
    let mut output = format!("{} Document ({} blocks)\n", icon, doc.blocks.len());

    let entries: Vec<Entry> = doc
        .blocks
        .iter()
        .map(|block| block_entry(block, show_runs))
        .collect();
    format_children(&entries, "", &mut output);
    output
}

/// Draw an input markup tree.
pub fn markup_to_treeviz_str(root: &MarkupNode) -> String {
    let mut output = String::new();
    let entry = markup_entry(root);
    output.push_str(&format!("{} {}\n", entry.icon, truncate(&entry.label)));
    format_children(&entry.children, "", &mut output);
    output
}

/// Format implementation for treeviz format
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with_params(doc, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::nodes::{ListLine, ListMarker, PanelBlock, Paragraph, TableBlock};

    fn sample() -> Document {
        let mut bold = Run::plain("world");
        bold.bold = true;
        Document {
            blocks: vec![
                OutputBlock::Paragraph(Paragraph::new(vec![Run::plain("Hello "), bold])),
                OutputBlock::ListLine(ListLine {
                    level: 1,
                    marker: ListMarker::Number(1),
                    runs: vec![Run::plain("A")],
                }),
                OutputBlock::Panel(PanelBlock {
                    panel_type: Some("info".into()),
                    blocks: vec![OutputBlock::Table(TableBlock {
                        rows: vec![vec!["a".into(), "b".into()]],
                    })],
                }),
            ],
        }
    }

    #[test]
    fn draws_the_block_tree() {
        let output = to_treeviz_str(&sample());
        assert_eq!(
            output,
            "⧉ Document (3 blocks)\n\
             ├─ ¶ Hello world\n\
             ├─ • L1 1. A\n\
             └─ ▣ info (1 blocks)\n\
             \x20\x20└─ ▦ 1 rows\n\
             \x20\x20\x20\x20└─ ▤ 2 cells\n\
             \x20\x20\x20\x20\x20\x20├─ ▢ a\n\
             \x20\x20\x20\x20\x20\x20└─ ▢ b\n"
        );
    }

    #[test]
    fn runs_param_lists_styles() {
        let mut params = HashMap::new();
        params.insert("runs".to_string(), "true".to_string());
        let output = to_treeviz_str_with_params(&sample(), &params);
        assert!(output.contains("│ ├─ ◦ Hello \n"));
        assert!(output.contains("│ └─ ◦ [bold] world\n"));
    }

    #[test]
    fn long_labels_are_truncated() {
        let doc = Document {
            blocks: vec![OutputBlock::Paragraph(Paragraph::plain("x".repeat(50)))],
        };
        let output = to_treeviz_str(&doc);
        let line = output.lines().nth(1).unwrap();
        assert!(line.ends_with('…'));
        assert_eq!(line.chars().count(), "└─ ¶ ".chars().count() + LABEL_WIDTH);
    }

    #[test]
    fn draws_markup_trees() {
        let root = MarkupNode::other(
            "doc",
            Some(vec![MarkupNode::paragraph(vec![
                MarkupNode::text("plain"),
                MarkupNode::styled("loud", vec![Mark::Bold, Mark::TextColor("#f00".into())]),
            ])]),
        );
        assert_eq!(
            markup_to_treeviz_str(&root),
            "⧉ doc\n\
             └─ ¶ paragraph\n\
             \x20\x20├─ ◦ plain\n\
             \x20\x20└─ ◦ [strong,color=#f00] loud\n"
        );
    }
}
