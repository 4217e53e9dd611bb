//! JSON → [`MarkupNode`] mapping.
//!
//! The mapping is total: every JSON value produces a node. Missing or
//! ill-typed fields fall back to empty values, unknown node kinds become
//! [`MarkupNode::Other`], and unknown marks are dropped.

use super::nodes::{CodeBlock, Heading, Mark, MarkupNode, OrderedList, Other, Panel, TableCell, Text};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

impl MarkupNode {
    /// Map a JSON value onto a markup node.
    pub fn from_value(value: &Value) -> MarkupNode {
        let Some(object) = value.as_object() else {
            return MarkupNode::other("", None);
        };
        let kind = object.get("type").and_then(Value::as_str).unwrap_or("");

        match kind {
            "text" => MarkupNode::Text(Text {
                text: str_field(value, "text").unwrap_or_default(),
                marks: parse_marks(value.get("marks")),
            }),
            "paragraph" => MarkupNode::Paragraph(parse_content(value)),
            "heading" => MarkupNode::Heading(Heading {
                level: attr(value, "level")
                    .and_then(Value::as_u64)
                    .map(|level| level as usize)
                    .unwrap_or(1),
                content: parse_content(value),
            }),
            "hardBreak" => MarkupNode::HardBreak,
            "bulletList" => MarkupNode::BulletList(parse_content(value)),
            "orderedList" => MarkupNode::OrderedList(OrderedList {
                start: attr(value, "order").and_then(Value::as_u64).unwrap_or(1),
                content: parse_content(value),
            }),
            "listItem" => MarkupNode::ListItem(parse_content(value)),
            "table" => MarkupNode::Table(parse_content(value)),
            "tableRow" => MarkupNode::TableRow(parse_content(value)),
            "tableCell" | "tableHeader" => MarkupNode::TableCell(TableCell {
                header: kind == "tableHeader",
                content: parse_content(value),
            }),
            "panel" => MarkupNode::Panel(Panel {
                panel_type: attr(value, "panelType")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                content: parse_content(value),
            }),
            "codeBlock" => MarkupNode::CodeBlock(CodeBlock {
                language: attr(value, "language")
                    .and_then(Value::as_str)
                    .filter(|lang| !lang.is_empty())
                    .map(str::to_string),
                content: parse_content(value),
            }),
            _ => {
                let content = value
                    .get("content")
                    .and_then(Value::as_array)
                    .map(|items| items.iter().map(MarkupNode::from_value).collect());
                MarkupNode::Other(Other {
                    kind: kind.to_string(),
                    content,
                })
            }
        }
    }

    /// Parse an ADF JSON document.
    pub fn from_json_str(source: &str) -> Result<MarkupNode, serde_json::Error> {
        let value: Value = serde_json::from_str(source)?;
        Ok(MarkupNode::from_value(&value))
    }
}

impl<'de> Deserialize<'de> for MarkupNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(MarkupNode::from_value(&value))
    }
}

impl Mark {
    /// Map one ADF mark object. Returns `None` for marks without a counterpart.
    pub fn from_value(value: &Value) -> Option<Mark> {
        let kind = value.get("type").and_then(Value::as_str).unwrap_or("");
        let mark = match kind {
            "strong" => Mark::Bold,
            "em" => Mark::Italic,
            "underline" => Mark::Underline,
            "strike" => Mark::Strike,
            "subsup" => {
                let flag = |name: &str| attr(value, name).and_then(Value::as_bool) == Some(true);
                let variant = attr(value, "type").and_then(Value::as_str);
                if flag("subscript") || variant == Some("sub") {
                    Mark::Subscript
                } else if flag("superscript") || variant == Some("sup") {
                    Mark::Superscript
                } else {
                    return None;
                }
            }
            "textColor" | "color" => Mark::TextColor(
                attr(value, "color")
                    .and_then(Value::as_str)
                    .unwrap_or("000000")
                    .to_string(),
            ),
            "code" => Mark::Monospace,
            "link" => Mark::Link(
                attr(value, "href")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            ),
            other => {
                log::debug!("dropping unsupported mark '{other}'");
                return None;
            }
        };
        Some(mark)
    }
}

fn parse_content(value: &Value) -> Vec<MarkupNode> {
    value
        .get("content")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(MarkupNode::from_value).collect())
        .unwrap_or_default()
}

fn parse_marks(marks: Option<&Value>) -> Vec<Mark> {
    marks
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Mark::from_value).collect())
        .unwrap_or_default()
}

fn attr<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    value.get("attrs").and_then(|attrs| attrs.get(name))
}

fn str_field(value: &Value, name: &str) -> Option<String> {
    value.get(name).and_then(Value::as_str).map(str::to_string)
}
