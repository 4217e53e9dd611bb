//! Core data structures for ADF markup trees.

/// One node of an ADF document tree.
///
/// Kinds the converter understands get their own variant; everything else is
/// kept as [`MarkupNode::Other`] so its children can still be traversed.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupNode {
    Text(Text),
    Paragraph(Vec<MarkupNode>),
    Heading(Heading),
    HardBreak,
    BulletList(Vec<MarkupNode>),
    OrderedList(OrderedList),
    ListItem(Vec<MarkupNode>),
    Table(Vec<MarkupNode>),
    TableRow(Vec<MarkupNode>),
    TableCell(TableCell),
    Panel(Panel),
    CodeBlock(CodeBlock),
    Other(Other),
}

/// A text leaf with its inline marks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Text {
    pub text: String,
    pub marks: Vec<Mark>,
}

/// A heading. The level is carried as found in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub level: usize,
    pub content: Vec<MarkupNode>,
}

/// A numbered list; `start` is the ordinal of the first item.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedList {
    pub start: u64,
    pub content: Vec<MarkupNode>,
}

/// A table cell (`tableCell` or `tableHeader`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableCell {
    pub header: bool,
    pub content: Vec<MarkupNode>,
}

/// A boxed, highlighted region.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Panel {
    pub panel_type: Option<String>,
    pub content: Vec<MarkupNode>,
}

/// A code block. Only its text children carry meaning.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CodeBlock {
    pub language: Option<String>,
    pub content: Vec<MarkupNode>,
}

/// Any node kind without dedicated handling (`doc`, `blockquote`, `expand`, ...).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Other {
    pub kind: String,
    pub content: Option<Vec<MarkupNode>>,
}

/// Inline style attached to a text leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Strike,
    Subscript,
    Superscript,
    /// Raw colour as found in the source; normalized when applied.
    TextColor(String),
    Monospace,
    /// Link target. Only the visible text survives conversion.
    Link(String),
}

impl MarkupNode {
    /// Build a plain text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        MarkupNode::Text(Text {
            text: text.into(),
            marks: Vec::new(),
        })
    }

    /// Build a text leaf with marks.
    pub fn styled(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        MarkupNode::Text(Text {
            text: text.into(),
            marks,
        })
    }

    /// Build a paragraph from its children.
    pub fn paragraph(content: Vec<MarkupNode>) -> Self {
        MarkupNode::Paragraph(content)
    }

    /// Build a list item from its children.
    pub fn list_item(content: Vec<MarkupNode>) -> Self {
        MarkupNode::ListItem(content)
    }

    /// Build a node of an unrecognized kind.
    pub fn other(kind: impl Into<String>, content: Option<Vec<MarkupNode>>) -> Self {
        MarkupNode::Other(Other {
            kind: kind.into(),
            content,
        })
    }

    /// The ADF type name of this node.
    pub fn kind(&self) -> &str {
        match self {
            MarkupNode::Text(_) => "text",
            MarkupNode::Paragraph(_) => "paragraph",
            MarkupNode::Heading(_) => "heading",
            MarkupNode::HardBreak => "hardBreak",
            MarkupNode::BulletList(_) => "bulletList",
            MarkupNode::OrderedList(_) => "orderedList",
            MarkupNode::ListItem(_) => "listItem",
            MarkupNode::Table(_) => "table",
            MarkupNode::TableRow(_) => "tableRow",
            MarkupNode::TableCell(cell) => {
                if cell.header {
                    "tableHeader"
                } else {
                    "tableCell"
                }
            }
            MarkupNode::Panel(_) => "panel",
            MarkupNode::CodeBlock(_) => "codeBlock",
            MarkupNode::Other(other) => &other.kind,
        }
    }

    /// Ordered children. Leaves and content-less nodes yield an empty slice.
    pub fn children(&self) -> &[MarkupNode] {
        match self {
            MarkupNode::Text(_) | MarkupNode::HardBreak => &[],
            MarkupNode::Paragraph(content)
            | MarkupNode::BulletList(content)
            | MarkupNode::ListItem(content)
            | MarkupNode::Table(content)
            | MarkupNode::TableRow(content) => content,
            MarkupNode::Heading(heading) => &heading.content,
            MarkupNode::OrderedList(list) => &list.content,
            MarkupNode::TableCell(cell) => &cell.content,
            MarkupNode::Panel(panel) => &panel.content,
            MarkupNode::CodeBlock(code) => &code.content,
            MarkupNode::Other(other) => other.content.as_deref().unwrap_or(&[]),
        }
    }

    /// True for `bulletList` and `orderedList`.
    pub fn is_list(&self) -> bool {
        matches!(self, MarkupNode::BulletList(_) | MarkupNode::OrderedList(_))
    }

    /// True when plain-text extraction ends this node with a line break.
    pub fn ends_line(&self) -> bool {
        match self {
            MarkupNode::Paragraph(_)
            | MarkupNode::Heading(_)
            | MarkupNode::ListItem(_)
            | MarkupNode::CodeBlock(_) => true,
            MarkupNode::Other(other) => other.kind == "blockquote",
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_without_content_has_no_children() {
        let node = MarkupNode::other("rule", None);
        assert!(node.children().is_empty());
        assert_eq!(node.kind(), "rule");
    }

    #[test]
    fn header_cells_report_their_kind() {
        let cell = MarkupNode::TableCell(TableCell {
            header: true,
            content: vec![],
        });
        assert_eq!(cell.kind(), "tableHeader");
    }

    #[test]
    fn blockquote_ends_a_line() {
        assert!(MarkupNode::other("blockquote", Some(vec![])).ends_line());
        assert!(!MarkupNode::other("expand", Some(vec![])).ends_line());
        assert!(!MarkupNode::text("x").ends_line());
    }
}
