//! Tree transducer: ADF markup trees → flat output block sequences.
//!
//! The transducer walks block-level nodes in document order and dispatches on
//! their kind. Inline content, lists and plain-text extraction are iterative
//! (see [`crate::common`]); only container nodes (panels, unknown wrappers,
//! stray list items and table parts) recurse natively, and that recursion is
//! bounded by [`TransduceOptions::max_depth`]. A subtree reached at the limit
//! is flattened into one plain paragraph.
//!
//! No input shape fails: unknown kinds are descended into when they carry
//! content and dropped when they don't.

use crate::adf::nodes::MarkupNode;
use crate::common::inline::{direct_text_runs, flatten_inlines};
use crate::common::lists::render_list_into;
use crate::common::marks::text_run;
use crate::common::plain_text::{code_text, extract_text};
use crate::common::tables::render_table;
use crate::ir::nodes::{self, Document, OutputBlock, PanelBlock, Paragraph};

/// Limits applied while transducing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransduceOptions {
    /// Container nesting at which subtrees are flattened to plain text.
    pub max_depth: usize,
    /// Highest list level emitted; deeper lines are clamped to it.
    pub max_list_level: usize,
}

impl Default for TransduceOptions {
    fn default() -> Self {
        TransduceOptions {
            max_depth: 32,
            max_list_level: 9,
        }
    }
}

impl TransduceOptions {
    /// Default depth limit, list levels left uncapped. Used by the
    /// standalone [`render_list`](crate::render_list) and
    /// [`render_panel`](crate::render_panel) entry points.
    pub fn without_list_cap() -> Self {
        TransduceOptions {
            max_list_level: usize::MAX,
            ..TransduceOptions::default()
        }
    }
}

/// Converts markup trees into output blocks under a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct Transducer {
    options: TransduceOptions,
}

impl Transducer {
    pub fn new(options: TransduceOptions) -> Self {
        Transducer { options }
    }

    pub fn options(&self) -> &TransduceOptions {
        &self.options
    }

    /// Transduce a node sequence. Lists found here are rendered at
    /// `current_list_level + 1`.
    pub fn transduce(&self, nodes: &[MarkupNode], current_list_level: usize) -> Vec<OutputBlock> {
        let mut out = Vec::new();
        self.walk(nodes, current_list_level, 0, &mut out);
        out
    }

    /// Transduce a whole document root (usually a `doc` node).
    pub fn transduce_document(&self, root: &MarkupNode) -> Document {
        Document {
            blocks: self.transduce(std::slice::from_ref(root), 0),
        }
    }

    fn walk(&self, nodes: &[MarkupNode], level: usize, depth: usize, out: &mut Vec<OutputBlock>) {
        for node in nodes {
            self.walk_node(node, level, depth, out);
        }
    }

    fn walk_node(&self, node: &MarkupNode, level: usize, depth: usize, out: &mut Vec<OutputBlock>) {
        match node {
            MarkupNode::Heading(heading) => out.push(OutputBlock::Heading(nodes::Heading {
                level: heading.level,
                runs: direct_text_runs(&heading.content),
            })),
            MarkupNode::Paragraph(content) => {
                out.push(OutputBlock::Paragraph(Paragraph::new(flatten_inlines(
                    content,
                ))))
            }
            MarkupNode::BulletList(_) | MarkupNode::OrderedList(_) => {
                render_list_into(self, node, level + 1, depth, out)
            }
            MarkupNode::Table(_) => out.push(OutputBlock::Table(render_table(node))),
            MarkupNode::Panel(_) => {
                if depth >= self.options.max_depth {
                    self.flatten_subtree(node, out);
                } else {
                    out.push(OutputBlock::Panel(self.panel_block(node, level, depth)));
                }
            }
            MarkupNode::CodeBlock(code) => {
                let text = code_text(code);
                if !text.trim().is_empty() {
                    out.push(OutputBlock::CodeBlock(nodes::CodeBlock {
                        language: code.language.clone(),
                        text,
                    }));
                }
            }
            MarkupNode::Text(text) => {
                if !text.text.is_empty() {
                    out.push(OutputBlock::Paragraph(Paragraph::new(vec![text_run(text)])));
                }
            }
            MarkupNode::HardBreak => out.push(OutputBlock::Paragraph(Paragraph::default())),
            MarkupNode::ListItem(_) | MarkupNode::TableRow(_) | MarkupNode::TableCell(_) => {
                self.descend(node, level, depth, out)
            }
            MarkupNode::Other(other) => match other.content {
                Some(_) => {
                    if other.kind != "doc" {
                        log::debug!("descending into unhandled node '{}'", other.kind);
                    }
                    self.descend(node, level, depth, out);
                }
                None => log::debug!("dropping content-less node '{}'", other.kind),
            },
        }
    }

    /// Panel block for `panel`, its children transduced one level deeper.
    pub(crate) fn panel_block(&self, panel: &MarkupNode, level: usize, depth: usize) -> PanelBlock {
        let panel_type = match panel {
            MarkupNode::Panel(panel) => panel.panel_type.clone(),
            _ => None,
        };
        let mut blocks = Vec::new();
        self.walk(panel.children(), level, depth + 1, &mut blocks);
        PanelBlock { panel_type, blocks }
    }

    /// Transduce a block child found inside a list item.
    pub(crate) fn walk_nested(
        &self,
        node: &MarkupNode,
        level: usize,
        depth: usize,
        out: &mut Vec<OutputBlock>,
    ) {
        if depth >= self.options.max_depth {
            self.flatten_subtree(node, out);
        } else {
            self.walk_node(node, level, depth + 1, out);
        }
    }

    fn descend(&self, node: &MarkupNode, level: usize, depth: usize, out: &mut Vec<OutputBlock>) {
        if depth >= self.options.max_depth {
            self.flatten_subtree(node, out);
        } else {
            self.walk(node.children(), level, depth + 1, out);
        }
    }

    fn flatten_subtree(&self, node: &MarkupNode, out: &mut Vec<OutputBlock>) {
        log::warn!(
            "nesting exceeds {} levels, flattening '{}' to plain text",
            self.options.max_depth,
            node.kind()
        );
        let text = extract_text(std::slice::from_ref(node));
        let text = text.trim_end_matches('\n');
        if !text.is_empty() {
            out.push(OutputBlock::Paragraph(Paragraph::plain(text)));
        }
    }
}

/// Transduce `nodes` with default options.
pub fn transduce(nodes: &[MarkupNode], current_list_level: usize) -> Vec<OutputBlock> {
    Transducer::default().transduce(nodes, current_list_level)
}
