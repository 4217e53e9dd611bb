//! List flattening: nested bullet/numbered lists → indentation-levelled lines.
//!
//! # The Algorithm
//!
//! Lists are walked with an explicit stack of frames instead of native
//! recursion, so the nesting level is a plain counter carried by each frame:
//!
//! 1. **List frame:** iterate the list's children.
//!    - A `listItem` emits exactly one [`ListLine`] at the frame's level: the
//!      runs of its direct paragraphs (and direct inline children), joined by
//!      a line-break run. Its remaining children are then scheduled as an
//!      item-body frame.
//!    - A list placed directly inside a list opens a new list frame one level
//!      deeper.
//!    - Anything else is treated as a one-paragraph item.
//!
//! 2. **Item-body frame:** iterate the item's children again, in order.
//!    - Nested lists open a list frame at `level + 1`.
//!    - Block children (code blocks, panels, tables, ...) are handed back to
//!      the transducer and appended where they appear.
//!    - Paragraphs and inline children were already consumed by the line.
//!
//! Pushing a frame suspends its parent, which resumes once the child frame
//! is exhausted. This yields a depth-first flattening where every parent
//! line precedes its children and sibling order is preserved.

use super::inline::flatten_inlines;
use crate::adf::nodes::MarkupNode;
use crate::ir::nodes::{ListLine, ListMarker, OutputBlock, Run};
use crate::transduce::{TransduceOptions, Transducer};
use std::slice::Iter;

/// Flatten a `bulletList`/`orderedList` node into list lines starting at
/// `level`. No level cap is applied.
pub fn render_list(list: &MarkupNode, level: usize) -> Vec<OutputBlock> {
    let transducer = Transducer::new(TransduceOptions::without_list_cap());
    let mut out = Vec::new();
    render_list_into(&transducer, list, level, 0, &mut out);
    out
}

enum Frame<'a> {
    List {
        items: Iter<'a, MarkupNode>,
        start: Option<u64>,
        index: u64,
        level: usize,
    },
    ItemBody {
        children: Iter<'a, MarkupNode>,
        level: usize,
    },
}

impl<'a> Frame<'a> {
    fn list(node: &'a MarkupNode, level: usize) -> Self {
        let start = match node {
            MarkupNode::OrderedList(list) => Some(list.start),
            _ => None,
        };
        Frame::List {
            items: node.children().iter(),
            start,
            index: 0,
            level,
        }
    }
}

/// Walk one list node, appending lines (and block children) to `out`.
///
/// Levels above the transducer's `max_list_level` are clamped to it.
pub(crate) fn render_list_into(
    transducer: &Transducer,
    list: &MarkupNode,
    level: usize,
    depth: usize,
    out: &mut Vec<OutputBlock>,
) {
    let max_level = transducer.options().max_list_level.max(1);
    let mut stack = vec![Frame::list(list, level)];

    while let Some(frame) = stack.last_mut() {
        match frame {
            Frame::List {
                items,
                start,
                index,
                level,
            } => {
                let Some(child) = items.next() else {
                    stack.pop();
                    continue;
                };
                let level = *level;

                if child.is_list() {
                    stack.push(Frame::list(child, level + 1));
                    continue;
                }

                let marker = match start {
                    Some(start) => ListMarker::Number(start.saturating_add(*index)),
                    None => ListMarker::Bullet,
                };
                *index += 1;

                match child {
                    MarkupNode::ListItem(children) => {
                        out.push(list_line(level.min(max_level), marker, item_runs(children)));
                        stack.push(Frame::ItemBody {
                            children: children.iter(),
                            level,
                        });
                    }
                    other => {
                        let runs = flatten_inlines(std::slice::from_ref(other));
                        out.push(list_line(level.min(max_level), marker, runs));
                    }
                }
            }
            Frame::ItemBody { children, level } => {
                let Some(child) = children.next() else {
                    stack.pop();
                    continue;
                };
                let level = *level;

                if child.is_list() {
                    stack.push(Frame::list(child, level + 1));
                } else if !is_line_content(child) {
                    transducer.walk_nested(child, level, depth, out);
                }
            }
        }
    }
}

fn list_line(level: usize, marker: ListMarker, runs: Vec<Run>) -> OutputBlock {
    OutputBlock::ListLine(ListLine {
        level,
        marker,
        runs,
    })
}

/// Children that make up the item's own line.
fn is_line_content(node: &MarkupNode) -> bool {
    matches!(
        node,
        MarkupNode::Paragraph(_) | MarkupNode::Text(_) | MarkupNode::HardBreak
    )
}

/// Runs of an item's own line: one segment per paragraph (consecutive inline
/// children form one segment), segments joined by line breaks. Empty
/// segments are dropped.
fn item_runs(children: &[MarkupNode]) -> Vec<Run> {
    let mut segments: Vec<Vec<Run>> = Vec::new();
    let mut inline: Vec<Run> = Vec::new();

    for child in children {
        match child {
            MarkupNode::Paragraph(content) => {
                if !inline.is_empty() {
                    segments.push(std::mem::take(&mut inline));
                }
                segments.push(flatten_inlines(content));
            }
            MarkupNode::Text(_) | MarkupNode::HardBreak => {
                inline.extend(flatten_inlines(std::slice::from_ref(child)))
            }
            _ => {}
        }
    }
    if !inline.is_empty() {
        segments.push(inline);
    }

    let mut runs = Vec::new();
    for segment in segments.into_iter().filter(|segment| !segment.is_empty()) {
        if !runs.is_empty() {
            runs.push(Run::line_break());
        }
        runs.extend(segment);
    }
    runs
}
