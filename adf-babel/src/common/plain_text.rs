//! Plain-text extraction from markup subtrees.
//!
//! Used wherever the target cannot hold styled runs: table cells, short
//! reference fields, and subtrees flattened by the depth limit. The walk uses
//! an explicit stack, so arbitrarily deep input cannot exhaust the call stack.
//!
//! Traversal order and child dispatch match the transducer: depth-first,
//! left to right, descending into every node that has content.

use crate::adf::nodes::{CodeBlock, MarkupNode};

enum Step<'a> {
    Node(&'a MarkupNode),
    Newline,
}

/// Concatenate the text of `nodes` in document order.
///
/// `hardBreak` becomes `\n`; paragraphs, headings, list items, code blocks
/// and blockquotes are each followed by one `\n`.
pub fn extract_text(nodes: &[MarkupNode]) -> String {
    let mut out = String::new();
    let mut stack: Vec<Step> = nodes.iter().rev().map(Step::Node).collect();

    while let Some(step) = stack.pop() {
        let node = match step {
            Step::Newline => {
                out.push('\n');
                continue;
            }
            Step::Node(node) => node,
        };

        match node {
            MarkupNode::Text(text) => out.push_str(&text.text),
            MarkupNode::HardBreak => out.push('\n'),
            MarkupNode::CodeBlock(code) => {
                out.push_str(&code_text(code));
                out.push('\n');
            }
            _ => {
                if node.ends_line() {
                    stack.push(Step::Newline);
                }
                stack.extend(node.children().iter().rev().map(Step::Node));
            }
        }
    }

    out
}

/// Text of a code block: text children joined by `\n`, trailing newlines
/// removed. Marks and non-text children are ignored.
pub fn code_text(code: &CodeBlock) -> String {
    let lines: Vec<&str> = code
        .content
        .iter()
        .filter_map(|child| match child {
            MarkupNode::Text(text) => Some(text.text.as_str()),
            _ => None,
        })
        .collect();
    lines.join("\n").trim_end_matches('\n').to_string()
}
