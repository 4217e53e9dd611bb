//! Inline flattening: paragraph content → styled runs.

use super::marks::text_run;
use crate::adf::nodes::MarkupNode;
use crate::ir::nodes::Run;

/// Flatten `nodes` into runs, depth-first.
///
/// Text leaves become styled runs and `hardBreak` becomes a line-break run.
/// Any other node contributes its descendants in order, so inline wrappers
/// (and block nodes wrongly nested inside a paragraph) never lose text.
/// Empty text leaves are skipped.
pub fn flatten_inlines(nodes: &[MarkupNode]) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut stack: Vec<&MarkupNode> = nodes.iter().rev().collect();

    while let Some(node) = stack.pop() {
        match node {
            MarkupNode::Text(text) => {
                if !text.text.is_empty() {
                    runs.push(text_run(text));
                }
            }
            MarkupNode::HardBreak => runs.push(Run::line_break()),
            _ => stack.extend(node.children().iter().rev()),
        }
    }

    runs
}

/// Runs of the direct text children only; everything else is ignored.
pub fn direct_text_runs(nodes: &[MarkupNode]) -> Vec<Run> {
    nodes
        .iter()
        .filter_map(|node| match node {
            MarkupNode::Text(text) if !text.text.is_empty() => Some(text_run(text)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adf::nodes::Mark;

    #[test]
    fn flattens_nested_inline_wrappers() {
        let nodes = vec![
            MarkupNode::text("a"),
            MarkupNode::other(
                "inlineWrapper",
                Some(vec![MarkupNode::styled("b", vec![Mark::Italic])]),
            ),
            MarkupNode::HardBreak,
            MarkupNode::text("c"),
        ];
        let runs = flatten_inlines(&nodes);
        assert_eq!(runs.len(), 4);
        assert_eq!(runs[0], Run::plain("a"));
        assert!(runs[1].italic);
        assert!(runs[2].is_line_break());
        assert_eq!(runs[3].text, "c");
    }

    #[test]
    fn direct_runs_ignore_nested_nodes() {
        let nodes = vec![
            MarkupNode::text("Title"),
            MarkupNode::paragraph(vec![MarkupNode::text("hidden")]),
            MarkupNode::HardBreak,
        ];
        assert_eq!(direct_text_runs(&nodes), vec![Run::plain("Title")]);
    }
}
