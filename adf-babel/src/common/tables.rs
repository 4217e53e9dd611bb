//! Table and panel rendering.
//!
//! Tables keep their grid shape but lose inline styling: every cell becomes
//! the plain text of its content. Panels keep full fidelity, their children
//! are transduced like any other block sequence.

use super::plain_text::extract_text;
use crate::adf::nodes::MarkupNode;
use crate::ir::nodes::{PanelBlock, TableBlock};
use crate::transduce::{TransduceOptions, Transducer};

/// One row per child of `table`, one cell per child of each row.
///
/// Rows are not padded, so ragged tables stay ragged.
pub fn render_table(table: &MarkupNode) -> TableBlock {
    let rows = table
        .children()
        .iter()
        .map(|row| row.children().iter().map(cell_text).collect())
        .collect();
    TableBlock { rows }
}

/// Transduce the panel's children. Like [`render_list`](super::lists::render_list),
/// list levels are not capped.
pub fn render_panel(panel: &MarkupNode) -> PanelBlock {
    Transducer::new(TransduceOptions::without_list_cap()).panel_block(panel, 0, 0)
}

fn cell_text(cell: &MarkupNode) -> String {
    extract_text(cell.children())
        .trim_end_matches('\n')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adf::nodes::{Mark, Panel, TableCell};
    use crate::common::lists::render_list;
    use crate::ir::nodes::{OutputBlock, Paragraph, Run};

    fn cell(text: &str) -> MarkupNode {
        MarkupNode::TableCell(TableCell {
            header: false,
            content: vec![MarkupNode::paragraph(vec![MarkupNode::text(text)])],
        })
    }

    #[test]
    fn ragged_rows_are_kept() {
        let table = MarkupNode::Table(vec![
            MarkupNode::TableRow(vec![cell("a"), cell("b"), cell("c")]),
            MarkupNode::TableRow(vec![cell("d")]),
        ]);
        let block = render_table(&table);
        assert_eq!(block.rows.len(), 2);
        assert_eq!(block.rows[0], vec!["a", "b", "c"]);
        assert_eq!(block.rows[1], vec!["d"]);
    }

    #[test]
    fn cells_hold_plain_text() {
        let rich = MarkupNode::TableCell(TableCell {
            header: true,
            content: vec![
                MarkupNode::paragraph(vec![MarkupNode::styled("bold", vec![Mark::Bold])]),
                MarkupNode::paragraph(vec![MarkupNode::text("second")]),
            ],
        });
        let table = MarkupNode::Table(vec![MarkupNode::TableRow(vec![rich])]);
        assert_eq!(render_table(&table).rows, vec![vec!["bold\nsecond"]]);
    }

    #[test]
    fn empty_cells_are_empty_strings() {
        let table = MarkupNode::Table(vec![MarkupNode::TableRow(vec![MarkupNode::TableCell(
            TableCell::default(),
        )])]);
        assert_eq!(render_table(&table).rows, vec![vec![String::new()]]);
    }

    #[test]
    fn panel_keeps_type_and_styled_content() {
        let panel = MarkupNode::Panel(Panel {
            panel_type: Some("warning".into()),
            content: vec![MarkupNode::paragraph(vec![MarkupNode::styled(
                "careful",
                vec![Mark::Italic],
            )])],
        });
        let block = render_panel(&panel);
        assert_eq!(block.panel_type.as_deref(), Some("warning"));
        let mut expected = Run::plain("careful");
        expected.italic = true;
        assert_eq!(
            block.blocks,
            vec![OutputBlock::Paragraph(Paragraph::new(vec![expected]))]
        );
    }

    #[test]
    fn panel_and_list_agree_on_deep_levels() {
        let mut list = MarkupNode::BulletList(vec![MarkupNode::list_item(vec![
            MarkupNode::paragraph(vec![MarkupNode::text("deepest")]),
        ])]);
        for _ in 0..11 {
            list = MarkupNode::BulletList(vec![MarkupNode::list_item(vec![
                MarkupNode::paragraph(vec![MarkupNode::text("item")]),
                list,
            ])]);
        }
        let panel = MarkupNode::Panel(Panel {
            panel_type: None,
            content: vec![list.clone()],
        });

        let direct = render_list(&list, 1);
        let in_panel = render_panel(&panel).blocks;
        assert_eq!(in_panel, direct);
        assert!(matches!(direct.last(), Some(OutputBlock::ListLine(line)) if line.level == 12));
    }
}
