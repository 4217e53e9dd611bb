//! Transduction of a document using every supported node kind.

use crate::common::{kitchensink, load_fixture};
use adf_babel::adf::MarkupNode;
use adf_babel::common::plain_text::extract_text;
use adf_babel::ir::nodes::{ListMarker, OutputBlock, Script};

#[test]
fn test_block_sequence() {
    let doc = kitchensink();
    let kinds: Vec<&str> = doc.blocks.iter().map(OutputBlock::kind).collect();
    assert_eq!(
        kinds,
        vec![
            "Heading",
            "Paragraph",
            "ListLine",
            "ListLine",
            "ListLine",
            "Table",
            "Panel",
            "CodeBlock",
            "Paragraph",
        ]
    );
}

#[test]
fn test_paragraph_runs_carry_styles() {
    let doc = kitchensink();
    let OutputBlock::Paragraph(paragraph) = &doc.blocks[1] else {
        panic!("expected a paragraph, got {:?}", doc.blocks[1]);
    };
    let texts: Vec<&str> = paragraph.runs.iter().map(|run| run.text.as_str()).collect();
    assert_eq!(texts, vec!["Hello ", "world", "\n", "H", "2", "O in ", "code"]);

    assert!(paragraph.runs[1].bold && paragraph.runs[1].italic);
    assert!(paragraph.runs[2].is_line_break());
    assert_eq!(paragraph.runs[4].script, Script::Sub);
    assert_eq!(paragraph.runs[5].color.as_deref(), Some("FF0000"));
    assert!(paragraph.runs[6].monospace);
}

#[test]
fn test_nested_list_lines() {
    let doc = kitchensink();
    let lines: Vec<(usize, ListMarker, String)> = doc
        .blocks
        .iter()
        .filter_map(|block| match block {
            OutputBlock::ListLine(line) => Some((line.level, line.marker, block.plain_text())),
            _ => None,
        })
        .collect();
    assert_eq!(
        lines,
        vec![
            (1, ListMarker::Bullet, "alpha".to_string()),
            (1, ListMarker::Bullet, "beta".to_string()),
            (2, ListMarker::Number(3), "gamma".to_string()),
        ]
    );
}

#[test]
fn test_containers() {
    let doc = kitchensink();
    let OutputBlock::Table(table) = &doc.blocks[5] else {
        panic!("expected a table");
    };
    assert_eq!(
        table.rows,
        vec![
            vec!["Host".to_string(), "State".to_string()],
            vec!["db-1".to_string()],
        ]
    );

    let OutputBlock::Panel(panel) = &doc.blocks[6] else {
        panic!("expected a panel");
    };
    assert_eq!(panel.panel_type.as_deref(), Some("warning"));
    assert_eq!(panel.blocks.len(), 1);
    assert_eq!(panel.blocks[0].plain_text(), "Back up first.");

    let OutputBlock::CodeBlock(code) = &doc.blocks[7] else {
        panic!("expected a code block");
    };
    assert_eq!(code.language.as_deref(), Some("sh"));
    assert_eq!(code.text, "systemctl restart cups");
}

#[test]
fn test_unknown_nodes_are_spliced() {
    let doc = kitchensink();
    assert_eq!(doc.blocks[8].plain_text(), "spliced");
}

#[test]
fn test_text_order_matches_extractor() {
    let root = MarkupNode::from_json_str(&load_fixture("kitchensink.adf.json")).unwrap();
    let extracted = extract_text(std::slice::from_ref(&root));
    let doc = kitchensink();

    // Every block's text appears in the extracted text, in block order.
    let mut rest = extracted.as_str();
    for block in &doc.blocks {
        for piece in block.plain_text().split('\n').filter(|p| !p.is_empty()) {
            let at = rest
                .find(piece)
                .unwrap_or_else(|| panic!("'{piece}' missing or out of order"));
            rest = &rest[at + piece.len()..];
        }
    }
}
