//! Report assembly from an issue export fixture.

use crate::common::load_fixture;
use adf_babel::format::Format;
use adf_babel::formats::{IssueFormat, TextFormat};
use adf_babel::ir::nodes::OutputBlock;
use adf_babel::report::ReportOptions;
use adf_babel::source::load_report;
use insta::assert_snapshot;

#[test]
fn test_report_as_text() {
    let doc = IssueFormat::default()
        .parse(&load_fixture("OPS-42.json"))
        .unwrap();
    let text = TextFormat::default().serialize(&doc).unwrap();

    assert_snapshot!(text, @r"
Acme - OPS-42
=============

Summary
-------
Printer on fire

Customer references
-------------------
Jane Doe

Environment
-----------
-

Detailed description
--------------------
Steps:
1. Load paper
2. Print
  • smoke

Comments
--------
[01-03-2024 17:40] Alice
Confirmed

[02-03-2024 09:15] Bob
Replaced fuser.
");
}

#[test]
fn test_comments_are_sorted_oldest_first() {
    let report = load_report(&load_fixture("OPS-42.json"), &ReportOptions::default()).unwrap();
    let authors: Vec<&str> = report
        .comments
        .iter()
        .map(|comment| comment.author.as_str())
        .collect();
    assert_eq!(authors, vec!["Alice", "Bob"]);
}

#[test]
fn test_comment_headers_are_bold() {
    let doc = IssueFormat::default()
        .parse(&load_fixture("OPS-42.json"))
        .unwrap();
    let header = doc
        .blocks
        .iter()
        .find(|block| block.plain_text().starts_with("[01-03-2024"))
        .expect("comment header present");
    let OutputBlock::Paragraph(paragraph) = header else {
        panic!("header should be a paragraph");
    };
    assert!(paragraph.runs.iter().all(|run| run.bold));
}

#[test]
fn test_custom_labels() {
    let options = ReportOptions {
        summary_label: "Résumé".to_string(),
        timestamp_format: "[year]/[month]/[day]".to_string(),
        ..ReportOptions::default()
    };
    let format = IssueFormat::new(options, Default::default());
    let doc = format.parse(&load_fixture("OPS-42.json")).unwrap();
    let texts: Vec<String> = doc.blocks.iter().map(OutputBlock::plain_text).collect();
    assert!(texts.contains(&"Résumé".to_string()));
    assert!(texts.contains(&"[2024/03/01] Alice".to_string()));
}

#[test]
fn test_malformed_export() {
    assert!(IssueFormat::default().parse("{\"key\": ").is_err());
}
