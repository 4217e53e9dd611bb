//! End-to-end conversions through the format registry.

use crate::common::load_fixture;
use adf_babel::formats::detect_input_format;
use adf_babel::registry::FormatRegistry;
use insta::assert_snapshot;

#[test]
fn test_adf_to_text() {
    let registry = FormatRegistry::default();
    let doc = registry
        .parse(&load_fixture("kitchensink.adf.json"), "adf")
        .unwrap();
    let text = registry.serialize(&doc, "text").unwrap();

    assert_snapshot!(text, @r"
## Overview
Hello world
H2O in code
• alpha
• beta
  3. gamma
Host | State
db-1
┃ [warning]
┃ Back up first.
    systemctl restart cups
spliced
");
}

#[test]
fn test_adf_to_json() {
    let registry = FormatRegistry::default();
    let doc = registry
        .parse(&load_fixture("kitchensink.adf.json"), "adf")
        .unwrap();
    let json = registry.serialize(&doc, "json").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["blocks"][0]["kind"], "heading");
    assert_eq!(value["blocks"][0]["level"], 2);
    assert_eq!(value["blocks"][4]["kind"], "list_line");
    assert_eq!(value["blocks"][4]["marker"]["number"], 3);
    assert_eq!(value["blocks"][5]["rows"][1][0], "db-1");
}

#[test]
fn test_input_detection_on_fixtures() {
    assert_eq!(
        detect_input_format("OPS-42.json", &load_fixture("OPS-42.json")),
        "issue"
    );
    assert_eq!(
        detect_input_format("kitchensink.adf.json", &load_fixture("kitchensink.adf.json")),
        "adf"
    );
}

#[test]
fn test_output_detection() {
    let registry = FormatRegistry::default();
    assert_eq!(
        registry.detect_format_from_filename("report.html"),
        Some("html".to_string())
    );
    assert_eq!(
        registry.detect_format_from_filename("report.txt"),
        Some("text".to_string())
    );
}

#[test]
fn test_parse_errors_surface() {
    let registry = FormatRegistry::default();
    assert!(registry.parse("not json", "adf").is_err());
    assert!(registry.parse("{}", "nope").is_err());
}

#[test]
fn test_out_of_range_heading_level_to_text() {
    let registry = FormatRegistry::default();
    let source = r#"{"type":"doc","content":[
        {"type":"heading","attrs":{"level":18446744073709551615},
         "content":[{"type":"text","text":"Deep"}]}
    ]}"#;
    let doc = registry.parse(source, "adf").unwrap();
    let text = registry.serialize(&doc, "text").unwrap();
    assert_eq!(text, "###### Deep\n");
}
