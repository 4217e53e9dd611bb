//! HTML export of converted fixtures.

use crate::common::{kitchensink, load_fixture};
use adf_babel::format::Format;
use adf_babel::formats::{HtmlFormat, HtmlOptions, IssueFormat};

fn to_html(options: HtmlOptions) -> String {
    HtmlFormat::new(options).serialize(&kitchensink()).unwrap()
}

#[test]
fn test_document_shell() {
    let html = to_html(HtmlOptions::default());
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<div class=\"adf-document\">"));
    assert!(html.contains(".adf-panel"));
}

#[test]
fn test_block_elements() {
    let html = to_html(HtmlOptions::default());
    assert!(html.contains("<h2>Overview</h2>"));
    assert!(html.contains("<em><strong>world</strong></em>"));
    assert!(html.contains("<sub>2</sub>"));
    assert!(html.contains("<span style=\"color: #FF0000\">O in </span>"));
    assert!(html.contains("<code>code</code>"));
    assert!(html.contains("<span class=\"adf-marker\">3.</span>gamma"));
    assert!(html.contains("<td>db-1</td>"));
    assert!(html.contains("adf-panel-warning"));
    assert!(html.contains("<code data-language=\"sh\">systemctl restart cups</code>"));
}

#[test]
fn test_custom_bullet_and_css() {
    let options = HtmlOptions {
        bullet: Some("-".to_string()),
        ..HtmlOptions::default()
    }
    .with_custom_css("body { color: #333; }".to_string());
    let html = to_html(options);
    assert!(html.contains("<span class=\"adf-marker\">-</span>alpha"));
    assert!(html.contains("body { color: #333; }"));
}

#[test]
fn test_report_title() {
    let doc = IssueFormat::default()
        .parse(&load_fixture("OPS-42.json"))
        .unwrap();
    let html = HtmlFormat::default().serialize(&doc).unwrap();
    assert!(html.contains("<title>Acme - OPS-42</title>"));
    assert!(html.contains("<h1 class=\"adf-title\">Acme - OPS-42</h1>"));
}
