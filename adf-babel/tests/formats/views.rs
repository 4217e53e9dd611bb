//! Inspection views: tag and treeviz.

use crate::common::{kitchensink, load_fixture};
use adf_babel::adf::MarkupNode;
use adf_babel::formats::tag::serialize_document;
use adf_babel::formats::treeviz::{markup_to_treeviz_str, to_treeviz_str};

#[test]
fn test_treeviz_outline() {
    let tree = to_treeviz_str(&kitchensink());
    assert!(tree.starts_with("⧉ Document (9 blocks)\n"));
    assert!(tree.contains("├─ § h2 Overview\n"));
    assert!(tree.contains("├─ • L2 3. gamma\n"));
    assert!(tree.contains("├─ ▣ warning (1 blocks)\n"));
    assert!(tree.ends_with("└─ ¶ spliced\n"));
}

#[test]
fn test_markup_treeviz_shows_input_types() {
    let root = MarkupNode::from_json_str(&load_fixture("kitchensink.adf.json")).unwrap();
    let tree = markup_to_treeviz_str(&root);
    assert!(tree.contains("orderedList order=3"));
    assert!(tree.contains("[strong,em] world"));
    assert!(tree.contains("○ mediaGroup"));
}

#[test]
fn test_tag_dump() {
    let tags = serialize_document(&kitchensink());
    assert!(tags.starts_with("<document>\n"));
    assert!(tags.contains("marker=\"3.\""));
    assert!(tags.contains("gamma</list-line>"));
    assert!(tags.contains("<cell>db-1</cell>"));
    assert!(tags.ends_with("</document>"));
}
