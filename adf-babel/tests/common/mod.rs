//! Shared fixture loading for the integration tests.

use adf_babel::adf::MarkupNode;
use adf_babel::ir::nodes::Document;
use adf_babel::transduce::Transducer;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {name}: {e}"))
}

/// Parse and transduce an ADF fixture with default options.
pub fn kitchensink() -> Document {
    let root = MarkupNode::from_json_str(&load_fixture("kitchensink.adf.json"))
        .expect("kitchensink fixture is valid JSON");
    Transducer::default().transduce_document(&root)
}
