//! CLI-specific inspection transforms
//!
//! Each transform is a stage + format combination (e.g., "markup-treeviz",
//! "blocks-json").
//!
//! ## Stages
//!
//! 1. **Markup** - JSON → ADF markup tree, as the editor stored it
//!    - `markup-treeviz`: Tree visualization with Unicode icons
//!    - `plain-text`: Text content with structure dropped
//!
//! 2. **Blocks** - Markup → output blocks, as every writer receives them
//!    - `blocks-json`: JSON dump
//!    - `blocks-tag`: XML-like tag format
//!    - `blocks-treeviz`: Tree visualization
//!
//! For issue exports the markup stage shows the description field and the
//! blocks stage shows the whole report.
//!
//! ## Extra Parameters
//!
//! - `runs`: When set to "true", `blocks-tag` and `blocks-treeviz` list the
//!   styled runs of every text block.
//! - `compact`: When set to "true", `blocks-json` prints a single line.
//!
//! Example: `adf inspect body.adf.json blocks-treeviz --extra-runs`

use adf_babel::adf::MarkupNode;
use adf_babel::common::plain_text::extract_text;
use adf_babel::formats::adf::parse_markup;
use adf_babel::formats::tag::serialize_document_with_params;
use adf_babel::formats::treeviz::{markup_to_treeviz_str, to_treeviz_str_with_params};
use adf_babel::source::IssueExport;
use adf_babel::FormatRegistry;
use std::collections::HashMap;

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] = &[
    "markup-treeviz",
    "plain-text",
    "blocks-json",
    "blocks-tag",
    "blocks-treeviz",
];

/// Execute a named transform on a source file with optional extra parameters
///
/// `input_format` is the registry name of the source format (`adf` or
/// `issue`); the registry supplies the configured parsers.
pub fn execute_transform(
    source: &str,
    input_format: &str,
    transform_name: &str,
    registry: &FormatRegistry,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    match transform_name {
        "markup-treeviz" => {
            let root = load_markup(source, input_format)?;
            Ok(markup_to_treeviz_str(&root))
        }
        "plain-text" => {
            let root = load_markup(source, input_format)?;
            Ok(extract_text(std::slice::from_ref(&root)))
        }
        "blocks-json" => {
            let doc = registry
                .parse(source, input_format)
                .map_err(|e| format!("Transform failed: {e}"))?;
            let mut output = registry
                .serialize_with_options(&doc, "json", extra_params)
                .map_err(|e| format!("JSON serialization failed: {e}"))?;
            output.push('\n');
            Ok(output)
        }
        "blocks-tag" => {
            let doc = registry
                .parse(source, input_format)
                .map_err(|e| format!("Transform failed: {e}"))?;
            let mut output = serialize_document_with_params(&doc, extra_params);
            output.push('\n');
            Ok(output)
        }
        "blocks-treeviz" => {
            let doc = registry
                .parse(source, input_format)
                .map_err(|e| format!("Transform failed: {e}"))?;
            Ok(to_treeviz_str_with_params(&doc, extra_params))
        }
        _ => Err(format!("Unknown transform: {transform_name}")),
    }
}

/// Markup tree of an ADF document, or the description of an issue export.
fn load_markup(source: &str, input_format: &str) -> Result<MarkupNode, String> {
    match input_format {
        "issue" => {
            let export = IssueExport::from_json_str(source)
                .map_err(|e| format!("Transform failed: {e}"))?;
            match export.fields.get("description") {
                Some(value) if value.is_object() => Ok(MarkupNode::from_value(value)),
                _ => Err(format!("Issue {} has no ADF description", export.key)),
            }
        }
        _ => parse_markup(source).map_err(|e| format!("Transform failed: {e}")),
    }
}
