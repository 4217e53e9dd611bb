//! JSON dump of output blocks
//!
//! Serializes the [`Document`] with `serde_json`. Blocks carry a `kind` tag
//! (`heading`, `paragraph`, `list_line`, `table`, `panel`, `code_block`).
//! Pretty-printed by default; pass `compact=true` for a single line.

use super::common::bool_param;
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;
use std::collections::HashMap;

/// Format implementation for the JSON block dump
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Output blocks as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if bool_param(options, "compact") {
            serde_json::to_string(doc).map_err(|e| FormatError::SerializationError(e.to_string()))
        } else {
            self.serialize(doc)
        }
    }
}
