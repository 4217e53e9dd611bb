//! ADF document input
//!
//! Parses an Atlassian Document Format JSON document (`{"type": "doc",
//! "content": [...]}`) and transduces it into output blocks. Any JSON object
//! is accepted: unknown node kinds and marks degrade instead of failing.

use crate::adf::nodes::MarkupNode;
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;
use crate::transduce::{TransduceOptions, Transducer};
use serde_json::Value;

/// Parse `source` into a markup tree.
///
/// Fails on malformed JSON and on JSON that is not an object.
pub fn parse_markup(source: &str) -> Result<MarkupNode, FormatError> {
    let value: Value = serde_json::from_str(source)?;
    if !value.is_object() {
        return Err(FormatError::ParseError(
            "an ADF document must be a JSON object".to_string(),
        ));
    }
    Ok(MarkupNode::from_value(&value))
}

/// Format implementation for ADF input
#[derive(Debug, Clone, Default)]
pub struct AdfFormat {
    transducer: Transducer,
}

impl AdfFormat {
    pub fn new(options: TransduceOptions) -> Self {
        Self {
            transducer: Transducer::new(options),
        }
    }
}

impl Format for AdfFormat {
    fn name(&self) -> &str {
        "adf"
    }

    fn description(&self) -> &str {
        "Atlassian Document Format (JSON)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["adf"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        let root = parse_markup(source)?;
        Ok(self.transducer.transduce_document(&root))
    }
}
