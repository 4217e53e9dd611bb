//! HTML format implementation
//!
//! This module implements export of converted documents to HTML5.
//!
//! # Library Choice
//!
//! We use the `html5ever` + `markup5ever_rcdom` ecosystem for serialization:
//! - `html5ever`: Browser-grade HTML5 serializer from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM tree implementation
//!
//! Building a DOM and serializing it gives us correct escaping of text and
//! attributes for free.
//!
//! # Element Mapping Table
//!
//! | Block        | HTML Equivalent                                              |
//! |--------------|--------------------------------------------------------------|
//! | Heading(0)   | `<h1 class="adf-title">`                                     |
//! | Heading(n)   | `<hN>` (capped at h6)                                        |
//! | Paragraph    | `<p class="adf-paragraph">`                                  |
//! | ListLine     | `<p class="adf-list-line adf-list-level-N">` + marker span   |
//! | Table        | `<table class="adf-table">` with `<tr>`/`<td>`               |
//! | Panel        | `<div class="adf-panel adf-panel-TYPE">` with inline fill    |
//! | CodeBlock    | `<pre class="adf-code"><code data-language="...">`          |
//! | Run styles   | `strong`, `em`, `u`, `s`, `sub`, `sup`, `code`, colour span  |
//! | Line break   | `<br>`                                                       |
//!
//! Lists stay flat: each list line is its own paragraph indented by level,
//! which keeps the output faithful to the block model.
//!
//! # CSS
//!
//! `css/baseline.css` is always embedded. Custom CSS (`css` parameter, or a
//! file through `css-path`) is appended after it.
//!
//! # Parameters
//!
//! `css`, `css-path`, `bullet`, `panel-background`, `panel-border-color`,
//! `panel-border-width`.

mod serializer;

pub use serializer::{get_default_css, serialize_to_html, HtmlOptions, PanelStyle};

use crate::common::color::normalize_color;
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;
use std::collections::HashMap;

/// Format implementation for HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// Layer serializer parameters over the configured options.
    fn options_with_params(
        &self,
        params: &HashMap<String, String>,
    ) -> Result<HtmlOptions, FormatError> {
        let mut options = self.options.clone();
        for (key, value) in params {
            match key.as_str() {
                "css" => options.custom_css = Some(value.clone()),
                "css-path" => {
                    let css = std::fs::read_to_string(value).map_err(|e| {
                        FormatError::SerializationError(format!(
                            "Cannot read CSS file '{value}': {e}"
                        ))
                    })?;
                    options.custom_css = Some(css);
                }
                "bullet" => options.bullet = Some(value.clone()),
                "panel-background" => options.panel.background = normalize_color(value),
                "panel-border-color" => options.panel.border_color = normalize_color(value),
                "panel-border-width" => options.panel.border_width = value.clone(),
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'html' has no parameter '{other}'"
                    )))
                }
            }
        }
        Ok(options)
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML5 format with embedded CSS"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serialize_to_html(doc, &self.options)
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        serialize_to_html(doc, &self.options_with_params(options)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::nodes::{OutputBlock, PanelBlock};

    fn panel_doc() -> Document {
        Document {
            blocks: vec![OutputBlock::Panel(PanelBlock::default())],
        }
    }

    #[test]
    fn test_panel_params_are_normalized() {
        let mut params = HashMap::new();
        params.insert("panel-background".to_string(), "#abc".to_string());
        params.insert("panel-border-width".to_string(), "3px".to_string());

        let html = HtmlFormat::default()
            .serialize_with_options(&panel_doc(), &params)
            .unwrap();
        assert!(html.contains("background-color: #AABBCC; border: 3px solid #000000"));
    }

    #[test]
    fn test_unknown_param_is_rejected() {
        let mut params = HashMap::new();
        params.insert("theme".to_string(), "dark".to_string());
        assert!(matches!(
            HtmlFormat::default().serialize_with_options(&panel_doc(), &params),
            Err(FormatError::NotSupported(_))
        ));
    }

    #[test]
    fn test_missing_css_file() {
        let mut params = HashMap::new();
        params.insert(
            "css-path".to_string(),
            "/definitely/not/here.css".to_string(),
        );
        assert!(matches!(
            HtmlFormat::default().serialize_with_options(&panel_doc(), &params),
            Err(FormatError::SerializationError(_))
        ));
    }

    #[test]
    fn test_inline_css_param() {
        let mut params = HashMap::new();
        params.insert("css".to_string(), "p { margin: 0 }".to_string());
        let html = HtmlFormat::default()
            .serialize_with_options(&panel_doc(), &params)
            .unwrap();
        assert!(html.contains("p { margin: 0 }"));
    }
}
