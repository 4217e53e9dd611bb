//! Format implementations
//!
//! Input formats (`adf`, `issue`) turn JSON into output documents; output
//! formats render output documents as text, JSON, HTML or inspection views.

pub mod adf;
pub mod common;
pub mod html;
pub mod icons;
pub mod issue;
pub mod json;
pub mod tag;
pub mod text;
pub mod treeviz;

pub use adf::AdfFormat;
pub use html::{get_default_css, HtmlFormat, HtmlOptions, PanelStyle};
pub use issue::IssueFormat;
pub use json::JsonFormat;
pub use tag::TagFormat;
pub use text::{TextFormat, TextOptions};
pub use treeviz::TreevizFormat;

/// Pick the input format for a source file.
///
/// `*.adf.json` and `*.adf` files are ADF documents. Otherwise a JSON object
/// with a `fields` member is an issue export and anything else is read as ADF.
pub fn detect_input_format(filename: &str, source: &str) -> &'static str {
    if filename.ends_with(".adf.json") || filename.ends_with(".adf") {
        return "adf";
    }
    match serde_json::from_str::<serde_json::Value>(source) {
        Ok(value) if value.get("fields").is_some() => "issue",
        _ => "adf",
    }
}
