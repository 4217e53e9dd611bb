//! Shared icon mapping for tree visualization
//!
//! Output blocks and markup nodes share one table so the `treeviz` format and
//! the markup inspection view look alike.

/// Get the Unicode icon for a block kind or markup node type
///
/// Returns a single Unicode character that visually represents the node type.
/// Both output block kinds (`"Paragraph"`) and ADF type names (`"paragraph"`)
/// are accepted.
pub fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" | "doc" => "⧉",
        "Heading" | "heading" => "§",
        "Paragraph" | "paragraph" => "¶",
        "ListLine" | "listItem" => "•",
        "bulletList" | "orderedList" => "☰",
        "Table" | "table" => "▦",
        "Row" | "tableRow" => "▤",
        "Cell" | "tableCell" | "tableHeader" => "▢",
        "Panel" | "panel" => "▣",
        "CodeBlock" | "codeBlock" => "𝒱",
        "Run" | "text" => "◦",
        "Break" | "hardBreak" => "↵",
        _ => "○",
    }
}
