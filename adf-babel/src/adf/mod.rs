//! Input model: Atlassian Document Format (ADF) markup trees.
//!
//! ADF is the JSON rich-text format produced by Jira and Confluence editors.
//! [`nodes`] holds the typed tree, [`parse`] the total JSON mapping onto it.

pub mod nodes;
pub mod parse;

pub use nodes::{Mark, MarkupNode};
