//! Atlassian Document Format (ADF) to styled report blocks
//!
//!     This crate turns ADF rich-text trees (the JSON produced by Jira and Confluence editors)
//!     into a flat sequence of styled output blocks, and renders those blocks through a set of
//!     writers (plain text, HTML, JSON and inspection formats).
//!
//!     This is a pure lib, that is, it powers the adf cli but is shell agnostic: no code
//!     should be written that supposes a shell environment, be it std print, env vars etc.
//!
//! Architecture
//!
//!     The conversion is split into three layers:
//!
//!     - Input model (./adf): the typed ADF tree. Parsing is total, anything we do not know
//!       becomes an `Other` node that keeps its children.
//!     - Transducer (./transduce.rs + ./common): walks the tree and emits output blocks. Lists
//!       are flattened to one line per item with an explicit nesting level, tables and panels
//!       become block containers, inline marks are folded into run styles.
//!     - Output model (./ir): the block sequence every writer consumes.
//!
//!     On top of that, ./report.rs assembles a whole ticket report (title, sections, comments)
//!     and ./source.rs reads issue exports into the report model.
//!
//!     The file structure :
//!     .
//!     ├── adf                     # ADF markup model and JSON mapping
//!     ├── common                  # Renderers: marks, colours, lists, tables, plain text
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── formats
//!     │   ├── <format>
//!     │   │   └── mod.rs
//!     ├── ir                      # Output blocks
//!     ├── lib.rs
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── report.rs               # Ticket report assembly
//!     ├── source.rs               # Issue export adapter
//!     └── transduce.rs            # Tree walk
//!
//! Testing
//!     tests
//!     ├── <area>
//!     │   └── <testname>.rs
//!     └── fixtures
//!         └── <docname>.json
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Depth
//!
//!     Lists, the plain-text extractor and the inline flattener are iterative. Only block
//!     containers (panels, table cells) recurse, and that recursion stops at
//!     `TransduceOptions::max_depth`, below which a subtree is flattened to a single paragraph.
//!
//! Formats
//!
//!     Format specific capabilities are implemented with the Format trait, see ./format.rs.
//!     - Format trait: Uniform interface for all formats (parsing and/or serialization)
//!     - FormatRegistry: Centralized discovery and selection of formats
//!     - Format implementations: `adf` and `issue` parse, the others serialize
//!
pub mod adf;
pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod registry;
pub mod report;
pub mod source;
pub mod transduce;

pub use adf::{Mark, MarkupNode};
pub use common::color::normalize_color;
pub use common::lists::render_list;
pub use common::marks::apply_marks;
pub use common::plain_text::extract_text;
pub use common::tables::{render_panel, render_table};
pub use error::FormatError;
pub use format::Format;
pub use ir::nodes::{
    CodeBlock, Document, Heading, ListLine, ListMarker, OutputBlock, PanelBlock, Paragraph, Run,
    Script, TableBlock,
};
pub use registry::FormatRegistry;
pub use report::{build_report, Body, Comment, ReportOptions, TicketReport};
pub use source::{load_report, IssueExport};
pub use transduce::{transduce, TransduceOptions, Transducer};
