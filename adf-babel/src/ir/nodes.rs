//! Core data structures for the output document model.

use serde::Serialize;

/// A converted document: the ordered block sequence handed to a writer.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Document {
    pub blocks: Vec<OutputBlock>,
}

/// A top-level structural unit of the output document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutputBlock {
    Heading(Heading),
    Paragraph(Paragraph),
    ListLine(ListLine),
    Table(TableBlock),
    Panel(PanelBlock),
    CodeBlock(CodeBlock),
}

/// A heading. Level 0 is the document title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub level: usize,
    pub runs: Vec<Run>,
}

/// A paragraph of styled runs.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

/// One line of a flattened list. `level` starts at 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListLine {
    pub level: usize,
    pub marker: ListMarker,
    pub runs: Vec<Run>,
}

/// Leading marker of a list line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListMarker {
    Bullet,
    Number(u64),
}

/// A grid of plain-text cells. Rows may differ in length.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TableBlock {
    pub rows: Vec<Vec<String>>,
}

/// A boxed region; the writer decides fill and border.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PanelBlock {
    pub panel_type: Option<String>,
    pub blocks: Vec<OutputBlock>,
}

/// Preformatted text, always rendered monospace.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CodeBlock {
    pub language: Option<String>,
    pub text: String,
}

/// A contiguous span of text sharing one fully resolved style.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
    pub script: Script,
    /// Six upper-case hex digits, no leading `#`.
    pub color: Option<String>,
    pub monospace: bool,
}

/// Vertical position of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Script {
    #[default]
    None,
    Sub,
    Super,
}

impl Run {
    /// An unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            ..Run::default()
        }
    }

    /// A line break inside a paragraph or list line.
    pub fn line_break() -> Self {
        Run::plain("\n")
    }

    pub fn is_line_break(&self) -> bool {
        self.text == "\n"
    }
}

impl Paragraph {
    pub fn new(runs: Vec<Run>) -> Self {
        Paragraph { runs }
    }

    /// A paragraph holding one unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Paragraph {
            runs: vec![Run::plain(text)],
        }
    }
}

impl OutputBlock {
    /// Short type name, used by the inspection formats.
    pub fn kind(&self) -> &'static str {
        match self {
            OutputBlock::Heading(_) => "Heading",
            OutputBlock::Paragraph(_) => "Paragraph",
            OutputBlock::ListLine(_) => "ListLine",
            OutputBlock::Table(_) => "Table",
            OutputBlock::Panel(_) => "Panel",
            OutputBlock::CodeBlock(_) => "CodeBlock",
        }
    }

    /// Text of the block with styling dropped. Table cells are separated by
    /// line breaks, panel blocks are concatenated.
    pub fn plain_text(&self) -> String {
        match self {
            OutputBlock::Heading(Heading { runs, .. })
            | OutputBlock::Paragraph(Paragraph { runs })
            | OutputBlock::ListLine(ListLine { runs, .. }) => runs_text(runs),
            OutputBlock::Table(table) => table
                .rows
                .iter()
                .flatten()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join("\n"),
            OutputBlock::Panel(panel) => panel
                .blocks
                .iter()
                .map(OutputBlock::plain_text)
                .collect::<Vec<_>>()
                .join("\n"),
            OutputBlock::CodeBlock(code) => code.text.clone(),
        }
    }
}

/// Concatenated text of a run sequence.
pub fn runs_text(runs: &[Run]) -> String {
    runs.iter().map(|run| run.text.as_str()).collect()
}
