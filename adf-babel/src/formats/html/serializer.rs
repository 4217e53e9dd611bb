//! HTML serialization (blocks → HTML export)
//!
//! Converts output documents to HTML5 with embedded CSS.
//! Pipeline: Document → RcDom → HTML string → complete page

use crate::error::FormatError;
use crate::formats::common::marker_label;
use crate::ir::nodes::{runs_text, Document, OutputBlock, Run, Script};
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;

/// Fill and border applied to every panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelStyle {
    /// Six hex digits, no leading `#`
    pub background: String,
    /// Six hex digits, no leading `#`
    pub border_color: String,
    /// Any CSS length
    pub border_width: String,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            background: "D9D9D9".to_string(),
            border_color: "000000".to_string(),
            border_width: "0.5pt".to_string(),
        }
    }
}

/// Options for HTML serialization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Panel fill and border
    pub panel: PanelStyle,
    /// Optional custom CSS to append after the baseline CSS
    pub custom_css: Option<String>,
    /// Bullet glyph of bullet list lines
    pub bullet: Option<String>,
}

impl HtmlOptions {
    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }

    pub fn with_panel(mut self, panel: PanelStyle) -> Self {
        self.panel = panel;
        self
    }
}

/// The CSS embedded in every exported page
pub fn get_default_css() -> &'static str {
    include_str!("../../../css/baseline.css")
}

/// Serialize a document to HTML with full options
pub fn serialize_to_html(doc: &Document, options: &HtmlOptions) -> Result<String, FormatError> {
    let title = doc
        .blocks
        .iter()
        .find_map(|block| match block {
            OutputBlock::Heading(heading) if heading.level == 0 => Some(runs_text(&heading.runs)),
            _ => None,
        })
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| "ADF Document".to_string());

    // Step 1: Document → DOM
    let container = create_element("div", vec![("class", "adf-document")]);
    append_blocks(&container, &doc.blocks, options);

    // Step 2: DOM → HTML string
    let html_string = serialize_children(&container)?;

    // Step 3: Wrap in complete HTML document with CSS
    Ok(wrap_in_document(&html_string, &title, options))
}

fn append_blocks(parent: &Handle, blocks: &[OutputBlock], options: &HtmlOptions) {
    for block in blocks {
        if matches!(block, OutputBlock::Table(table) if table.rows.is_empty()) {
            continue;
        }
        let node = block_node(block, options);
        parent.children.borrow_mut().push(node);
    }
}

fn block_node(block: &OutputBlock, options: &HtmlOptions) -> Handle {
    match block {
        OutputBlock::Heading(heading) => {
            let element = if heading.level == 0 {
                create_element("h1", vec![("class", "adf-title")])
            } else {
                let tag = format!("h{}", heading.level.min(6));
                create_element(&tag, vec![])
            };
            append_runs(&element, &heading.runs);
            element
        }
        OutputBlock::Paragraph(paragraph) => {
            let p = create_element("p", vec![("class", "adf-paragraph")]);
            append_runs(&p, &paragraph.runs);
            p
        }
        OutputBlock::ListLine(line) => {
            let class = format!("adf-list-line adf-list-level-{}", line.level);
            let style = format!("margin-left: {}em", 1.5 * line.level.saturating_sub(1) as f64);
            let p = create_element("p", vec![("class", class.as_str()), ("style", style.as_str())]);

            let bullet = options.bullet.as_deref().unwrap_or("•");
            let marker = create_element("span", vec![("class", "adf-marker")]);
            push(&marker, create_text(&marker_label(line.marker, bullet)));
            push(&p, marker);

            append_runs(&p, &line.runs);
            p
        }
        OutputBlock::Table(table) => {
            let element = create_element("table", vec![("class", "adf-table")]);
            for row in &table.rows {
                let tr = create_element("tr", vec![]);
                for cell in row {
                    let td = create_element("td", vec![]);
                    append_lines(&td, cell);
                    push(&tr, td);
                }
                push(&element, tr);
            }
            element
        }
        OutputBlock::Panel(panel) => {
            let class = match &panel.panel_type {
                Some(panel_type) => format!("adf-panel adf-panel-{panel_type}"),
                None => "adf-panel".to_string(),
            };
            let style = format!(
                "background-color: #{}; border: {} solid #{}",
                options.panel.background, options.panel.border_width, options.panel.border_color
            );
            let div = create_element("div", vec![("class", class.as_str()), ("style", style.as_str())]);
            append_blocks(&div, &panel.blocks, options);
            div
        }
        OutputBlock::CodeBlock(code) => {
            let pre = create_element("pre", vec![("class", "adf-code")]);
            let code_element = match &code.language {
                Some(language) => create_element("code", vec![("data-language", language.as_str())]),
                None => create_element("code", vec![]),
            };
            push(&code_element, create_text(&code.text));
            push(&pre, code_element);
            pre
        }
    }
}

/// Append styled runs. Styles nest from the outside in: colour, script,
/// strike, underline, italic, bold, monospace.
fn append_runs(parent: &Handle, runs: &[Run]) {
    for run in runs {
        if run.is_line_break() {
            push(parent, create_element("br", vec![]));
            continue;
        }

        let mut node = create_text(&run.text);
        let mut wrap = |tag: &str, attrs: Vec<(&str, &str)>| {
            let element = create_element(tag, attrs);
            push(&element, node.clone());
            node = element;
        };

        if run.monospace {
            wrap("code", vec![]);
        }
        if run.bold {
            wrap("strong", vec![]);
        }
        if run.italic {
            wrap("em", vec![]);
        }
        if run.underline {
            wrap("u", vec![]);
        }
        if run.strike {
            wrap("s", vec![]);
        }
        match run.script {
            Script::None => {}
            Script::Sub => wrap("sub", vec![]),
            Script::Super => wrap("sup", vec![]),
        }
        if let Some(color) = &run.color {
            let style = format!("color: #{color}");
            wrap("span", vec![("style", style.as_str())]);
        }

        push(parent, node);
    }
}

/// Append text, turning `\n` into `<br>`.
fn append_lines(parent: &Handle, text: &str) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            push(parent, create_element("br", vec![]));
        }
        if !line.is_empty() {
            push(parent, create_text(line));
        }
    }
}

fn push(parent: &Handle, child: Handle) {
    parent.children.borrow_mut().push(child);
}

/// Create an HTML element with attributes
fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Serialize the children of `container` (not the container itself)
fn serialize_children(container: &Handle) -> Result<String, FormatError> {
    let mut output = Vec::new();

    // Use TraversalScope::IncludeNode to serialize the element AND its children
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for child in container.children.borrow().iter() {
        let serializable = SerializableHandle::from(child.clone());
        serialize(&mut output, &serializable, opts.clone()).map_err(|e| {
            FormatError::SerializationError(format!("HTML serialization failed: {e}"))
        })?;
        output.push(b'\n');
    }

    String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("UTF-8 conversion failed: {e}")))
}

/// Wrap the content in a complete HTML document with embedded CSS
fn wrap_in_document(body_html: &str, title: &str, options: &HtmlOptions) -> String {
    let baseline_css = get_default_css();

    // Custom CSS is appended after the baseline
    let custom_css = options.custom_css.as_deref().unwrap_or("");

    // Escape HTML entities in title for safety
    let escaped_title = html_escape(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="adf-babel">
  <title>{escaped_title}</title>
  <style>
{baseline_css}
{custom_css}
  </style>
</head>
<body>
<div class="adf-document">
{body_html}</div>
</body>
</html>"#
    )
}

/// Escape HTML special characters in text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::nodes::{
        CodeBlock, Heading, ListLine, ListMarker, PanelBlock, Paragraph, TableBlock,
    };

    fn render(blocks: Vec<OutputBlock>) -> String {
        serialize_to_html(&Document { blocks }, &HtmlOptions::default()).unwrap()
    }

    #[test]
    fn test_simple_paragraph() {
        let html = render(vec![OutputBlock::Paragraph(Paragraph::plain(
            "This is a simple paragraph.",
        ))]);

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("<p class=\"adf-paragraph\">This is a simple paragraph.</p>"));
    }

    #[test]
    fn test_title_and_headings() {
        let html = render(vec![
            OutputBlock::Heading(Heading {
                level: 0,
                runs: vec![Run::plain("Acme & Co - OPS-1")],
            }),
            OutputBlock::Heading(Heading {
                level: 8,
                runs: vec![Run::plain("Deep")],
            }),
        ]);

        assert!(html.contains("<title>Acme &amp; Co - OPS-1</title>"));
        assert!(html.contains("<h1 class=\"adf-title\">Acme &amp; Co - OPS-1</h1>"));
        assert!(html.contains("<h6>Deep</h6>"));
    }

    #[test]
    fn test_run_styles_nest() {
        let run = Run {
            text: "x".into(),
            bold: true,
            italic: true,
            script: Script::Super,
            color: Some("FF0000".into()),
            ..Run::default()
        };
        let html = render(vec![OutputBlock::Paragraph(Paragraph::new(vec![
            run,
            Run::line_break(),
            Run {
                text: "y".into(),
                monospace: true,
                underline: true,
                strike: true,
                ..Run::default()
            },
        ]))]);

        assert!(html.contains(
            "<span style=\"color: #FF0000\"><sup><em><strong>x</strong></em></sup></span><br>"
        ));
        assert!(html.contains("<s><u><code>y</code></u></s>"));
    }

    #[test]
    fn test_list_lines_are_indented() {
        let html = render(vec![OutputBlock::ListLine(ListLine {
            level: 3,
            marker: ListMarker::Number(2),
            runs: vec![Run::plain("Second")],
        })]);

        assert!(html.contains("class=\"adf-list-line adf-list-level-3\""));
        assert!(html.contains("style=\"margin-left: 3em\""));
        assert!(html.contains("<span class=\"adf-marker\">2.</span>Second"));
    }

    #[test]
    fn test_table_panel_and_code() {
        let html = render(vec![
            OutputBlock::Table(TableBlock {
                rows: vec![vec!["a\nb".into()]],
            }),
            OutputBlock::Panel(PanelBlock {
                panel_type: Some("info".into()),
                blocks: vec![OutputBlock::Paragraph(Paragraph::plain("Inside"))],
            }),
            OutputBlock::CodeBlock(CodeBlock {
                language: Some("rust".into()),
                text: "a < b".into(),
            }),
        ]);

        assert!(html.contains("<td>a<br>b</td>"));
        assert!(html.contains(
            "<div class=\"adf-panel adf-panel-info\" style=\"background-color: #D9D9D9; border: 0.5pt solid #000000\">"
        ));
        assert!(html.contains("<code data-language=\"rust\">a &lt; b</code>"));
    }

    #[test]
    fn test_table_without_rows_is_skipped() {
        let html = render(vec![
            OutputBlock::Table(TableBlock { rows: vec![] }),
            OutputBlock::Paragraph(Paragraph::plain("After")),
        ]);

        assert!(!html.contains("<table"));
        assert!(html.contains("After"));
    }

    #[test]
    fn test_custom_css_appended() {
        let custom_css = ".my-custom-class { color: red; }";
        let options = HtmlOptions::default().with_custom_css(custom_css.to_string());
        let html = serialize_to_html(&Document::default(), &options).unwrap();

        assert!(html.contains(custom_css));
        assert!(html.contains(".adf-document"));
        assert!(html.contains("<title>ADF Document</title>"));
    }

    #[test]
    fn test_panel_style_options() {
        let options = HtmlOptions::default().with_panel(PanelStyle {
            background: "DEEBFF".into(),
            border_color: "0052CC".into(),
            border_width: "2px".into(),
        });
        let doc = Document {
            blocks: vec![OutputBlock::Panel(PanelBlock::default())],
        };
        let html = serialize_to_html(&doc, &options).unwrap();
        assert!(html.contains("background-color: #DEEBFF; border: 2px solid #0052CC"));
    }
}
