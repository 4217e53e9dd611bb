//! Mark application: resolving a text leaf's marks into a run style.

use super::color::normalize_color;
use crate::adf::nodes::{Mark, Text};
use crate::ir::nodes::{Run, Script};

/// Apply `marks` to `run` in source order.
///
/// Each mark sets one independent field, so order only matters for
/// duplicates (last one wins). Subscript beats superscript whichever comes
/// first. Link marks keep the visible text and lose their target: the output
/// model has no hyperlinks.
pub fn apply_marks(mut run: Run, marks: &[Mark]) -> Run {
    for mark in marks {
        match mark {
            Mark::Bold => run.bold = true,
            Mark::Italic => run.italic = true,
            Mark::Underline => run.underline = true,
            Mark::Strike => run.strike = true,
            Mark::Subscript => run.script = Script::Sub,
            Mark::Superscript => {
                if run.script != Script::Sub {
                    run.script = Script::Super;
                }
            }
            Mark::TextColor(raw) => run.color = Some(normalize_color(raw)),
            Mark::Monospace => run.monospace = true,
            Mark::Link(_) => {}
        }
    }
    run
}

/// Styled run for a text leaf.
pub fn text_run(text: &Text) -> Run {
    apply_marks(Run::plain(text.text.as_str()), &text.marks)
}
