//! Hex colour canonicalization.
//!
//! Editors emit colours in several shorthands (`#f00`, `#f00f`, `#ff0000aa`).
//! Writers need exactly six upper-case hex digits, so every mark colour goes
//! through [`normalize_color`] first.

/// Colour used when the input is empty or cannot be interpreted.
pub const DEFAULT_COLOR: &str = "000000";

/// Canonicalize a hex colour string into `RRGGBB`, upper-cased.
///
/// After trimming and stripping one leading `#`, the input is dispatched on
/// its character count:
///
/// | length | result                                   |
/// |--------|------------------------------------------|
/// | 0      | `000000`                                 |
/// | 1      | the digit repeated six times             |
/// | 3      | every digit doubled (`abc` → `AABBCC`)   |
/// | 4      | alpha dropped, rest doubled              |
/// | 6      | unchanged                                |
/// | > 6    | first six digits                         |
///
/// Lengths 2 and 5, and anything that is not hex, fall back to
/// [`DEFAULT_COLOR`].
pub fn normalize_color(raw: &str) -> String {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let chars: Vec<char> = digits.chars().collect();

    let expanded: String = match chars.len() {
        0 => return DEFAULT_COLOR.to_string(),
        1 => chars[0].to_string().repeat(6),
        3 => double(&chars),
        4 => double(&chars[..3]),
        6 => digits.to_string(),
        len if len > 6 => chars[..6].iter().collect(),
        _ => return DEFAULT_COLOR.to_string(),
    };

    if expanded.chars().all(|c| c.is_ascii_hexdigit()) {
        expanded.to_ascii_uppercase()
    } else {
        DEFAULT_COLOR.to_string()
    }
}

fn double(chars: &[char]) -> String {
    chars.iter().flat_map(|&c| [c, c]).collect()
}
