//! Tag recognition for block-control delimiters.
//!
//! A tag is a `{% ... %}` delimiter pair on a single line, optionally
//! carrying `-` trim markers directly inside the braces and arbitrary
//! whitespace around the keyword. Six shapes are recognized:
//!
//! ```text
//! {% if cond %}   {% elif cond %}   {% else %}
//! {% endif %}     {% for item in seq %}   {% endfor %}
//! ```
//!
//! Classification is pure and per-line: at most one tag is recognized per
//! line. When a line carries syntax for more than one shape, the shapes are
//! tested in the fixed order `if, elif, else, endif, for, endfor` and the
//! first-tested shape wins. That precedence is a documented policy for
//! pathological input, not an error.

use crate::tree::BlockKind;

/// The six recognizable tag shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `{% if cond %}` — opens a conditional block.
    If,
    /// `{% elif cond %}` — alternate branch.
    Elif,
    /// `{% else %}` — default branch.
    Else,
    /// `{% endif %}` — closes a conditional region.
    EndIf,
    /// `{% for item in seq %}` — opens a loop block.
    For,
    /// `{% endfor %}` — closes a loop region.
    EndFor,
}

impl TagKind {
    /// The keyword that identifies this tag shape.
    #[inline]
    pub const fn keyword(self) -> &'static str {
        match self {
            TagKind::If => "if",
            TagKind::Elif => "elif",
            TagKind::Else => "else",
            TagKind::EndIf => "endif",
            TagKind::For => "for",
            TagKind::EndFor => "endfor",
        }
    }

    /// Whether this shape captures a condition or loop expression.
    #[inline]
    pub const fn captures_expr(self) -> bool {
        matches!(self, TagKind::If | TagKind::Elif | TagKind::For)
    }

    /// The block kind this tag opens, if it opens one.
    #[inline]
    pub const fn opens(self) -> Option<BlockKind> {
        match self {
            TagKind::If => Some(BlockKind::If),
            TagKind::Elif => Some(BlockKind::Elif),
            TagKind::Else => Some(BlockKind::Else),
            TagKind::For => Some(BlockKind::For),
            TagKind::EndIf | TagKind::EndFor => None,
        }
    }
}

/// A recognized tag occurrence on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    /// Which shape matched.
    pub kind: TagKind,
    /// Trimmed text between the keyword and the closing delimiter; empty
    /// for shapes that capture nothing and for malformed captures.
    pub expr: &'a str,
}

/// Fixed precedence order for lines that could match several shapes.
const PRECEDENCE: [TagKind; 6] = [
    TagKind::If,
    TagKind::Elif,
    TagKind::Else,
    TagKind::EndIf,
    TagKind::For,
    TagKind::EndFor,
];

/// Classify a line as zero-or-one block-control tag occurrence.
///
/// Returns `None` for plain text, comments, expression lines, and `{%`
/// openers with no closing `%}` on the same line. Never fails: a recognized
/// shape with a missing capture yields an empty `expr`.
pub fn recognize(line: &str) -> Option<Tag<'_>> {
    for kind in PRECEDENCE {
        if let Some(tag) = scan_for(line, kind) {
            return Some(tag);
        }
    }
    None
}

/// Scan every `{%` occurrence on the line for one keyword shape.
#[inline]
fn scan_for(line: &str, kind: TagKind) -> Option<Tag<'_>> {
    let keyword = kind.keyword();

    for (open, _) in line.match_indices("{%") {
        let rest = &line[open + 2..];
        // An optional trim marker sits directly inside the brace.
        let rest = rest.strip_prefix('-').unwrap_or(rest);
        let rest = rest.trim_start();

        let after = match rest.strip_prefix(keyword) {
            Some(after) => after,
            None => continue,
        };

        // Keyword must end at a word boundary: whitespace or the closing
        // delimiter (with or without a trim marker). Rejects `{% iffy %}`
        // and keeps `for` from matching inside `{% form %}`.
        let bounded = after.starts_with(|c: char| c.is_whitespace())
            || after.starts_with("%}")
            || after.starts_with("-%}");
        if !bounded {
            continue;
        }

        let close = match after.find("%}") {
            Some(pos) => pos,
            None => continue,
        };

        let expr = if kind.captures_expr() {
            let raw = &after[..close];
            // A `-` directly before `%}` is a trim marker, not capture text.
            let raw = raw.strip_suffix('-').unwrap_or(raw);
            raw.trim()
        } else {
            ""
        };

        return Some(Tag { kind, expr });
    }

    None
}
