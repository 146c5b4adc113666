//! Body-preview extraction.
//!
//! Each block node carries a short, best-effort sample of the body text
//! following its opening line, so tree displays can label blocks with
//! something more useful than the bare keyword.

use crate::lines::Line;
use crate::tree::CowStr;

/// Placeholder used when a block has no previewable body text.
pub const EMPTY_PREVIEW: &str = "(empty block)";

/// Collect up to `max_lines` preview lines starting at `start_line`.
///
/// Blank lines and lines whose trimmed text begins with a tag opener (`{%`)
/// or a comment opener (`{#`) are skipped. Collected lines are trimmed and
/// newline-joined. The scan stops early at end of input; it is not clipped
/// to the enclosing block, which keeps the helper a pure function of the
/// line array.
///
/// Returns a borrowed string when a single line suffices and only allocates
/// when several lines must be joined.
pub fn body_preview<'a>(lines: &[Line<'a>], start_line: usize, max_lines: usize) -> CowStr<'a> {
    let mut collected: Vec<&'a str> = Vec::with_capacity(max_lines);

    for line in lines.iter().skip(start_line) {
        if collected.len() == max_lines {
            break;
        }
        if line.is_blank() {
            continue;
        }
        let trimmed = line.trimmed();
        if trimmed.starts_with("{%") || trimmed.starts_with("{#") {
            continue;
        }
        collected.push(trimmed);
    }

    match collected.len() {
        0 => CowStr::Borrowed(EMPTY_PREVIEW),
        1 => CowStr::Borrowed(collected[0]),
        _ => CowStr::Owned(collected.join("\n")),
    }
}
