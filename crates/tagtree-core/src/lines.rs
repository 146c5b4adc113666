//! Line splitting with SIMD-accelerated scanning.
//!
//! The parser is strictly line-oriented: tags are recognized per line and
//! every node is addressed by a zero-based line index. This module turns the
//! input text into an indexed array of [`Line`]s up front, because the tree
//! builder walks lines by index and the preview pass needs random access.
//! It uses `memchr` for fast newline detection (SIMD on supported platforms).
//!
//! # Performance
//!
//! - Zero-copy: lines borrow directly from the input
//! - SIMD-accelerated newline scanning via `memchr`
//! - CRLF line endings are handled without allocation

use crate::span::Span;
use memchr::memchr;

/// A single line from the input with its source span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line text (without trailing newline or carriage return).
    pub text: &'a str,
    /// Byte span in the original input.
    pub span: Span,
}

impl<'a> Line<'a> {
    /// Check if this line contains only whitespace.
    #[inline(always)]
    pub fn is_blank(&self) -> bool {
        self.text.bytes().all(|b| b == b' ' || b == b'\t')
    }

    /// Get the line text with leading/trailing whitespace removed.
    #[inline(always)]
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }

    /// Byte span from the first non-whitespace character through end of line.
    ///
    /// This is the selection target a host editor uses when navigating to a
    /// block's opening tag. For a blank line the span is empty and sits at
    /// the end of the line.
    #[inline]
    pub fn content_span(&self) -> Span {
        let indent = self.text.len() - self.text.trim_start().len();
        Span::new(self.span.start + indent as u32, self.span.end)
    }
}

/// Split the input into lines, preserving empty lines.
///
/// Splits on `\n` boundaries and strips a carriage return before each
/// newline, so CRLF input yields the same line texts as LF input. Interior
/// empty lines still occupy an index; a trailing newline does not produce a
/// final empty line.
pub fn split_lines(input: &str) -> Vec<Line<'_>> {
    let bytes = input.as_bytes();
    let mut lines = Vec::with_capacity(count_lines_hint(bytes));
    let mut offset = 0;

    while offset < bytes.len() {
        let start = offset;

        // memchr is SIMD accelerated on supported platforms
        let end = match memchr(b'\n', &bytes[start..]) {
            Some(pos) => start + pos,
            None => bytes.len(),
        };

        // Handle CRLF: drop a CR directly before the newline
        let text_end = if end > start && bytes[end - 1] == b'\r' {
            end - 1
        } else {
            end
        };

        offset = if end < bytes.len() { end + 1 } else { end };

        lines.push(Line {
            // SAFETY: Input is valid UTF-8 (guaranteed by &str). We slice at byte
            // positions `start` (a previous offset, always valid) and `text_end`
            // (either at a newline/CR, which are single-byte ASCII, or at input
            // end). Both are valid UTF-8 char boundaries since newlines and CRs
            // cannot appear mid-character in UTF-8.
            text: unsafe { input.get_unchecked(start..text_end) },
            span: Span::new(start as u32, text_end as u32),
        });
    }

    lines
}

/// Rough line-count estimate used to presize the line array.
#[inline]
fn count_lines_hint(bytes: &[u8]) -> usize {
    // Average line length of 32 bytes is a decent guess for templates.
    (bytes.len() / 32).max(4)
}
