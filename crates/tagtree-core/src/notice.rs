//! Diagnostics collected while parsing malformed input.
//!
//! The parser never fails: stray closers, orphaned branches, unterminated
//! blocks and empty captures all degrade to a well-defined partial result.
//! What they leave behind is a notice, so surrounding layers can surface the
//! problem without the parser ever raising.

use std::fmt;

/// Notice kinds for categorizing malformed-input observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// A branch or closing tag arrived while no block was open.
    StrayTag,
    /// A closing or branch tag popped a scope of the other family
    /// (e.g. `endfor` terminating an `if`).
    MismatchedTag,
    /// A block was still open when the input ended.
    Unterminated,
    /// A condition-carrying tag captured no text.
    EmptyCondition,
}

/// A single observation about malformed input, with its line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNotice {
    /// Human-readable description.
    pub message: String,
    /// Zero-based line index the notice refers to.
    pub line: u32,
    /// Notice categorization.
    pub kind: NoticeKind,
}

impl ParseNotice {
    /// A branch or closer with no open block to act on.
    pub fn stray(keyword: &str, line: u32) -> Self {
        Self {
            message: format!("stray `{}` with no open block", keyword),
            line,
            kind: NoticeKind::StrayTag,
        }
    }

    /// A closer or branch that popped a scope of the other family.
    pub fn mismatched(keyword: &str, open_keyword: &str, line: u32) -> Self {
        Self {
            message: format!("`{}` terminates a `{}` block", keyword, open_keyword),
            line,
            kind: NoticeKind::MismatchedTag,
        }
    }

    /// A block left open at end of input.
    pub fn unterminated(keyword: &str, line: u32) -> Self {
        Self {
            message: format!("unterminated `{}` block", keyword),
            line,
            kind: NoticeKind::Unterminated,
        }
    }

    /// A condition-carrying tag with nothing captured.
    pub fn empty_condition(keyword: &str, line: u32) -> Self {
        Self {
            message: format!("`{}` tag has no condition", keyword),
            line,
            kind: NoticeKind::EmptyCondition,
        }
    }
}

impl fmt::Display for ParseNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (line {})", self.message, self.line + 1)
    }
}

/// A collection of notices gathered during one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseNotices {
    notices: Vec<ParseNotice>,
}

impl ParseNotices {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            notices: Vec::new(),
        }
    }

    /// Add a notice to the collection.
    pub fn push(&mut self, notice: ParseNotice) {
        self.notices.push(notice);
    }

    /// Check if any notices were collected.
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Get the number of notices.
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    /// Iterate over the notices.
    pub fn iter(&self) -> impl Iterator<Item = &ParseNotice> {
        self.notices.iter()
    }

    /// Check if any notice of the given kind exists.
    pub fn has_kind(&self, kind: NoticeKind) -> bool {
        self.notices.iter().any(|n| n.kind == kind)
    }
}

impl IntoIterator for ParseNotices {
    type Item = ParseNotice;
    type IntoIter = std::vec::IntoIter<ParseNotice>;

    fn into_iter(self) -> Self::IntoIter {
        self.notices.into_iter()
    }
}
