//! Stack-driven block-structure parser.
//!
//! One pass over the line array, top to bottom. Open tags push a scope onto
//! the active stack; branch and closing tags finalize the scope on top and
//! pop it. The stack holds arena indices, never ownership, so finalizing a
//! block's end line is a plain indexed write.
//!
//! The parser never fails. Malformed input (stray closers, orphaned
//! branches, unterminated blocks, empty captures) degrades to a partial
//! forest plus collected notices.

use crate::lines::{split_lines, Line};
use crate::notice::{ParseNotice, ParseNotices};
use crate::preview::{body_preview, EMPTY_PREVIEW};
use crate::span::Span;
use crate::tag::{self, TagKind};
use crate::tree::{BlockKind, BlockNode, CowStr, Forest, NodeId};

/// Everything one parse produces.
///
/// The forest and the line array are handed out together because consumers
/// (tree displays, exporters, host editors) address lines by the indices
/// stored in the nodes. Nothing here is mutated after the parse returns.
#[derive(Debug)]
pub struct ParseResult<'a> {
    /// The block forest (may be partial for malformed input).
    pub forest: Forest<'a>,
    /// The split source lines, indexable by `source_line`/`end_line`.
    pub lines: Vec<Line<'a>>,
    /// Notices collected along the way.
    pub notices: ParseNotices,
}

impl<'a> ParseResult<'a> {
    /// Check if parsing saw no malformed input.
    pub fn is_clean(&self) -> bool {
        self.notices.is_empty()
    }

    /// Byte span a host should select when navigating to a node: first
    /// non-whitespace character of the opening tag line through end of line.
    pub fn anchor_span(&self, id: NodeId) -> Option<Span> {
        let node = self.forest.get(id);
        self.lines
            .get(node.source_line as usize)
            .map(Line::content_span)
    }
}

/// Block-structure parser with a configurable preview budget.
#[derive(Debug, Clone)]
pub struct Parser {
    /// How many body lines to collect per node preview.
    preview_lines: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a parser with the default preview budget of 3 lines.
    #[inline]
    pub fn new() -> Self {
        Self { preview_lines: 3 }
    }

    /// Set how many body lines each node's preview collects.
    pub fn with_preview_lines(mut self, preview_lines: usize) -> Self {
        self.preview_lines = preview_lines;
        self
    }

    /// Parse the input into a block forest.
    ///
    /// Single pass, linear in input size. Each call owns its own stack and
    /// forest; nothing is shared between invocations.
    pub fn parse<'a>(&self, input: &'a str) -> ParseResult<'a> {
        let lines = split_lines(input);
        let mut forest = Forest::new();
        let mut notices = ParseNotices::new();
        // Currently-open scopes, innermost last. Indices into the arena.
        let mut stack: Vec<NodeId> = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let tag = match tag::recognize(line.text) {
                Some(tag) => tag,
                None => continue,
            };
            let i = i as u32;

            match tag.kind {
                TagKind::If | TagKind::For => {
                    self.open(&mut forest, &mut stack, &mut notices, tag.kind, tag.expr, i, line.span);
                }
                TagKind::Elif | TagKind::Else => {
                    // A branch finalizes the scope on top and takes its
                    // place one level up: pop, then append to whatever the
                    // stack top was before the branch's own push. With an
                    // empty stack there is nothing to continue, so the tag
                    // produces no node at all.
                    match stack.pop() {
                        Some(top) => {
                            self.finalize(&mut forest, &mut notices, top, tag.kind, i);
                            self.open(&mut forest, &mut stack, &mut notices, tag.kind, tag.expr, i, line.span);
                        }
                        None => notices.push(ParseNotice::stray(tag.kind.keyword(), i)),
                    }
                }
                TagKind::EndIf | TagKind::EndFor => match stack.pop() {
                    Some(top) => self.finalize(&mut forest, &mut notices, top, tag.kind, i),
                    None => notices.push(ParseNotice::stray(tag.kind.keyword(), i)),
                },
            }
        }

        // Scopes still open at end of input stay in the forest with an
        // unresolved end line, meaning "open to end of input".
        for &id in &stack {
            let node = forest.get(id);
            notices.push(ParseNotice::unterminated(
                node.kind.keyword(),
                node.source_line,
            ));
        }

        self.fill_previews(&mut forest, &lines);

        ParseResult {
            forest,
            lines,
            notices,
        }
    }

    /// Create a node for an opening or branch tag, attach it, and push it.
    #[inline]
    fn open<'a>(
        &self,
        forest: &mut Forest<'a>,
        stack: &mut Vec<NodeId>,
        notices: &mut ParseNotices,
        tag_kind: TagKind,
        expr: &'a str,
        line: u32,
        span: Span,
    ) {
        let kind = match tag_kind.opens() {
            Some(kind) => kind,
            None => return,
        };

        if kind.has_condition() && expr.is_empty() {
            notices.push(ParseNotice::empty_condition(kind.keyword(), line));
        }

        let id = forest.alloc(BlockNode {
            kind,
            condition: expr,
            source_line: line,
            end_line: None,
            depth: stack.len() as u32,
            preview: CowStr::Borrowed(EMPTY_PREVIEW),
            children: Vec::new(),
            span,
        });

        match stack.last() {
            Some(&parent) => forest.get_mut(parent).children.push(id),
            None => forest.add_root(id),
        }
        stack.push(id);
    }

    /// Resolve a popped scope's end line and note family mismatches.
    #[inline]
    fn finalize(
        &self,
        forest: &mut Forest<'_>,
        notices: &mut ParseNotices,
        id: NodeId,
        closed_by: TagKind,
        line: u32,
    ) {
        // The opener sits on an earlier line, so `line` is at least 1 here.
        forest.get_mut(id).end_line = Some(line.saturating_sub(1));

        let open_kind = forest.get(id).kind;
        let same_family = match closed_by {
            TagKind::EndFor => open_kind.is_loop(),
            // elif/else/endif all continue or terminate a conditional.
            _ => !open_kind.is_loop(),
        };
        if !same_family {
            notices.push(ParseNotice::mismatched(
                closed_by.keyword(),
                open_kind.keyword(),
                line,
            ));
        }
    }

    /// Post-pass: compute every node's body preview.
    fn fill_previews<'a>(&self, forest: &mut Forest<'a>, lines: &[Line<'a>]) {
        for index in 0..forest.node_count() {
            let id = NodeId::new(index);
            let start = forest.get(id).source_line as usize + 1;
            let preview = body_preview(lines, start, self.preview_lines);
            forest.get_mut(id).preview = preview;
        }
    }
}
