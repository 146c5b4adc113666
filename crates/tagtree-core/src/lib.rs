//! # TagTree Core
//!
//! A stack-driven parser that extracts the nesting structure of conditional
//! and loop blocks from template text.
//!
//! TagTree does not parse the template language. It recognizes the six
//! block-control tags (`{% if %}`, `{% elif %}`, `{% else %}`, `{% endif %}`,
//! `{% for %}`, `{% endfor %}`) embedded in free text and turns them into a
//! forest of block nodes, each annotated with its line range, nesting depth
//! and a short body preview. Hosts use the forest for outlines, navigation
//! and exports.
//!
//! ## Quick Start
//!
//! ```rust
//! use tagtree_core::{BlockKind, Parser};
//!
//! let input = "{% if user %}\nHello, {{ user.name }}!\n{% endif %}";
//! let result = Parser::new().parse(input);
//!
//! assert_eq!(result.forest.node_count(), 1);
//! let root = result.forest.get(result.forest.roots()[0]);
//! assert_eq!(root.kind, BlockKind::If);
//! assert_eq!(root.condition, "user");
//! assert_eq!(root.end_line, Some(1));
//! ```
//!
//! ## Malformed Input
//!
//! The parser never fails. Stray closers, orphaned branches and
//! unterminated blocks degrade to a well-defined partial forest, with
//! notices collected for surrounding layers:
//!
//! ```rust
//! use tagtree_core::Parser;
//!
//! let result = Parser::new().parse("{% endif %}\n{% for x in xs %}");
//!
//! // The stray endif produced no node; the unterminated for stays open.
//! assert_eq!(result.forest.node_count(), 1);
//! assert_eq!(result.notices.len(), 2);
//! ```
//!
//! ## Exports
//!
//! Two pure projections consume the forest read-only:
//! [`outline::outline`] produces nested serializable records, and
//! [`diagram::diagram`] renders Mermaid flowchart text.

pub mod diagram;
pub mod lines;
pub mod notice;
pub mod outline;
pub mod parser;
pub mod preview;
pub mod span;
pub mod tag;
pub mod tree;

pub use notice::{NoticeKind, ParseNotice, ParseNotices};
pub use parser::{ParseResult, Parser};
pub use tree::{BlockKind, BlockNode, Forest, NodeId};
