//! Document projection: the forest as nested, serializable records.
//!
//! This is the structured export consumed by hosts that want the block
//! layout without any of the parser's internals. Records carry the tag
//! keyword, a 1-based line number, the condition when the kind has one,
//! and the children in source order. No semantic validation happens here.

use serde::Serialize;

use crate::tree::{Forest, NodeId};

/// One block in the document projection.
///
/// Serializes as `{"type": ..., "line": ..., "condition": ..., "children":
/// [...]}` with `condition` omitted for kinds that carry none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineNode<'a> {
    /// Tag keyword: `"if"`, `"elif"`, `"else"` or `"for"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// 1-based source line of the opening tag.
    pub line: u32,
    /// Condition or loop expression; absent for `else`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<&'a str>,
    /// Child blocks in source order.
    pub children: Vec<OutlineNode<'a>>,
}

/// Project a forest into outline records, preserving order and nesting.
pub fn outline<'a>(forest: &Forest<'a>) -> Vec<OutlineNode<'a>> {
    forest
        .roots()
        .iter()
        .map(|&id| outline_node(forest, id))
        .collect()
}

fn outline_node<'a>(forest: &Forest<'a>, id: NodeId) -> OutlineNode<'a> {
    let node = forest.get(id);
    OutlineNode {
        kind: node.kind.keyword(),
        line: node.source_line + 1,
        condition: node.kind.has_condition().then_some(node.condition),
        children: node
            .children
            .iter()
            .map(|&child| outline_node(forest, child))
            .collect(),
    }
}
