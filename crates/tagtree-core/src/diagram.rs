//! Diagram projection: the forest as Mermaid flowchart text.
//!
//! The first output line declares the graph direction. Then comes one
//! vertex-declaration line per node and one edge-declaration line per
//! parent→child pair. Vertex identifiers derive from path position (the
//! parent's id plus the child index), so the same forest always renders to
//! the same text.
//!
//! ## Example
//!
//! ```text
//! flowchart TD
//!     n0{"if user"}
//!     n0_0(["for item in user.items"])
//!     n0 -->|0| n0_0
//! ```
//!
//! Loops render as stadium vertices, conditionals as decision vertices.
//! Edge labels are the child's structural index, never content.

use crate::tree::{BlockNode, Forest, NodeId};

/// Render a forest as Mermaid flowchart text.
pub fn diagram(forest: &Forest<'_>) -> String {
    let mut out = String::from("flowchart TD\n");

    for (index, &root) in forest.roots().iter().enumerate() {
        emit_vertices(forest, root, &format!("n{}", index), &mut out);
    }
    for (index, &root) in forest.roots().iter().enumerate() {
        emit_edges(forest, root, &format!("n{}", index), &mut out);
    }

    out
}

fn emit_vertices(forest: &Forest<'_>, id: NodeId, vertex: &str, out: &mut String) {
    let node = forest.get(id);
    let label = escape(&vertex_label(node));

    if node.kind.is_loop() {
        out.push_str(&format!("    {}([\"{}\"])\n", vertex, label));
    } else {
        out.push_str(&format!("    {}{{\"{}\"}}\n", vertex, label));
    }

    for (index, &child) in node.children.iter().enumerate() {
        emit_vertices(forest, child, &format!("{}_{}", vertex, index), out);
    }
}

fn emit_edges(forest: &Forest<'_>, id: NodeId, vertex: &str, out: &mut String) {
    let node = forest.get(id);

    for (index, &child) in node.children.iter().enumerate() {
        let child_vertex = format!("{}_{}", vertex, index);
        out.push_str(&format!("    {} -->|{}| {}\n", vertex, index, child_vertex));
        emit_edges(forest, child, &child_vertex, out);
    }
}

fn vertex_label(node: &BlockNode<'_>) -> String {
    if node.condition.is_empty() {
        node.kind.keyword().to_string()
    } else {
        format!("{} {}", node.kind.keyword(), node.condition)
    }
}

/// Escape double quotes for Mermaid string labels.
fn escape(label: &str) -> String {
    label.replace('"', "#quot;")
}
