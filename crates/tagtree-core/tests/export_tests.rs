//! Integration tests for the document and diagram projections

use tagtree_core::diagram::diagram;
use tagtree_core::outline::{outline, OutlineNode};
use tagtree_core::{Forest, NodeId, Parser};

const NESTED_SAMPLE: &str = "\
{% if user %}
{% for item in user.items %}
{{ item }}
{% endfor %}
{% else %}
anonymous
{% endif %}";

// ============================================================================
// Document Projection Tests
// ============================================================================

fn assert_round_trip(forest: &Forest, records: &[OutlineNode], ids: &[NodeId]) {
    assert_eq!(records.len(), ids.len());
    for (record, &id) in records.iter().zip(ids) {
        let node = forest.get(id);
        assert_eq!(record.line, node.source_line + 1);
        assert_eq!(record.kind, node.kind.keyword());
        assert_round_trip(forest, &record.children, &node.children);
    }
}

#[test]
fn test_outline_round_trips_lines_and_order() {
    let result = Parser::new().parse(NESTED_SAMPLE);
    let records = outline(&result.forest);

    assert_round_trip(&result.forest, &records, result.forest.roots());
}

#[test]
fn test_outline_shape() {
    let result = Parser::new().parse(NESTED_SAMPLE);
    let records = outline(&result.forest);

    // The else branch was promoted next to the if, so two roots.
    assert_eq!(records.len(), 2);

    let first = &records[0];
    assert_eq!(first.kind, "if");
    assert_eq!(first.line, 1);
    assert_eq!(first.condition, Some("user"));
    assert_eq!(first.children.len(), 1);
    assert_eq!(first.children[0].kind, "for");
    assert_eq!(first.children[0].line, 2);
    assert_eq!(first.children[0].condition, Some("item in user.items"));

    let second = &records[1];
    assert_eq!(second.kind, "else");
    assert_eq!(second.line, 5);
    assert_eq!(second.condition, None);
    assert!(second.children.is_empty());
}

#[test]
fn test_outline_json_omits_condition_for_else() {
    let result = Parser::new().parse("{% if a %}\n{% else %}\n{% endif %}");
    let value = serde_json::to_value(outline(&result.forest)).unwrap();

    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 2);

    let first = records[0].as_object().unwrap();
    assert_eq!(first["type"], "if");
    assert_eq!(first["line"], 1);
    assert_eq!(first["condition"], "a");
    assert!(first["children"].as_array().unwrap().is_empty());

    let second = records[1].as_object().unwrap();
    assert_eq!(second["type"], "else");
    assert!(!second.contains_key("condition"));
}

#[test]
fn test_outline_keeps_empty_captured_condition() {
    let result = Parser::new().parse("{% if %}\n{% endif %}");
    let value = serde_json::to_value(outline(&result.forest)).unwrap();

    let first = value.as_array().unwrap()[0].as_object().unwrap();
    assert_eq!(first["condition"], "");
}

#[test]
fn test_outline_of_empty_forest_is_empty() {
    let result = Parser::new().parse("no tags here");
    assert!(outline(&result.forest).is_empty());
}

// ============================================================================
// Diagram Projection Tests
// ============================================================================

#[test]
fn test_diagram_exact_rendering() {
    let input = "{% if a %}\n{% for x in y %}\n{% endfor %}\n{% endif %}\n{% if b %}\n{% endif %}";
    let result = Parser::new().parse(input);

    let expected = concat!(
        "flowchart TD\n",
        "    n0{\"if a\"}\n",
        "    n0_0([\"for x in y\"])\n",
        "    n1{\"if b\"}\n",
        "    n0 -->|0| n0_0\n",
    );
    assert_eq!(diagram(&result.forest), expected);
}

#[test]
fn test_diagram_starts_with_direction_declaration() {
    let result = Parser::new().parse(NESTED_SAMPLE);
    let text = diagram(&result.forest);
    assert_eq!(text.lines().next(), Some("flowchart TD"));
}

#[test]
fn test_diagram_one_vertex_per_node_one_edge_per_link() {
    let result = Parser::new().parse(NESTED_SAMPLE);
    let text = diagram(&result.forest);

    let vertex_lines = text
        .lines()
        .filter(|l| !l.starts_with("flowchart") && !l.contains("-->"))
        .count();
    let edge_lines = text.lines().filter(|l| l.contains("-->")).count();

    let node_count = result.forest.node_count();
    let link_count: usize = result
        .forest
        .iter()
        .map(|id| result.forest.get(id).children.len())
        .sum();

    assert_eq!(vertex_lines, node_count);
    assert_eq!(edge_lines, link_count);
}

#[test]
fn test_diagram_ids_derive_from_path_position() {
    let input = "{% if a %}\n{% if b %}\n{% endif %}\n{% if c %}\n{% endif %}\n{% endif %}";
    let result = Parser::new().parse(input);
    let text = diagram(&result.forest);

    assert!(text.contains("n0{\"if a\"}"));
    assert!(text.contains("n0_0{\"if b\"}"));
    assert!(text.contains("n0_1{\"if c\"}"));
    assert!(text.contains("n0 -->|0| n0_0"));
    assert!(text.contains("n0 -->|1| n0_1"));
}

#[test]
fn test_diagram_loop_and_conditional_shapes_differ() {
    let result = Parser::new().parse(NESTED_SAMPLE);
    let text = diagram(&result.forest);

    assert!(text.contains("n0{\"if user\"}"));
    assert!(text.contains("n0_0([\"for item in user.items\"])"));
    assert!(text.contains("n1{\"else\"}"));
}

#[test]
fn test_diagram_escapes_quotes_in_labels() {
    let result = Parser::new().parse("{% if x == \"y\" %}\n{% endif %}");
    let text = diagram(&result.forest);

    assert!(text.contains("n0{\"if x == #quot;y#quot;\"}"));
}

#[test]
fn test_diagram_is_deterministic() {
    let first = diagram(&Parser::new().parse(NESTED_SAMPLE).forest);
    let second = diagram(&Parser::new().parse(NESTED_SAMPLE).forest);
    assert_eq!(first, second);
}

#[test]
fn test_diagram_of_empty_forest_is_header_only() {
    let result = Parser::new().parse("just text");
    assert_eq!(diagram(&result.forest), "flowchart TD\n");
}
