#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn sample_node(id: &str, kind: NodeKind) -> Node {
    Node {
        id: id.to_owned(),
        kind,
        title: "t".to_owned(),
        fields: vec![Field {
            key: "k".to_owned(),
            handle_id: handle_id(id, "k"),
            display_value: "v".to_owned(),
            value_type: ValueKind::String,
            connectable: false,
        }],
        badge: String::new(),
        position: Position::new(1.0, 2.0),
        height: node_height(1),
        depth: 0,
        selected: false,
        measured: None,
    }
}

// =============================================================
// Identifiers
// =============================================================

#[test]
fn handle_id_joins_node_and_key() {
    assert_eq!(handle_id("12", "name"), "12-key-name");
}

#[test]
fn handle_id_distinguishes_dashed_keys() {
    assert_ne!(handle_id("1", "2-key-a"), handle_id("12", "a"));
    assert_ne!(handle_id("1", "a-key-b"), handle_id("1", "a"));
}

#[test]
fn edge_id_joins_source_handle_target() {
    assert_eq!(edge_id("0", "0-key-b", "3"), "edge-0-0-key-b-3");
}

#[test]
fn edge_new_fills_all_fields() {
    let edge = Edge::new("0", "0-key-b", "3");
    assert_eq!(edge.id, "edge-0-0-key-b-3");
    assert_eq!(edge.source, "0");
    assert_eq!(edge.target, "3");
    assert_eq!(edge.source_handle, "0-key-b");
    assert!(!edge.selected);
}

// =============================================================
// Heights
// =============================================================

#[test]
fn node_height_without_fields_is_base() {
    assert_eq!(node_height(0), 50.0);
}

#[test]
fn node_height_adds_padding_and_rows() {
    assert_eq!(node_height(1), 100.0);
    assert_eq!(node_height(4), 50.0 + 20.0 + 120.0);
}

// =============================================================
// Serde shape
// =============================================================

#[test]
fn node_kind_serializes_lowercase() {
    let cases = [
        (NodeKind::Root, "\"root\""),
        (NodeKind::Object, "\"object\""),
        (NodeKind::Array, "\"array\""),
        (NodeKind::Primitive, "\"primitive\""),
    ];
    for (kind, expected) in cases {
        assert_eq!(serde_json::to_string(&kind).unwrap(), expected);
    }
}

#[test]
fn field_uses_renderer_key_names() {
    let node = sample_node("4", NodeKind::Object);
    let value = serde_json::to_value(&node.fields[0]).unwrap();
    assert_eq!(
        value,
        json!({
            "key": "k",
            "handleId": "4-key-k",
            "value": "v",
            "type": "string",
            "connectable": false
        })
    );
}

#[test]
fn node_omits_selected_when_false() {
    let mut node = sample_node("4", NodeKind::Object);
    let value = serde_json::to_value(&node).unwrap();
    assert_eq!(value["type"], "object");
    assert_eq!(value["position"], json!({"x": 1.0, "y": 2.0}));
    assert!(value.get("selected").is_none());

    node.selected = true;
    let value = serde_json::to_value(&node).unwrap();
    assert_eq!(value["selected"], true);
}

#[test]
fn node_serializes_flat_with_kind_as_type() {
    let mut node = sample_node("3", NodeKind::Array);
    node.badge = "1 items".to_owned();
    let value = serde_json::to_value(&node).unwrap();
    assert_eq!(value["type"], "array");
    assert_eq!(value["title"], "t");
    assert_eq!(value["badge"], "1 items");
    assert_eq!(value["fields"][0]["handleId"], "3-key-k");
    assert!(value.get("data").is_none());
}

#[test]
fn edge_uses_source_handle_key() {
    let value = serde_json::to_value(Edge::new("0", "0-key-a", "1")).unwrap();
    assert_eq!(value["sourceHandle"], "0-key-a");
    assert!(value.get("selected").is_none());
}

#[test]
fn node_deserializes_without_selected() {
    let node = sample_node("9", NodeKind::Primitive);
    let mut value = serde_json::to_value(&node).unwrap();
    value.as_object_mut().unwrap().remove("selected");
    let back: Node = serde_json::from_value(value).unwrap();
    assert_eq!(back, node);
}

// =============================================================
// Graph helpers
// =============================================================

#[test]
fn graph_lookup_helpers() {
    let graph = Graph {
        nodes: vec![sample_node("0", NodeKind::Root), sample_node("1", NodeKind::Primitive)],
        edges: vec![Edge::new("0", "0-key-k", "1")],
        height: 100.0,
    };
    assert_eq!(graph.root().unwrap().id, "0");
    assert_eq!(graph.node("1").unwrap().kind, NodeKind::Primitive);
    assert!(graph.node("2").is_none());
    assert_eq!(graph.children_of_handle("0-key-k"), vec!["1"]);
    assert!(graph.children_of_handle("1-key-k").is_empty());
    assert_eq!(graph.nodes[0].field("0-key-k").unwrap().key, "k");
}

#[test]
fn empty_graph_has_no_root() {
    let graph = Graph::empty();
    assert!(graph.is_empty());
    assert!(graph.root().is_none());
    assert_eq!(graph.height, 0.0);
}
