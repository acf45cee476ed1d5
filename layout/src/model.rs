//! Diagram model: nodes, their field rows, and the edges between them.
//!
//! These are the records handed to the diagram surface. Field and edge names
//! follow React Flow conventions (`handleId`, `sourceHandle`), but nodes are
//! flat: `type` carries the [`NodeKind`] and the display data sits at the top
//! level, so a host wraps them into its renderer's node shape itself.
//!
//! The collection is rebuilt from scratch on every layout pass. The only
//! in-place mutation after that is render-only state (drag position,
//! selection, measured size) merged in by [`crate::changes`].

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

use crate::consts::{BASE_NODE_HEIGHT, FIELD_ROW_HEIGHT, HEADER_PADDING};
use crate::value::ValueKind;

/// Top-left placement of a node in diagram space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rendered box size measured by the diagram surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// What a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// The single depth-0 node, whatever its JSON kind.
    Root,
    /// An object, either under an object field or as an array element.
    Object,
    /// An array that needs its own box: a nested array element, or a
    /// collapsed array past the depth guard. Array-backed nodes (including an
    /// array root) are badged `"{n} items"` rather than `"{n} keys"`.
    Array,
    /// A scalar array element.
    Primitive,
}

/// One displayed row inside a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Property name, array index, or `"value"` for a primitive element.
    pub key: String,
    /// Diagram-wide unique attachment point for this row's outgoing edges.
    pub handle_id: String,
    /// Truncated summary of the underlying value.
    #[serde(rename = "value")]
    pub display_value: String,
    #[serde(rename = "type")]
    pub value_type: ValueKind,
    /// True when the value has children laid out as further nodes.
    pub connectable: bool,
}

/// One visual box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub title: String,
    pub fields: Vec<Field>,
    /// Summary label such as `"3 keys"`; empty when not applicable.
    pub badge: String,
    pub position: Position,
    /// Height of this node's own box (not its subtree).
    pub height: f64,
    /// Column index; `position.x` is derived from it.
    pub depth: usize,
    /// Render-only selection flag set by the diagram surface.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,
    /// Size the surface actually rendered, once it has reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measured: Option<Size>,
}

impl Node {
    /// Look up a field by its handle id.
    #[must_use]
    pub fn field(&self, handle_id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.handle_id == handle_id)
    }
}

/// One containment link from a parent field to a child node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub source_handle: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,
}

impl Edge {
    /// Build an edge from `source`'s `handle` to `target`, deriving its id.
    #[must_use]
    pub fn new(source: &str, handle: &str, target: &str) -> Self {
        Self {
            id: edge_id(source, handle, target),
            source: source.to_owned(),
            target: target.to_owned(),
            source_handle: handle.to_owned(),
            selected: false,
        }
    }
}

/// Output of a layout pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    /// Total vertical extent of the diagram, used for centering.
    pub height: f64,
}

impl Graph {
    /// An empty diagram.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// The depth-0 node, if any.
    #[must_use]
    pub fn root(&self) -> Option<&Node> {
        self.nodes.iter().find(|n| n.kind == NodeKind::Root)
    }

    /// Child node ids reached from `handle_id`, in placement order.
    #[must_use]
    pub fn children_of_handle(&self, handle_id: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.source_handle == handle_id)
            .map(|e| e.target.as_str())
            .collect()
    }
}

/// Handle id for the field `key` of node `node_id`.
///
/// Node ids are plain decimal counters, so the `"{id}-key-"` prefix cannot be
/// produced by any other node.
#[must_use]
pub fn handle_id(node_id: &str, key: &str) -> String {
    format!("{node_id}-key-{key}")
}

/// Edge id for a link from `handle` on `source` to `target`.
#[must_use]
pub fn edge_id(source: &str, handle: &str, target: &str) -> String {
    format!("edge-{source}-{handle}-{target}")
}

/// Height of a node box holding `field_count` rows.
#[must_use]
pub fn node_height(field_count: usize) -> f64 {
    if field_count == 0 {
        return BASE_NODE_HEIGHT;
    }
    #[allow(clippy::cast_precision_loss)]
    let rows = field_count as f64 * FIELD_ROW_HEIGHT;
    BASE_NODE_HEIGHT + HEADER_PADDING + rows
}
