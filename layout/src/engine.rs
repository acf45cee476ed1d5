//! Layout engine: converts a parsed JSON value into diagram nodes and edges.
//!
//! DESIGN
//! ======
//! A single depth-first pass does three things at once: it materializes a node
//! for every object (and every array element), emits one edge per placed
//! child, and returns the vertical extent of each subtree so the caller can
//! advance its running offset past it. Columns are fixed (`x = depth *
//! horizontal_spacing`); rows are assigned by stacking sibling subtrees one
//! after another, which is what keeps them from overlapping.
//!
//! Arrays never get a box of their own when they hang off a field. Each element
//! becomes its own node wired straight to the field's handle.
//!
//! Positions are computed relative to y = 0. A final centering pass shifts the
//! whole diagram so it sits in the middle of the viewport.
//!
//! All mutable bookkeeping (id counter, output lists) lives in [`Traversal`],
//! so a layout pass is a pure function of its inputs.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde_json::Value;

use crate::consts::{
    BASE_NODE_HEIGHT, DEFAULT_MAX_DEPTH, HORIZONTAL_SPACING, MIN_CHILD_HEIGHT, PRIMITIVE_FIELD_KEY,
    PRIMITIVE_NODE_HEIGHT, ROOT_TITLE, TOO_DEEP_BADGE, VERTICAL_SPACING,
};
use crate::model::{Edge, Field, Graph, Node, NodeKind, Position, handle_id, node_height};
use crate::value::{ValueKind, classify, format_value};

/// Tuning knobs for a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Distance between depth columns.
    pub horizontal_spacing: f64,
    /// Gap between stacked sibling subtrees.
    pub vertical_spacing: f64,
    /// Deepest column a container is expanded into. Containers that would
    /// land further right are collapsed into a single "too deep" node.
    pub max_depth: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            horizontal_spacing: HORIZONTAL_SPACING,
            vertical_spacing: VERTICAL_SPACING,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Lay out `root` with default options and center it in `viewport_height`.
#[must_use]
pub fn layout(root: &Value, viewport_height: f64) -> Graph {
    layout_with(root, viewport_height, &LayoutOptions::default())
}

/// Lay out `root` with explicit options and center it in `viewport_height`.
#[must_use]
pub fn layout_with(root: &Value, viewport_height: f64, options: &LayoutOptions) -> Graph {
    let mut traversal = Traversal::new(options);
    let height = traversal.place_keyed(root, None, NodeKind::Root, ROOT_TITLE.to_owned(), 0, 0.0);
    let mut graph = Graph { nodes: traversal.nodes, edges: traversal.edges, height };
    center(&mut graph, viewport_height);
    graph
}

/// Shift every node so the diagram's vertical extent is centered in the viewport.
fn center(graph: &mut Graph, viewport_height: f64) {
    let offset = (viewport_height - graph.height) / 2.0;
    for node in &mut graph.nodes {
        if node.kind == NodeKind::Root {
            node.position.y = offset;
        } else {
            node.position.y += offset;
        }
    }
}

/// Where a child subtree attaches: the parent node and the field handle on it.
#[derive(Clone, Copy)]
struct Attach<'a> {
    node_id: &'a str,
    handle: &'a str,
}

/// Accumulator threaded through one layout pass.
struct Traversal<'o> {
    options: &'o LayoutOptions,
    next_id: u64,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl<'o> Traversal<'o> {
    fn new(options: &'o LayoutOptions) -> Self {
        Self { options, next_id: 0, nodes: Vec::new(), edges: Vec::new() }
    }

    fn alloc_id(&mut self) -> String {
        let id = self.next_id.to_string();
        self.next_id += 1;
        id
    }

    fn column_x(&self, depth: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let column = depth as f64;
        column * self.options.horizontal_spacing
    }

    fn connect(&mut self, parent: Option<Attach<'_>>, child_id: &str) {
        if let Some(parent) = parent {
            self.edges.push(Edge::new(parent.node_id, parent.handle, child_id));
        }
    }

    /// Place a node listing `value`'s entries as fields, then lay out every
    /// container entry as a subtree one column to the right.
    ///
    /// Objects list their keys; arrays list their indices; scalars get no
    /// fields. Returns the subtree height: at least the node's own box, or
    /// the stacked children if they need more room.
    fn place_keyed(
        &mut self,
        value: &Value,
        parent: Option<Attach<'_>>,
        kind: NodeKind,
        title: String,
        depth: usize,
        y: f64,
    ) -> f64 {
        let id = self.alloc_id();
        let children = entries(value);

        let fields: Vec<Field> = children
            .iter()
            .map(|(key, child)| {
                let value_type = classify(child);
                Field {
                    key: key.clone(),
                    handle_id: handle_id(&id, key),
                    display_value: format_value(child),
                    value_type,
                    connectable: value_type.is_container(),
                }
            })
            .collect();

        let badge = match value {
            Value::Object(map) => format!("{} keys", map.len()),
            Value::Array(items) => format!("{} items", items.len()),
            _ => String::new(),
        };
        let own_height = node_height(fields.len());

        self.nodes.push(Node {
            id: id.clone(),
            kind,
            title,
            fields: fields.clone(),
            badge,
            position: Position::new(self.column_x(depth), y),
            height: own_height,
            depth,
            selected: false,
            measured: None,
        });
        self.connect(parent, &id);

        let spacing = self.options.vertical_spacing;
        let mut offset = 0.0;
        for (field, (key, child)) in fields.iter().zip(&children) {
            if !field.connectable {
                continue;
            }
            let attach = Attach { node_id: &id, handle: &field.handle_id };
            let child_height = self.place_child(child, attach, key, depth + 1, y + offset);
            offset += child_height.max(MIN_CHILD_HEIGHT) + spacing;
        }

        let children_height = if offset > 0.0 { offset - spacing } else { 0.0 };
        own_height.max(children_height)
    }

    /// Lay out the value behind a connectable field.
    fn place_child(&mut self, value: &Value, parent: Attach<'_>, key: &str, depth: usize, y: f64) -> f64 {
        if depth > self.options.max_depth && classify(value).is_container() {
            return self.place_collapsed(value, parent, key, depth, y);
        }
        match value {
            Value::Object(_) => self.place_keyed(value, Some(parent), NodeKind::Object, key.to_owned(), depth, y),
            Value::Array(items) => self.place_elements(items, parent, key, depth, y),
            _ => self.place_primitive(value, parent, key.to_owned(), depth, y),
        }
    }

    /// Stack every array element as its own node, each wired to `parent`.
    fn place_elements(&mut self, items: &[Value], parent: Attach<'_>, key: &str, depth: usize, y: f64) -> f64 {
        let spacing = self.options.vertical_spacing;
        let mut offset = 0.0;
        for (index, item) in items.iter().enumerate() {
            let title = format!("{key}[{index}]");
            let item_y = y + offset;
            let item_height = match classify(item) {
                ValueKind::Object => self.place_keyed(item, Some(parent), NodeKind::Object, title, depth, item_y),
                ValueKind::Array => self.place_keyed(item, Some(parent), NodeKind::Array, title, depth, item_y),
                _ => self.place_primitive(item, parent, title, depth, item_y),
            };
            offset += item_height + spacing;
        }
        if items.is_empty() { 0.0 } else { offset - spacing }
    }

    /// A one-field node for a scalar array element.
    fn place_primitive(&mut self, value: &Value, parent: Attach<'_>, title: String, depth: usize, y: f64) -> f64 {
        let id = self.alloc_id();
        let field = Field {
            key: PRIMITIVE_FIELD_KEY.to_owned(),
            handle_id: handle_id(&id, PRIMITIVE_FIELD_KEY),
            display_value: format_value(value),
            value_type: classify(value),
            connectable: false,
        };
        self.nodes.push(Node {
            id: id.clone(),
            kind: NodeKind::Primitive,
            title,
            fields: vec![field],
            badge: String::new(),
            position: Position::new(self.column_x(depth), y),
            height: node_height(1),
            depth,
            selected: false,
            measured: None,
        });
        self.connect(Some(parent), &id);
        // The box overhangs its slot; tight spacing must still clear it.
        PRIMITIVE_NODE_HEIGHT.max(node_height(1) - self.options.vertical_spacing)
    }

    /// A field-less stand-in for a container past the depth guard.
    fn place_collapsed(&mut self, value: &Value, parent: Attach<'_>, key: &str, depth: usize, y: f64) -> f64 {
        let id = self.alloc_id();
        let kind = if value.is_array() { NodeKind::Array } else { NodeKind::Object };
        self.nodes.push(Node {
            id: id.clone(),
            kind,
            title: key.to_owned(),
            fields: Vec::new(),
            badge: TOO_DEEP_BADGE.to_owned(),
            position: Position::new(self.column_x(depth), y),
            height: BASE_NODE_HEIGHT,
            depth,
            selected: false,
            measured: None,
        });
        self.connect(Some(parent), &id);
        BASE_NODE_HEIGHT
    }
}

/// Entries shown as fields: object keys in insertion order, or array indices.
fn entries(value: &Value) -> Vec<(String, &Value)> {
    match value {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        Value::Array(items) => items.iter().enumerate().map(|(i, v)| (i.to_string(), v)).collect(),
        _ => Vec::new(),
    }
}
