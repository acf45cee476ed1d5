//! Render-only deltas reported back by the diagram surface.
//!
//! The surface emits generic "nodes changed" / "edges changed" notifications
//! while the user drags, selects, or deletes things. They are merged into the
//! current [`Graph`] so the next render reflects them, and are thrown away by
//! the next layout pass; the engine never reads them back.

#[cfg(test)]
#[path = "changes_test.rs"]
mod changes_test;

use serde::{Deserialize, Serialize};

use crate::model::{Graph, Position, Size};

/// A single node delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeChange {
    /// Node moved (or a drag started/ended without a new position).
    Position {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<Position>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dragging: Option<bool>,
    },
    /// Surface measured the rendered box.
    Dimensions {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dimensions: Option<Size>,
    },
    /// Selection toggled.
    Select { id: String, selected: bool },
    /// Node deleted from the current render.
    Remove { id: String },
}

impl NodeChange {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Position { id, .. }
            | Self::Dimensions { id, .. }
            | Self::Select { id, .. }
            | Self::Remove { id } => id,
        }
    }
}

/// A single edge delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EdgeChange {
    Select { id: String, selected: bool },
    Remove { id: String },
}

impl EdgeChange {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Select { id, .. } | Self::Remove { id } => id,
        }
    }
}

/// Merge node deltas into `graph`. Returns how many changes matched a node.
///
/// Unknown ids are skipped. Removing a node also drops every edge touching it.
pub fn apply_node_changes(graph: &mut Graph, changes: &[NodeChange]) -> usize {
    let mut applied = 0;
    for change in changes {
        let Some(index) = graph.nodes.iter().position(|n| n.id == change.id()) else {
            continue;
        };
        applied += 1;
        match change {
            NodeChange::Position { position, .. } => {
                if let Some(position) = position {
                    graph.nodes[index].position = *position;
                }
            }
            NodeChange::Dimensions { dimensions, .. } => {
                if let Some(size) = dimensions {
                    graph.nodes[index].measured = Some(*size);
                }
            }
            NodeChange::Select { selected, .. } => {
                graph.nodes[index].selected = *selected;
            }
            NodeChange::Remove { id } => {
                graph.nodes.remove(index);
                graph.edges.retain(|e| e.source != *id && e.target != *id);
            }
        }
    }
    applied
}

/// Merge edge deltas into `graph`. Returns how many changes matched an edge.
pub fn apply_edge_changes(graph: &mut Graph, changes: &[EdgeChange]) -> usize {
    let mut applied = 0;
    for change in changes {
        let Some(index) = graph.edges.iter().position(|e| e.id == change.id()) else {
            continue;
        };
        applied += 1;
        match change {
            EdgeChange::Select { selected, .. } => {
                graph.edges[index].selected = *selected;
            }
            EdgeChange::Remove { .. } => {
                graph.edges.remove(index);
            }
        }
    }
    applied
}
