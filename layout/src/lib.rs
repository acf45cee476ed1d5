//! JSON-to-diagram layout engine.
//!
//! This crate turns a parsed JSON document into a node-and-edge diagram. Every
//! object becomes a box listing its fields, containment becomes a directed edge
//! from the owning field's handle to the child box, and boxes are placed
//! left-to-right by nesting depth and stacked top-to-bottom so that sibling
//! subtrees never overlap. It has no knowledge of editing, timing, or
//! rendering; the host feeds it a [`serde_json::Value`] and a viewport height
//! and gets back a complete [`model::Graph`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Recursive traversal, height propagation, and centering |
//! | [`model`] | Node, field, and edge records handed to the diagram surface |
//! | [`value`] | JSON value classification and display formatting |
//! | [`changes`] | Position/selection deltas reported back by the diagram surface |
//! | [`consts`] | Shared geometric constants (spacing, row heights, limits) |

pub mod changes;
pub mod consts;
pub mod engine;
pub mod model;
pub mod value;

pub use changes::{EdgeChange, NodeChange, apply_edge_changes, apply_node_changes};
pub use engine::{LayoutOptions, layout, layout_with};
pub use model::{Edge, Field, Graph, Node, NodeKind, Position, Size};
pub use value::{ValueKind, classify, format_value};
