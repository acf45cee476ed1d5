//! Pipeline state: the current text and the published diagram.
//!
//! DESIGN
//! ======
//! `PipelineCore` is the synchronous half of the edit-to-layout pipeline. It
//! holds the raw editor text, the viewport height, and the graph currently
//! shown to the rendering surfaces. It has no notion of time; the async
//! worker in [`crate::pipeline`] decides *when* to call [`PipelineCore::recompute`].
//!
//! ERROR HANDLING
//! ==============
//! A parse failure never clears the graph. The last good diagram stays on
//! screen (or nothing, if no parse has ever succeeded) with the error banner
//! set. The next successful parse clears the banner and replaces the graph
//! wholesale.

use layout::changes::{EdgeChange, NodeChange, apply_edge_changes, apply_node_changes};
use layout::{Edge, Graph, LayoutOptions, Node};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ErrorCode, PipelineError};

// =============================================================================
// SNAPSHOT
// =============================================================================

/// What the rendering surfaces observe. Always replaced as a whole.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Bumped on every publish so subscribers can tell snapshots apart.
    pub revision: u64,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    /// Banner text while the input is malformed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// How a recompute ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Blank input; graph and error cleared.
    Cleared,
    /// Parsed and laid out.
    Laid { nodes: usize, edges: usize },
    /// Parse failed; previous graph kept.
    Malformed,
}

// =============================================================================
// PIPELINE CORE
// =============================================================================

pub struct PipelineCore {
    text: String,
    viewport_height: f64,
    options: LayoutOptions,
    graph: Graph,
    error: Option<String>,
    revision: u64,
}

impl PipelineCore {
    #[must_use]
    pub fn new(options: LayoutOptions, viewport_height: f64) -> Self {
        Self { text: String::new(), viewport_height, options, graph: Graph::empty(), error: None, revision: 0 }
    }

    // --- Inputs ---

    /// Record the editor's latest text. Does not trigger a layout.
    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Record the viewport height used by the next layout pass.
    pub fn set_viewport_height(&mut self, height: f64) {
        if height.is_finite() && height > 0.0 {
            self.viewport_height = height;
        } else {
            warn!(height, "ignoring invalid viewport height");
        }
    }

    #[must_use]
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    // --- Layout ---

    /// Parse the current text and rebuild the graph.
    pub fn recompute(&mut self) -> Outcome {
        let outcome = match self.parse() {
            Ok(None) => {
                self.graph = Graph::empty();
                self.error = None;
                Outcome::Cleared
            }
            Ok(Some(value)) => {
                self.graph = layout::layout_with(&value, self.viewport_height, &self.options);
                self.error = None;
                Outcome::Laid { nodes: self.graph.nodes.len(), edges: self.graph.edges.len() }
            }
            Err(err) => {
                debug!(code = err.error_code(), error = ?err, "input did not parse");
                self.error = Some(err.to_string());
                Outcome::Malformed
            }
        };
        self.revision += 1;
        outcome
    }

    /// `Ok(None)` for blank input.
    fn parse(&self) -> Result<Option<serde_json::Value>, PipelineError> {
        if self.text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&self.text)?))
    }

    // --- Surface deltas ---

    /// Merge node deltas from the diagram surface into the current render.
    pub fn apply_node_changes(&mut self, changes: &[NodeChange]) -> usize {
        let applied = apply_node_changes(&mut self.graph, changes);
        if applied > 0 {
            self.revision += 1;
        }
        applied
    }

    /// Merge edge deltas from the diagram surface into the current render.
    pub fn apply_edge_changes(&mut self, changes: &[EdgeChange]) -> usize {
        let applied = apply_edge_changes(&mut self.graph, changes);
        if applied > 0 {
            self.revision += 1;
        }
        applied
    }

    // --- Outputs ---

    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            revision: self.revision,
            nodes: self.graph.nodes.clone(),
            edges: self.graph.edges.clone(),
            error: self.error.clone(),
        }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
