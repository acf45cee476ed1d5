//! Edit-to-layout pipeline: debounced recomputation on a single worker task.
//!
//! DESIGN
//! ======
//! One tokio task owns the [`PipelineCore`]. Surfaces talk to it through a
//! cloneable [`PipelineHandle`] that feeds a bounded command queue. Edits
//! update the held text immediately and (re)arm a single debounce deadline;
//! a layout pass only runs once the text has been quiet for the configured
//! interval. Because there is one deadline, there is never more than one
//! pending recomputation, and a new edit always supersedes the old one.
//!
//! Results are published on a `watch` channel as `Arc<Snapshot>`, so readers
//! always see a complete snapshot and never a half-built graph.
//!
//! SHUTDOWN
//! ========
//! When the last handle is dropped the queue closes. A pending deadline is
//! flushed before the task exits so the final text is never lost.

use std::sync::Arc;
use std::time::Duration;

use layout::changes::{EdgeChange, NodeChange};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::state::{Outcome, PipelineCore, Snapshot};

/// Events accepted by the worker.
#[derive(Debug)]
enum Command {
    Edit(String),
    Resize(f64),
    NodesChanged(Vec<NodeChange>),
    EdgesChanged(Vec<EdgeChange>),
}

/// Cloneable entry point for the editing and diagram surfaces.
#[derive(Clone)]
pub struct PipelineHandle {
    tx: mpsc::Sender<Command>,
    snapshots: watch::Receiver<Arc<Snapshot>>,
}

impl PipelineHandle {
    /// Report the editor's full current text.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Closed`] if the worker has stopped.
    pub async fn edit(&self, text: impl Into<String>) -> Result<(), PipelineError> {
        self.send(Command::Edit(text.into())).await
    }

    /// Report a new viewport height, used from the next layout pass on.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Closed`] if the worker has stopped.
    pub async fn resize(&self, height: f64) -> Result<(), PipelineError> {
        self.send(Command::Resize(height)).await
    }

    /// Forward node deltas from the diagram surface. Applied without debounce.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Closed`] if the worker has stopped.
    pub async fn nodes_changed(&self, changes: Vec<NodeChange>) -> Result<(), PipelineError> {
        self.send(Command::NodesChanged(changes)).await
    }

    /// Forward edge deltas from the diagram surface. Applied without debounce.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Closed`] if the worker has stopped.
    pub async fn edges_changed(&self, changes: Vec<EdgeChange>) -> Result<(), PipelineError> {
        self.send(Command::EdgesChanged(changes)).await
    }

    /// A receiver that wakes on every published snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<Snapshot>> {
        self.snapshots.clone()
    }

    /// The most recently published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshots.borrow())
    }

    async fn send(&self, command: Command) -> Result<(), PipelineError> {
        self.tx.send(command).await.map_err(|_| PipelineError::Closed)
    }
}

/// Spawn the pipeline worker. Returns its handle and the task handle.
#[must_use]
pub fn spawn_pipeline(config: &PipelineConfig) -> (PipelineHandle, JoinHandle<()>) {
    let (tx, rx) = mpsc::channel(config.command_queue_capacity);
    let core = PipelineCore::new(config.layout, config.viewport_height);
    let (snapshot_tx, snapshot_rx) = watch::channel(Arc::new(core.snapshot()));

    info!(
        debounce_ms = config.debounce.as_millis(),
        viewport_height = config.viewport_height,
        queue_capacity = config.command_queue_capacity,
        max_depth = config.layout.max_depth,
        "layout pipeline configured"
    );

    let task = tokio::spawn(run(core, rx, snapshot_tx, config.debounce));
    (PipelineHandle { tx, snapshots: snapshot_rx }, task)
}

async fn run(
    mut core: PipelineCore,
    mut rx: mpsc::Receiver<Command>,
    snapshots: watch::Sender<Arc<Snapshot>>,
    debounce: Duration,
) {
    let mut deadline: Option<Instant> = None;

    loop {
        tokio::select! {
            maybe_command = rx.recv() => {
                let Some(command) = maybe_command else {
                    if deadline.take().is_some() {
                        recompute_and_publish(&mut core, &snapshots);
                    }
                    break;
                };
                match command {
                    Command::Edit(text) => {
                        debug!(len = text.len(), "text edited; debounce restarted");
                        core.set_text(text);
                        deadline = Some(Instant::now() + debounce);
                    }
                    Command::Resize(height) => {
                        core.set_viewport_height(height);
                    }
                    Command::NodesChanged(changes) => {
                        if core.apply_node_changes(&changes) > 0 {
                            publish(&core, &snapshots);
                        }
                    }
                    Command::EdgesChanged(changes) => {
                        if core.apply_edge_changes(&changes) > 0 {
                            publish(&core, &snapshots);
                        }
                    }
                }
            }
            () = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                deadline = None;
                recompute_and_publish(&mut core, &snapshots);
            }
        }
    }

    debug!("layout pipeline stopped");
}

fn recompute_and_publish(core: &mut PipelineCore, snapshots: &watch::Sender<Arc<Snapshot>>) {
    let started = std::time::Instant::now();
    match core.recompute() {
        Outcome::Cleared => debug!("blank input; diagram cleared"),
        Outcome::Laid { nodes, edges } => {
            info!(nodes, edges, elapsed_us = started.elapsed().as_micros(), "diagram laid out");
        }
        Outcome::Malformed => info!("input is not valid JSON; keeping previous diagram"),
    }
    publish(core, snapshots);
}

fn publish(core: &PipelineCore, snapshots: &watch::Sender<Arc<Snapshot>>) {
    snapshots.send_replace(Arc::new(core.snapshot()));
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
