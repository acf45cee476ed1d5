//! Edit-to-layout pipeline for the JSON diagram viewer.
//!
//! The editing surface reports raw text, the pipeline debounces it, parses it,
//! runs the [`layout`] engine, and publishes complete node/edge snapshots for
//! the diagram surface. The diagram surface reports drags and selections back,
//! which are merged into the current snapshot until the next layout pass.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`pipeline`] | Debouncing worker task and the [`pipeline::PipelineHandle`] surfaces talk to |
//! | [`state`] | Synchronous pipeline core and the published [`state::Snapshot`] |
//! | [`config`] | Environment-driven configuration |
//! | [`error`] | Pipeline error type and the user-facing parse error message |

pub mod config;
pub mod error;
pub mod pipeline;
pub mod state;

pub use config::PipelineConfig;
pub use error::{INVALID_JSON_MESSAGE, PipelineError};
pub use pipeline::{PipelineHandle, spawn_pipeline};
pub use state::{PipelineCore, Snapshot};

/// Document shown in the editor on first load.
pub const SAMPLE_DOCUMENT: &str = include_str!("sample.json");
