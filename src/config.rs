//! Pipeline configuration parsed from environment variables.

use std::time::Duration;

use layout::LayoutOptions;
use layout::consts::{DEFAULT_MAX_DEPTH, DEFAULT_VIEWPORT_HEIGHT, HORIZONTAL_SPACING, VERTICAL_SPACING};

pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_COMMAND_QUEUE_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Quiet interval the input text must hold before a layout pass runs.
    pub debounce: Duration,
    /// Viewport height used until the host reports a resize.
    pub viewport_height: f64,
    /// Bounded capacity of the worker's event queue.
    pub command_queue_capacity: usize,
    pub layout: LayoutOptions,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            command_queue_capacity: DEFAULT_COMMAND_QUEUE_CAPACITY,
            layout: LayoutOptions::default(),
        }
    }
}

impl PipelineConfig {
    /// Build typed config from environment variables.
    ///
    /// All optional; missing, unparseable, or non-positive values fall back
    /// to the defaults:
    /// - `JSONFLOW_DEBOUNCE_MS`: default 500
    /// - `JSONFLOW_VIEWPORT_HEIGHT`: default 600
    /// - `JSONFLOW_COMMAND_QUEUE_CAPACITY`: default 256
    /// - `JSONFLOW_MAX_DEPTH`: default 64
    /// - `JSONFLOW_HORIZONTAL_SPACING`: default 350
    /// - `JSONFLOW_VERTICAL_SPACING`: default 50
    #[must_use]
    pub fn from_env() -> Self {
        let debounce_ms = env_parse("JSONFLOW_DEBOUNCE_MS", DEFAULT_DEBOUNCE_MS);
        Self {
            debounce: Duration::from_millis(debounce_ms),
            viewport_height: env_parse_positive("JSONFLOW_VIEWPORT_HEIGHT", DEFAULT_VIEWPORT_HEIGHT),
            command_queue_capacity: env_parse("JSONFLOW_COMMAND_QUEUE_CAPACITY", DEFAULT_COMMAND_QUEUE_CAPACITY)
                .max(1),
            layout: LayoutOptions {
                horizontal_spacing: env_parse_positive("JSONFLOW_HORIZONTAL_SPACING", HORIZONTAL_SPACING),
                vertical_spacing: env_parse_positive("JSONFLOW_VERTICAL_SPACING", VERTICAL_SPACING),
                max_depth: env_parse("JSONFLOW_MAX_DEPTH", DEFAULT_MAX_DEPTH),
            },
        }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn env_parse_positive(key: &str, default: f64) -> f64 {
    let value = env_parse(key, default);
    if value.is_finite() && value > 0.0 { value } else { default }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
