//! Shared numeric constants for the layout crate.

// ── Columns and stacking ────────────────────────────────────────

/// Horizontal distance between depth columns.
pub const HORIZONTAL_SPACING: f64 = 350.0;

/// Vertical gap left between stacked sibling subtrees.
pub const VERTICAL_SPACING: f64 = 50.0;

/// Smallest vertical slot reserved for a child subtree hanging off an object field.
pub const MIN_CHILD_HEIGHT: f64 = 60.0;

/// Fixed vertical slot for a primitive array element node.
pub const PRIMITIVE_NODE_HEIGHT: f64 = 80.0;

// ── Node box geometry ───────────────────────────────────────────

/// Height of a node with a header and no field rows.
pub const BASE_NODE_HEIGHT: f64 = 50.0;

/// Extra padding added once when a node has at least one field row.
pub const HEADER_PADDING: f64 = 20.0;

/// Height of a single field row.
pub const FIELD_ROW_HEIGHT: f64 = 30.0;

// ── Labels ──────────────────────────────────────────────────────

/// Strings longer than this many characters are truncated in field summaries.
pub const MAX_DISPLAY_CHARS: usize = 20;

/// Suffix appended to truncated strings.
pub const ELLIPSIS: &str = "...";

/// Title of the depth-0 node.
pub const ROOT_TITLE: &str = "Root";

/// Field key used for the synthetic row of a primitive array element.
pub const PRIMITIVE_FIELD_KEY: &str = "value";

/// Badge shown on containers collapsed by the depth guard.
pub const TOO_DEEP_BADGE: &str = "too deep";

// ── Limits ──────────────────────────────────────────────────────

/// Viewport height assumed when the host cannot report one.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 600.0;

/// Deepest column a container may be expanded into before it is collapsed.
pub const DEFAULT_MAX_DEPTH: usize = 64;
