//! Shared constants for the placement engine.

// ── Placement ───────────────────────────────────────────────────

/// Cells right and down from the source at which duplicate search starts.
pub const DEFAULT_DUPLICATE_OFFSET: i32 = 1;

// ── Environment ─────────────────────────────────────────────────

/// Overrides [`DEFAULT_DUPLICATE_OFFSET`].
pub const ENV_DUPLICATE_OFFSET: &str = "BINPLAN_DUPLICATE_OFFSET";

/// Caps the spiral search radius below `max(grid_x, grid_y)`.
pub const ENV_MAX_SEARCH_RADIUS: &str = "BINPLAN_MAX_SEARCH_RADIUS";
