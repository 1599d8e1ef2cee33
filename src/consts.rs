//! Shared constants for the scene framework.

// ── Layers & effects ────────────────────────────────────────────

/// Reserved layer value that requests the glow effect for an object.
pub const GLOW_LAYER: i32 = -1;

/// CSS filter string applied while drawing glow-layer objects.
pub const GLOW_FILTER: &str = "blur(4px)";

/// CSS filter string that disables all effects.
pub const FILTER_NONE: &str = "none";

// ── Viewport ────────────────────────────────────────────────────

/// Fill style for the letterbox/pillarbox bars.
pub const LETTERBOX_FILL: &str = "black";

/// Sentinel meaning logical-coordinate mapping is disabled.
pub const COORDS_DISABLED: f64 = -1.0;
