//! Shared numeric constants for the survey crate.

// ── Selector geometry (view-box units) ──────────────────────────

/// Width and height of the square SVG view box.
pub const VIEWBOX_SIZE: f64 = 600.0;

/// Centre of the dial on both axes.
pub const CENTER: f64 = VIEWBOX_SIZE / 2.0;

/// Outer radius of the region annulus.
pub const RADIUS_OUTER: f64 = 280.0;

/// Inner radius of the region annulus; the item card sits inside it.
pub const RADIUS_INNER: f64 = 110.0;

/// Extra inset applied to the inner edge of drawn slices.
pub const INNER_PADDING: f64 = 4.0;

/// Angular gap trimmed from each side of a drawn slice, in degrees.
///
/// Hit-testing always uses the full tiling span.
pub const SECTOR_GAP_DEG: f64 = 2.0;

// ── Selector visuals ────────────────────────────────────────────

/// Scale of the hovered slice.
pub const HOVER_SCALE: f64 = 1.15;

/// Scale of the committed slice while it fades out.
pub const CHOSEN_SCALE: f64 = 0.95;

/// Opacity of slices that were not chosen during a commit.
pub const DIMMED_OPACITY: f64 = 0.3;

// ── Timing ──────────────────────────────────────────────────────

/// Length of the exit transition after a commit, in milliseconds.
pub const COMMIT_TRANSITION_MS: u32 = 250;

/// Full circle in degrees.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Tolerance used when comparing accumulated angle sums.
pub const ANGLE_EPSILON: f64 = 1e-9;
