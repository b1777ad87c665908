//! Shared numeric constants for the range seek bar.

// ── Range ───────────────────────────────────────────────────────

/// Lower bound used until the host configures a range.
pub const DEFAULT_MINIMUM: i32 = 0;

/// Upper bound used until the host configures a range.
pub const DEFAULT_MAXIMUM: i32 = 100;

/// Selected values are rounded to this many decimal places.
pub const VALUE_DECIMAL_PLACES: i32 = 2;

// ── Geometry ────────────────────────────────────────────────────

/// Default thumb width in pixels.
pub const DEFAULT_THUMB_WIDTH_PX: f64 = 24.0;

/// Default thumb height in pixels.
pub const DEFAULT_THUMB_HEIGHT_PX: f64 = 24.0;

/// Extra track padding on each side, added to the thumb half-width.
pub const DEFAULT_INITIAL_PADDING_PX: f64 = 0.0;

/// Horizontal travel a pointer must exceed before a press becomes a drag.
pub const DEFAULT_TOUCH_SLOP_PX: f64 = 8.0;

/// Fraction of the view width separating "pick min" from "pick max" when both
/// thumbs are under the pointer.
pub const OVERLAP_SPLIT: f64 = 0.5;
