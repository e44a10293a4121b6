//! Shared constants for the songsheet renderer (all lengths in inches).

use crate::model::GUITAR_STRINGS;

// ── Page & spacing ──────────────────────────────────────────────────
pub(crate) const DEFAULT_PAGE_WIDTH: f64 = 8.5; // US Letter
pub(crate) const DEFAULT_PAGE_HEIGHT: f64 = 11.0;
/// Added on the right and bottom of every element, never on both sides.
pub(super) const PADDING: f64 = 0.25;
/// A column with less height than this left over is considered full.
pub(super) const MIN_COLUMN_SLACK: f64 = PADDING / 2.0;

// ── Line widths ─────────────────────────────────────────────────────
pub(super) const THICKER_LW: f64 = 0.017;
pub(super) const THIN_LW: f64 = 0.01;
pub(super) const THINISH_LW: f64 = 0.0075;
pub(super) const FINE_LW: f64 = 0.005;
pub(super) const FINEST_LW: f64 = 0.001;

/// Guitar string gauges drawn on chord charts, thick to thin.
pub(super) const STRING_THICKNESSES: [f64; GUITAR_STRINGS] =
    [0.0472, 0.0314, 0.0236, 0.0157, 0.0079, 0.0039];

// ── Text ────────────────────────────────────────────────────────────
pub(super) const FONT_FAMILY: &str = "courier";
/// Size of sub/superscripts relative to their root character.
pub(super) const SUBSUP_SIZE_MUL: f64 = 0.65;
/// Lyric size used when the song has no sine curve to fit against.
pub(super) const DEFAULT_LYRIC_FONT_PT: f64 = 12.0;

// ── Sine curves ─────────────────────────────────────────────────────
/// Horizontal step of the polyline approximating a curve.
pub(super) const CURVE_RESOLUTION: f64 = 0.01;
/// Along-axis text height relative to the amplitude.
pub(super) const AXIS_TEXT_MUL: f64 = 1.7;
pub(super) const SLIDE_STEP_HUMPS: f64 = 0.05;
pub(super) const SLIDE_START_ALPHA: f64 = 0.07;

// ── SVG output ──────────────────────────────────────────────────────
pub(super) const SVG_UNITS_PER_INCH: f64 = 72.0;
pub(super) const INK_COLOR: &str = "#1a1a1a";
