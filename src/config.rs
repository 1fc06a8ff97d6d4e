//! Configuration constants and settings for the calculator.

use serde::{Deserialize, Serialize};

/// Sheet width in meters.
pub const SHEET_WIDTH: f64 = 2.45;

/// Sheet length in meters.
pub const SHEET_LENGTH: f64 = 6.0;

/// Floating-point comparison epsilon (meters).
pub const EPS: f64 = 1e-9;

/// Largest instance count accepted for one piece entry.
///
/// Every instance becomes a placed piece, so this keeps a single entry
/// from turning a recompute into billions of placements.
pub const MAX_PIECE_COUNT: u32 = 10_000;

/// Number of bins rendered by default before the "N more" note.
pub const DEFAULT_DISPLAY_CAP: usize = 3;

/// Upper bound on bin openings, as a multiple of the total instance count.
pub const SAFETY_CEILING_FACTOR: usize = 2;

/// Area of one sheet in square meters.
#[inline]
pub fn sheet_area() -> f64 {
    SHEET_WIDTH * SHEET_LENGTH
}

/// Rendering settings chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Maximum number of bins drawn or listed.
    pub display_cap: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            display_cap: DEFAULT_DISPLAY_CAP,
        }
    }
}

impl ReportConfig {
    /// Create a report configuration with a display cap.
    pub fn new(display_cap: usize) -> Self {
        Self { display_cap }
    }

    /// Number of bins hidden behind the "N more" note.
    pub fn hidden_bins(&self, total: usize) -> usize {
        total.saturating_sub(self.display_cap)
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if `a` is at most `b`, with epsilon tolerance.
    #[inline]
    pub fn approx_le(a: f64, b: f64) -> bool {
        a <= b + EPS
    }

    /// Check if a is in range [min, max] with epsilon tolerance.
    #[inline]
    pub fn in_range(a: f64, min: f64, max: f64) -> bool {
        a >= min - EPS && a <= max + EPS
    }
}
