//! Piece specification - one line of the user's cut list.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a piece specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub u64);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A validated piece entry: `count` rectangles of `width` x `length` meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceSpec {
    /// Unique id assigned on submission.
    pub id: PieceId,
    /// Piece width (across the sheet).
    pub width: f64,
    /// Piece length (along the sheet).
    pub length: f64,
    /// Number of instances wanted.
    pub count: u32,
}

impl PieceSpec {
    /// Area of a single instance.
    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Area of all instances together.
    pub fn total_area(&self) -> f64 {
        self.area() * f64::from(self.count)
    }
}

impl fmt::Display for PieceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m x {}m (qty: {})", self.width, self.length, self.count)
    }
}
