//! A piece instance positioned on a sheet.

use super::PieceId;
use serde::{Deserialize, Serialize};

/// One piece instance placed on a sheet, offsets measured from the
/// sheet's top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPiece {
    /// Spec this instance was drawn from.
    pub spec_id: PieceId,
    /// Piece width.
    pub width: f64,
    /// Piece length.
    pub length: f64,
    /// X offset on sheet.
    pub x: f64,
    /// Y offset on sheet.
    pub y: f64,
    /// Index of the sheet holding this piece.
    pub bin_index: usize,
}

impl PlacedPiece {
    /// Get the right edge X coordinate.
    pub fn x_max(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge Y coordinate.
    pub fn y_max(&self) -> f64 {
        self.y + self.length
    }

    /// Area covered by this piece.
    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Get the center X coordinate.
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Get the center Y coordinate.
    pub fn center_y(&self) -> f64 {
        self.y + self.length / 2.0
    }

    /// Check whether two half-open rectangles share any area.
    ///
    /// Pieces that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &PlacedPiece) -> bool {
        use crate::config::EPS;

        let x_overlap = self.x < other.x_max() - EPS && other.x < self.x_max() - EPS;
        let y_overlap = self.y < other.y_max() - EPS && other.y < self.y_max() - EPS;
        x_overlap && y_overlap
    }
}
