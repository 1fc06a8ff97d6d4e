//! SheetLayout - the pieces cut from one sheet.

use super::{PieceId, PlacedPiece};
use crate::config::{sheet_area, SHEET_LENGTH, SHEET_WIDTH};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One sheet (bin) of the packing result, pieces in placement order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetLayout {
    /// Position of this sheet in the result.
    pub index: usize,
    /// Placed pieces, in the order they were placed.
    pub pieces: Vec<PlacedPiece>,
}

impl SheetLayout {
    /// Create a new empty sheet.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            pieces: Vec::new(),
        }
    }

    /// Sheet width.
    pub fn width(&self) -> f64 {
        SHEET_WIDTH
    }

    /// Sheet length.
    pub fn length(&self) -> f64 {
        SHEET_LENGTH
    }

    /// Add a piece.
    pub fn add_piece(&mut self, piece: PlacedPiece) {
        self.pieces.push(piece);
    }

    /// Get total number of pieces.
    pub fn num_pieces(&self) -> usize {
        self.pieces.len()
    }

    /// Check if no piece was placed.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Area covered by pieces.
    pub fn used_area(&self) -> f64 {
        self.pieces.iter().map(PlacedPiece::area).sum()
    }

    /// Fraction of this sheet covered by pieces.
    pub fn fill_ratio(&self) -> f64 {
        self.used_area() / sheet_area()
    }

    /// Find overlapping piece pairs (indices into `pieces`).
    pub fn overlapping_pairs(&self) -> Vec<(usize, usize)> {
        let mut overlaps = Vec::new();

        for i in 0..self.pieces.len() {
            for j in i + 1..self.pieces.len() {
                if self.pieces[i].overlaps(&self.pieces[j]) {
                    overlaps.push((i, j));
                }
            }
        }

        overlaps
    }
}

/// Count placed instances per spec over a run of sheets.
pub(crate) fn count_per_spec(sheets: &[SheetLayout]) -> HashMap<PieceId, usize> {
    let mut counts = HashMap::new();
    for piece in sheets.iter().flat_map(|sheet| sheet.pieces.iter()) {
        *counts.entry(piece.spec_id).or_insert(0) += 1;
    }
    counts
}
