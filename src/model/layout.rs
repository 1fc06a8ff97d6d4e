//! Packing result and the summary exposed to callers.

use super::sheet::count_per_spec;
use super::{PieceId, PlacedPiece, SheetLayout};
use crate::error::{PackingFailure, Result};
use crate::packing::Metrics;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sheets produced by the packing engine, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackingResult {
    /// Filled sheets.
    pub bins: Vec<SheetLayout>,
    /// Set when packing stopped with instances left over.
    pub failure: Option<PackingFailure>,
}

impl PackingResult {
    /// Check whether every instance was placed.
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// Get number of sheets.
    pub fn num_bins(&self) -> usize {
        self.bins.len()
    }

    /// Iterate over every placed piece, sheet by sheet.
    pub fn placed(&self) -> impl Iterator<Item = &PlacedPiece> {
        self.bins.iter().flat_map(|bin| bin.pieces.iter())
    }

    /// Total number of placed instances.
    pub fn placed_count(&self) -> usize {
        self.bins.iter().map(SheetLayout::num_pieces).sum()
    }

    /// Number of placed instances per spec.
    pub fn placed_per_spec(&self) -> HashMap<PieceId, usize> {
        count_per_spec(&self.bins)
    }
}

/// Everything a caller renders after a piece-list change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Number of sheets used.
    pub required_bins: usize,
    /// Total piece area in square meters.
    pub total_area: f64,
    /// Piece area over used sheet area, in [0, 1]. NaN when `failure` is set.
    pub utilization: f64,
    /// Per-sheet placements.
    pub bins: Vec<SheetLayout>,
    /// Diagnostic when the layout is incomplete.
    pub failure: Option<PackingFailure>,
}

impl Layout {
    /// Combine a packing result with its metrics.
    pub fn new(result: PackingResult, metrics: Metrics) -> Self {
        Self {
            required_bins: metrics.required_bins,
            total_area: metrics.total_area,
            utilization: metrics.utilization,
            bins: result.bins,
            failure: result.failure,
        }
    }

    /// Utilization as a percentage. NaN for an incomplete layout.
    pub fn utilization_percent(&self) -> f64 {
        self.utilization * 100.0
    }

    /// Check whether every instance was placed.
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// Turn an incomplete layout into an error.
    pub fn ensure_complete(&self) -> Result<()> {
        match &self.failure {
            Some(failure) => Err(failure.clone().into()),
            None => Ok(()),
        }
    }

    /// Total number of placed instances.
    pub fn placed_count(&self) -> usize {
        self.bins.iter().map(SheetLayout::num_pieces).sum()
    }

    /// Number of placed instances per spec.
    pub fn placed_per_spec(&self) -> HashMap<PieceId, usize> {
        count_per_spec(&self.bins)
    }
}
