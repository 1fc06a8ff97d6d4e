//! Validation of packed layouts.

use crate::config::{float_cmp, EPS};
use crate::error::{Error, Result};
use crate::model::{Layout, PieceList, SheetLayout};
use crate::packing::area_lower_bound;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }

    /// Fail with the joined error messages if validation did not pass.
    pub fn ensure_passed(&self) -> Result<()> {
        if !self.passed {
            return Err(Error::InvalidLayout {
                message: self.errors.join("; "),
            });
        }

        Ok(())
    }
}

/// Check a layout against the list it was packed from.
///
/// Bounds, overlaps and per-spec counts are errors; an incomplete packing
/// is an error as well.
pub fn validate_layout(pieces: &PieceList, layout: &Layout) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (idx, sheet) in layout.bins.iter().enumerate() {
        if sheet.index != idx {
            result.add_error(format!(
                "Sheet {}: Stored index {} does not match its position",
                idx + 1,
                sheet.index
            ));
        }
        result.merge(validate_sheet(sheet));
    }

    if let Some(failure) = &layout.failure {
        result.add_error(format!("Packing incomplete: {}", failure));
    }

    // Conservation
    let placed = layout.placed_per_spec();
    for spec in pieces {
        let count = placed.get(&spec.id).copied().unwrap_or(0);
        if count != spec.count as usize {
            result.add_error(format!(
                "Piece {}: {} of {} instance(s) placed",
                spec.id, count, spec.count
            ));
        }
    }
    for id in placed.keys() {
        if pieces.get(*id).is_none() {
            result.add_error(format!("Piece {}: Placed but not in the piece list", id));
        }
    }

    if layout.is_complete() && layout.required_bins < area_lower_bound(layout.total_area - EPS) {
        result.add_error(format!(
            "{} sheet(s) cannot hold {:.2} m² of pieces",
            layout.required_bins, layout.total_area
        ));
    }

    if layout.required_bins != layout.bins.len() {
        result.add_error(format!(
            "Reported {} sheet(s) but layout has {}",
            layout.required_bins,
            layout.bins.len()
        ));
    }

    result
}

/// Validate bounds and overlaps on a single sheet.
pub fn validate_sheet(sheet: &SheetLayout) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let sheet_num = sheet.index + 1;

    if sheet.is_empty() {
        result.add_warning(format!("Sheet {}: No pieces placed", sheet_num));
    }

    for (piece_idx, piece) in sheet.pieces.iter().enumerate() {
        if piece.bin_index != sheet.index {
            result.add_error(format!(
                "Sheet {}, Piece {}: Tagged with sheet {}",
                sheet_num,
                piece_idx + 1,
                piece.bin_index + 1
            ));
        }

        if !float_cmp::in_range(piece.x, 0.0, sheet.width())
            || !float_cmp::in_range(piece.y, 0.0, sheet.length())
            || !float_cmp::approx_le(piece.x_max(), sheet.width())
            || !float_cmp::approx_le(piece.y_max(), sheet.length())
        {
            result.add_error(format!(
                "Sheet {}, Piece {}: Extends beyond sheet bounds",
                sheet_num,
                piece_idx + 1
            ));
        }
    }

    for (i, j) in sheet.overlapping_pairs() {
        result.add_error(format!(
            "Sheet {}: Pieces {} and {} overlap",
            sheet_num,
            i + 1,
            j + 1
        ));
    }

    result
}
