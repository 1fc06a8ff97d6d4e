//! Area-sorted shelf packing.
//!
//! Sheets are filled in rows running across the sheet width. Each row is
//! filled left to right; when the next instance does not fit, the row is
//! closed and a new one starts below it. Bigger pieces go first, so the
//! first piece of a row is normally its longest.

use crate::config::{float_cmp, SAFETY_CEILING_FACTOR, SHEET_LENGTH, SHEET_WIDTH};
use crate::error::PackingFailure;
use crate::model::{PackingResult, PieceList, PieceSpec, PlacedPiece, SheetLayout};
use tracing::{debug, warn};

/// Maximum number of sheets opened for `total_instances` instances.
pub fn safety_ceiling(total_instances: usize) -> usize {
    (total_instances * SAFETY_CEILING_FACTOR).max(1)
}

/// Pack every instance of every spec onto sheets.
///
/// Deterministic: the same list always yields the same result. When no
/// progress is possible the sheets packed so far are returned with
/// `failure` set.
pub fn pack_pieces(pieces: &PieceList) -> PackingResult {
    pack_specs(pieces.specs(), safety_ceiling(pieces.total_instances()))
}

/// Pack `specs`, opening at most `ceiling` sheets.
///
/// Specs are taken as given, without the checks a [`PieceList`] applies on
/// submission, so pieces larger than a sheet end in a `Stuck` failure.
pub fn pack_specs(specs: &[PieceSpec], ceiling: usize) -> PackingResult {
    let mut remaining: Vec<u32> = specs.iter().map(|spec| spec.count).collect();
    let order = placement_order(specs);

    let mut result = PackingResult::default();
    let mut attempts = 0;

    while unplaced(&remaining) > 0 {
        if attempts >= ceiling {
            let failure = PackingFailure::SafetyCeiling {
                attempts,
                unplaced: unplaced(&remaining),
            };
            warn!("{}", failure);
            result.failure = Some(failure);
            break;
        }
        attempts += 1;

        let bin_index = result.bins.len();
        let sheet = fill_sheet(bin_index, specs, &order, &mut remaining);

        if sheet.is_empty() {
            let failure = PackingFailure::Stuck {
                bin_index,
                unplaced: unplaced(&remaining),
            };
            warn!("{}", failure);
            result.failure = Some(failure);
            break;
        }

        debug!(
            "Sheet {}: {} piece(s), {:.1}% filled",
            bin_index,
            sheet.num_pieces(),
            sheet.fill_ratio() * 100.0
        );
        result.bins.push(sheet);
    }

    result
}

/// Spec indices by descending area; ties keep submission order.
fn placement_order(specs: &[PieceSpec]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..specs.len()).collect();
    // sort_by is stable
    order.sort_by(|&a, &b| specs[b].area().total_cmp(&specs[a].area()));
    order
}

fn unplaced(remaining: &[u32]) -> usize {
    remaining.iter().map(|&count| count as usize).sum()
}

/// Row cursor inside one sheet.
struct ShelfCursor {
    /// Top edge of the open row.
    row_y: f64,
    /// Width still free in the open row.
    row_width_left: f64,
    /// Length of the longest piece in the open row.
    row_height: f64,
    /// Length still free from the open row's top edge down.
    height_left: f64,
}

impl ShelfCursor {
    fn new() -> Self {
        Self {
            row_y: 0.0,
            row_width_left: SHEET_WIDTH,
            row_height: 0.0,
            height_left: SHEET_LENGTH,
        }
    }

    fn row_is_empty(&self) -> bool {
        self.row_height == 0.0
    }

    fn close_row(&mut self) {
        self.row_y += self.row_height;
        self.height_left -= self.row_height;
        self.row_width_left = SHEET_WIDTH;
        self.row_height = 0.0;
    }

    /// Try to place one instance, opening a new row if needed.
    /// Returns the position on success.
    fn place(&mut self, width: f64, length: f64) -> Option<(f64, f64)> {
        loop {
            if !float_cmp::approx_le(length, self.height_left) {
                return None;
            }

            if float_cmp::approx_le(width, self.row_width_left) {
                let position = (SHEET_WIDTH - self.row_width_left, self.row_y);
                self.row_width_left -= width;
                self.row_height = self.row_height.max(length);
                return Some(position);
            }

            // Even a fresh row is too narrow
            if self.row_is_empty() {
                return None;
            }
            self.close_row();
        }
    }
}

/// Fill one sheet, passing over the specs until a pass places nothing.
fn fill_sheet(
    bin_index: usize,
    specs: &[PieceSpec],
    order: &[usize],
    remaining: &mut [u32],
) -> SheetLayout {
    let mut sheet = SheetLayout::new(bin_index);
    let mut cursor = ShelfCursor::new();

    loop {
        let mut progress = false;

        for &idx in order {
            let spec = &specs[idx];

            while remaining[idx] > 0 {
                let Some((x, y)) = cursor.place(spec.width, spec.length) else {
                    break;
                };

                sheet.add_piece(PlacedPiece {
                    spec_id: spec.id,
                    width: spec.width,
                    length: spec.length,
                    x,
                    y,
                    bin_index,
                });
                remaining[idx] -= 1;
                progress = true;
            }
        }

        if !progress {
            break;
        }
    }

    sheet
}
