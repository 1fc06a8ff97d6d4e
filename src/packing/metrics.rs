//! Sheet count, piece area and utilization of a packing result.

use crate::config::sheet_area;
use crate::model::{PackingResult, PieceSpec};
use serde::{Deserialize, Serialize};

/// Summary numbers of a packing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Number of sheets used.
    pub required_bins: usize,
    /// Total piece area in square meters.
    pub total_area: f64,
    /// Piece area over used sheet area; NaN when packing failed.
    pub utilization: f64,
}

/// Total area requested by the specs.
///
/// Taken from the specs rather than the placed pieces so it stays correct
/// when packing stopped early.
pub fn total_area(specs: &[PieceSpec]) -> f64 {
    specs.iter().map(PieceSpec::total_area).sum()
}

/// Fewest sheets any layout could use.
pub fn area_lower_bound(total_area: f64) -> usize {
    (total_area / sheet_area()).ceil() as usize
}

/// Derive metrics from a packing result.
///
/// Utilization is undefined for an incomplete packing, since the requested
/// area no longer fits the sheets used, and is reported as NaN.
pub fn compute_metrics(specs: &[PieceSpec], result: &PackingResult) -> Metrics {
    let total_area = total_area(specs);
    let required_bins = result.num_bins();

    let utilization = if result.failure.is_some() {
        f64::NAN
    } else if required_bins == 0 {
        0.0
    } else {
        total_area / (required_bins as f64 * sheet_area())
    };

    Metrics {
        required_bins,
        total_area,
        utilization,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PieceId, PieceList};
    use crate::packing::{pack_pieces, pack_specs};

    #[test]
    fn test_empty_list() {
        let pieces = PieceList::new();
        let metrics = compute_metrics(pieces.specs(), &pack_pieces(&pieces));
        assert_eq!(metrics, Metrics::default());
    }

    #[test]
    fn test_full_sheets() {
        let mut pieces = PieceList::new();
        pieces.submit(2.45, 6.0, 2).unwrap();
        let metrics = compute_metrics(pieces.specs(), &pack_pieces(&pieces));
        assert_eq!(metrics.required_bins, 2);
        assert!((metrics.utilization - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_area_from_list() {
        let mut pieces = PieceList::new();
        pieces.submit(1.0, 2.0, 3).unwrap();
        pieces.submit(0.5, 0.5, 4).unwrap();
        assert!((total_area(pieces.specs()) - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_failed_packing_has_no_utilization() {
        // One sheet used, but five 1x7 pieces never placed
        let spec = |id, length, count| PieceSpec {
            id: PieceId(id),
            width: 1.0,
            length,
            count,
        };
        let specs = vec![spec(1, 1.0, 1), spec(2, 7.0, 5)];
        let result = pack_specs(&specs, 12);
        assert!(result.failure.is_some());

        let metrics = compute_metrics(&specs, &result);
        assert_eq!(metrics.required_bins, 1);
        assert!((metrics.total_area - 36.0).abs() < 1e-9);
        assert!(metrics.utilization.is_nan());
    }

    #[test]
    fn test_area_lower_bound() {
        assert_eq!(area_lower_bound(0.0), 0);
        assert_eq!(area_lower_bound(6.0), 1);
        assert_eq!(area_lower_bound(14.8), 2);
    }
}
