//! Integration tests for the sheet calculator.
//!
//! These tests check the layout invariants over generated piece lists
//! (proptest) rather than exact positions:
//! - every instance placed exactly once
//! - pieces inside the sheet and not overlapping
//! - never fewer sheets than the area bound
//! - identical output for identical input

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::io::Write;
use telas_calc::packing::{area_lower_bound, pack_specs, safety_ceiling};
use telas_calc::{
    compute_layout, compute_metrics, generate_report, parse_piece_file, validate_layout,
    Calculator, ErrorCode, Layout, PackingFailure, PieceId, PieceList, PieceSpec, ReportConfig,
    ValidationError, SHEET_LENGTH, SHEET_WIDTH,
};

const EPS: f64 = 1e-9;

// ==================== Helpers ====================

fn list(entries: &[(f64, f64, i64)]) -> PieceList {
    let mut pieces = PieceList::new();
    for &(width, length, count) in entries {
        pieces
            .submit(width, length, count)
            .expect("Test entries should be valid");
    }
    pieces
}

/// Piece lists on a 1cm grid, every entry within the sheet.
fn piece_list_strategy() -> impl Strategy<Value = PieceList> {
    prop::collection::vec((1u32..=245, 1u32..=600, 1i64..=8), 0..6).prop_map(|entries| {
        let mut pieces = PieceList::new();
        for (width, length, count) in entries {
            pieces
                .submit(f64::from(width) / 100.0, f64::from(length) / 100.0, count)
                .expect("Generated entries should be valid");
        }
        pieces
    })
}

fn assert_layout_invariants(pieces: &PieceList, layout: &Layout) {
    assert!(layout.is_complete(), "Unexpected failure: {:?}", layout.failure);

    // Conservation
    let placed = layout.placed_per_spec();
    for spec in pieces {
        assert_eq!(
            placed.get(&spec.id).copied().unwrap_or(0),
            spec.count as usize,
            "Instance count for {}",
            spec.id
        );
    }
    assert_eq!(layout.placed_count(), pieces.total_instances());

    for sheet in &layout.bins {
        // Bounds
        for piece in &sheet.pieces {
            assert!(piece.x >= -EPS && piece.y >= -EPS, "{:?}", piece);
            assert!(piece.x_max() <= SHEET_WIDTH + EPS, "{:?}", piece);
            assert!(piece.y_max() <= SHEET_LENGTH + EPS, "{:?}", piece);
        }

        // Non-overlap
        assert!(
            sheet.overlapping_pairs().is_empty(),
            "Sheet {} has overlaps",
            sheet.index
        );
    }

    // Lower bound
    assert!(layout.required_bins >= area_lower_bound(layout.total_area - EPS));
    assert!(layout.utilization <= 1.0 + EPS);
}

// ==================== Invariant Tests ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_generated_lists_keep_invariants(pieces in piece_list_strategy()) {
        let layout = compute_layout(&pieces);
        assert_layout_invariants(&pieces, &layout);

        let validation = validate_layout(&pieces, &layout);
        prop_assert!(validation.passed, "Errors: {:?}", validation.errors);
    }

    #[test]
    fn test_recompute_is_identical(pieces in piece_list_strategy()) {
        prop_assert_eq!(compute_layout(&pieces), compute_layout(&pieces));
    }

    #[test]
    fn test_pieces_in_bins_are_tagged_with_bin(pieces in piece_list_strategy()) {
        let layout = compute_layout(&pieces);
        for (idx, sheet) in layout.bins.iter().enumerate() {
            prop_assert_eq!(sheet.index, idx);
            prop_assert!(sheet.pieces.iter().all(|p| p.bin_index == idx));
            prop_assert!(!sheet.is_empty());
        }
    }
}

// ==================== Scenario Tests ====================

#[test]
fn test_three_pieces_one_sheet() {
    let pieces = list(&[(1.0, 2.0, 3)]);
    let layout = compute_layout(&pieces);

    assert!((layout.total_area - 6.0).abs() < EPS);
    assert_eq!(layout.required_bins, 1);
    assert_eq!(layout.bins[0].num_pieces(), 3);
    assert_layout_invariants(&pieces, &layout);
}

#[test]
fn test_empty_list() {
    let layout = compute_layout(&PieceList::new());
    assert_eq!(layout.required_bins, 0);
    assert_eq!(layout.total_area, 0.0);
    assert_eq!(layout.utilization, 0.0);
    assert!(layout.bins.is_empty());
    assert!(layout.is_complete());
}

#[test]
fn test_full_sheet_pieces() {
    let pieces = list(&[(2.45, 6.0, 2)]);
    let layout = compute_layout(&pieces);

    assert_eq!(layout.required_bins, 2);
    assert!((layout.utilization_percent() - 100.0).abs() < 1e-6);
    assert_layout_invariants(&pieces, &layout);
}

#[test]
fn test_mixed_list() {
    let pieces = list(&[
        (0.6, 1.2, 10),
        (2.45, 1.0, 3),
        (1.2, 2.4, 4),
        (0.3, 0.3, 25),
    ]);
    let layout = compute_layout(&pieces);
    assert_layout_invariants(&pieces, &layout);
    assert!(layout.required_bins >= 2);
}

// ==================== Validation Tests ====================

#[test]
fn test_rejections() {
    let mut calc = Calculator::new();

    assert!(matches!(
        calc.submit_piece(2.46, 1.0, 1),
        Err(ValidationError::WidthExceedsSheet { .. })
    ));
    assert!(matches!(
        calc.submit_piece(1.0, 6.01, 1),
        Err(ValidationError::LengthExceedsSheet { .. })
    ));
    assert!(matches!(
        calc.submit_piece(1.0, 1.0, 0),
        Err(ValidationError::NonPositive { .. })
    ));
    assert!(calc.pieces().is_empty());
    assert_eq!(calc.layout(), &Layout::default());
}

#[test]
fn test_session_add_and_remove() {
    let mut calc = Calculator::new();
    let big = calc.submit_raw("2.45", "6", "2").unwrap();
    let small = calc.submit_raw("1", "2", "3").unwrap();
    assert_eq!(calc.layout().required_bins, 3);

    assert!(calc.remove_piece(big));
    assert_eq!(calc.layout().required_bins, 1);
    assert_eq!(calc.pieces().len(), 1);
    assert_eq!(calc.pieces().specs()[0].id, small);

    // Removing again is a no-op
    assert!(!calc.remove_piece(big));
    assert_eq!(calc.layout().required_bins, 1);
}

// ==================== Packing Failure Tests ====================

/// Specs that never went through submission checks.
fn unchecked_specs(entries: &[(u64, f64, f64, u32)]) -> Vec<PieceSpec> {
    entries
        .iter()
        .map(|&(id, width, length, count)| PieceSpec {
            id: PieceId(id),
            width,
            length,
            count,
        })
        .collect()
}

fn layout_of(specs: &[PieceSpec], ceiling: usize) -> Layout {
    let result = pack_specs(specs, ceiling);
    let metrics = compute_metrics(specs, &result);
    Layout::new(result, metrics)
}

#[test]
fn test_oversized_piece_reports_failure() {
    let specs = unchecked_specs(&[(1, 3.0, 1.0, 2)]);
    let layout = layout_of(&specs, safety_ceiling(2));

    assert_eq!(
        layout.failure,
        Some(PackingFailure::Stuck {
            bin_index: 0,
            unplaced: 2
        })
    );
    assert_eq!(layout.required_bins, 0);
    assert!(layout.utilization.is_nan());
    assert!((layout.total_area - 6.0).abs() < EPS);

    let err = layout.ensure_complete().unwrap_err();
    assert_eq!(err.code(), ErrorCode::PackingStuck);
}

#[test]
fn test_failure_keeps_partial_result() {
    let specs = unchecked_specs(&[(1, 1.0, 1.0, 2), (2, 1.0, 7.0, 1)]);
    let layout = layout_of(&specs, safety_ceiling(3));

    assert_eq!(layout.required_bins, 1);
    assert_eq!(layout.placed_count(), 2);
    assert_eq!(
        layout.failure,
        Some(PackingFailure::Stuck {
            bin_index: 1,
            unplaced: 1
        })
    );
    assert!(layout.ensure_complete().is_err());
}

#[test]
fn test_failed_layout_never_reports_full_sheets() {
    // 36 m² requested, one sheet used
    let specs = unchecked_specs(&[(1, 1.0, 1.0, 1), (2, 1.0, 7.0, 5)]);
    let layout = layout_of(&specs, safety_ceiling(6));

    assert_eq!(layout.required_bins, 1);
    assert!(layout.utilization.is_nan());

    let json: serde_json::Value = serde_json::to_value(&layout).unwrap();
    assert!(json["utilization"].is_null());
}

#[test]
fn test_safety_ceiling_keeps_opened_sheets() {
    let pieces = list(&[(2.45, 6.0, 3)]);
    let layout = layout_of(pieces.specs(), 2);

    assert_eq!(
        layout.failure,
        Some(PackingFailure::SafetyCeiling {
            attempts: 2,
            unplaced: 1
        })
    );
    assert_eq!(layout.required_bins, 2);
    assert_eq!(layout.placed_count(), 2);
    assert_eq!(
        layout.ensure_complete().unwrap_err().code(),
        ErrorCode::SafetyCeiling
    );
}

// ==================== Restored List Tests ====================

#[test]
fn test_restored_list_keeps_ids_unique() {
    let pieces: PieceList = serde_json::from_str(
        r#"{"specs":[{"id":1,"width":1.0,"length":1.0,"count":1}],"next_id":0}"#,
    )
    .expect("Valid piece list JSON");
    let mut calc = Calculator::with_pieces(pieces);

    let added = calc.submit_piece(1.0, 1.0, 1).unwrap();
    assert_ne!(added, PieceId(1));

    assert!(calc.remove_piece(PieceId(1)));
    assert_eq!(calc.pieces().len(), 1);
    assert_eq!(calc.layout().placed_count(), 1);
}

#[test]
fn test_restored_list_rejects_oversized_spec() {
    let result = serde_json::from_str::<PieceList>(
        r#"{"specs":[{"id":1,"width":3.0,"length":1.0,"count":2}],"next_id":1}"#,
    );
    assert!(result.is_err());
}

// ==================== Output Tests ====================

#[test]
fn test_report_snapshot() {
    let pieces = list(&[(1.0, 2.0, 3)]);
    let layout = compute_layout(&pieces);
    let report = generate_report(&pieces, &layout, &ReportConfig::default());

    insta::assert_snapshot!(report.trim_end(), @r###"
    Sheets required: 1
    Total area: 6.00 m²
    Utilization: 40.8%

    Pieces:
      #1 1m x 2m (qty: 3)

    Sheet 1: 3 piece(s), 40.8% used
      #1 1x2 at (0.00, 0.00)
      #1 1x2 at (1.00, 0.00)
      #1 1x2 at (0.00, 2.00)
    "###);
}

#[test]
fn test_layout_json_shape() {
    let pieces = list(&[(2.45, 6.0, 1)]);
    let layout = compute_layout(&pieces);
    let json: serde_json::Value = serde_json::to_value(&layout).unwrap();

    assert_eq!(json["required_bins"], 1);
    assert_eq!(json["bins"][0]["pieces"][0]["spec_id"], 1);
    assert_eq!(json["bins"][0]["pieces"][0]["x"], 0.0);
    assert!(json["failure"].is_null());
}

// ==================== File Input Tests ====================

#[test]
fn test_parse_piece_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "# largura comprimento quantidade").unwrap();
    writeln!(file, "1,20 2,00 3").unwrap();
    writeln!(file, "2.45x6").unwrap();
    file.flush().unwrap();

    let pieces = parse_piece_file(file.path()).expect("Failed to parse piece file");
    let dims: Vec<(f64, f64, u32)> = pieces
        .iter()
        .map(|s| (s.width, s.length, s.count))
        .collect();
    assert_eq!(dims, vec![(1.2, 2.0, 3), (2.45, 6.0, 1)]);

    let layout = compute_layout(&pieces);
    assert_layout_invariants(&pieces, &layout);
}

#[test]
fn test_parse_piece_file_reports_line() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("pieces.txt");
    std::fs::write(&path, "1 1 1\n1 7 1\n").unwrap();

    let err = parse_piece_file(&path).unwrap_err();
    assert_eq!(err.code(), ErrorCode::LengthExceedsSheet);
    assert!(err.to_string().starts_with("Line 2:"));
}
