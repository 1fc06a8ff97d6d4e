//! telas-calc - Sheet requirement calculator.
//!
//! Works out how many 2.45m x 6m sheets ("telas") a list of rectangular
//! pieces needs and where each piece goes on its sheet. Pieces are packed
//! with a deterministic, area-sorted shelf heuristic; rotation is not
//! attempted.
//!
//! # Example
//!
//! ```
//! use telas_calc::{compute_layout, PieceList};
//!
//! let mut pieces = PieceList::new();
//! pieces.submit(1.0, 2.0, 3).unwrap();
//!
//! let layout = compute_layout(&pieces);
//! assert_eq!(layout.required_bins, 1);
//! assert_eq!(layout.total_area, 6.0);
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod packing;
pub mod parser;
pub mod validation;

// Re-exports for convenience
pub use calculator::Calculator;
pub use config::{ReportConfig, SHEET_LENGTH, SHEET_WIDTH};
pub use error::{Error, ErrorCode, PackingFailure, Result, ValidationError};
pub use generator::{generate_report, generate_svg};
pub use model::{Layout, PackingResult, PieceId, PieceList, PieceSpec, PlacedPiece, SheetLayout};
pub use packing::{compute_metrics, pack_pieces, Metrics};
pub use parser::{parse_piece_file, parse_piece_list, parse_piece_token};
pub use validation::{validate_layout, ValidationResult};

/// Pack a piece list and derive its metrics.
///
/// Pure: recomputed from scratch on every call. An incomplete packing is
/// returned with `failure` set rather than as an error.
pub fn compute_layout(pieces: &PieceList) -> Layout {
    let result = pack_pieces(pieces);
    let metrics = compute_metrics(pieces.specs(), &result);

    if let Some(failure) = &result.failure {
        tracing::warn!("Layout incomplete: {}", failure);
    }

    Layout::new(result, metrics)
}
