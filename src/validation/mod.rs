//! Validation of piece entries and packed layouts.

mod entry;
mod validate;

pub use entry::{validate_entry, PieceEntry, RawValue, ValidEntry};
pub use validate::{validate_layout, validate_sheet, ValidationResult};
