//! Error types for the sheet calculator.

use crate::model::PieceId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error codes for calculator failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// General parse error (-3)
    ParseError = -3,
    /// File could not be read (-4)
    ReadError = -4,
    /// Required value missing (E100)
    MissingValue = 100,
    /// Value not a usable number (E101)
    InvalidValue = 101,
    /// Value zero or negative (E102)
    NonPositive = 102,
    /// Piece wider than the sheet (E103)
    WidthExceedsSheet = 103,
    /// Piece longer than the sheet (E104)
    LengthExceedsSheet = 104,
    /// Count above the per-entry maximum (E105)
    CountTooLarge = 105,
    /// Two specs share an id (E106)
    DuplicatePieceId = 106,
    /// Packing could not place remaining pieces (E200)
    PackingStuck = 200,
    /// Packing hit the bin-opening ceiling (E201)
    SafetyCeiling = 201,
    /// Layout breaks a placement invariant (E202)
    InvalidLayout = 202,
}

/// Input field of a piece entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Width,
    Length,
    Count,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Width => write!(f, "width"),
            Field::Length => write!(f, "length"),
            Field::Count => write!(f, "count"),
        }
    }
}

/// Rejection of a submitted piece entry. The piece list is left unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Missing {field}")]
    MissingValue { field: Field },

    #[error("Invalid value for {field}: '{value}'")]
    InvalidValue { field: Field, value: String },

    #[error("The {field} must be positive, got {value}")]
    NonPositive { field: Field, value: f64 },

    #[error("Width {width}m exceeds the maximum sheet width of {max}m")]
    WidthExceedsSheet { width: f64, max: f64 },

    #[error("Length {length}m exceeds the maximum sheet length of {max}m")]
    LengthExceedsSheet { length: f64, max: f64 },

    #[error("Count {count} exceeds the maximum of {max} pieces per entry")]
    CountTooLarge { count: i64, max: u32 },
}

impl ValidationError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingValue { .. } => ErrorCode::MissingValue,
            ValidationError::InvalidValue { .. } => ErrorCode::InvalidValue,
            ValidationError::NonPositive { .. } => ErrorCode::NonPositive,
            ValidationError::WidthExceedsSheet { .. } => ErrorCode::WidthExceedsSheet,
            ValidationError::LengthExceedsSheet { .. } => ErrorCode::LengthExceedsSheet,
            ValidationError::CountTooLarge { .. } => ErrorCode::CountTooLarge,
        }
    }

    /// The field the error is about.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingValue { field }
            | ValidationError::InvalidValue { field, .. }
            | ValidationError::NonPositive { field, .. } => *field,
            ValidationError::WidthExceedsSheet { .. } => Field::Width,
            ValidationError::LengthExceedsSheet { .. } => Field::Length,
            ValidationError::CountTooLarge { .. } => Field::Count,
        }
    }
}

/// Packing stopped before every instance was placed.
///
/// Only reachable when a piece slipped past validation, so it is reported
/// as a diagnostic on the layout rather than a user error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PackingFailure {
    #[error("No piece fits on sheet {bin_index}; {unplaced} instance(s) left unplaced")]
    Stuck { bin_index: usize, unplaced: usize },

    #[error("Stopped after opening {attempts} sheets; {unplaced} instance(s) left unplaced")]
    SafetyCeiling { attempts: usize, unplaced: usize },
}

impl PackingFailure {
    /// Get the error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            PackingFailure::Stuck { .. } => ErrorCode::PackingStuck,
            PackingFailure::SafetyCeiling { .. } => ErrorCode::SafetyCeiling,
        }
    }

    /// Number of instances that were not placed.
    pub fn unplaced(&self) -> usize {
        match self {
            PackingFailure::Stuck { unplaced, .. }
            | PackingFailure::SafetyCeiling { unplaced, .. } => *unplaced,
        }
    }
}

/// Main error type for the calculator.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Packing incomplete: {0}")]
    Packing(#[from] PackingFailure),

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Line {line}: {source}")]
    InvalidEntry {
        line: usize,
        #[source]
        source: ValidationError,
    },

    #[error("Invalid piece '{token}': expected WIDTHxLENGTH or WIDTHxLENGTHxCOUNT")]
    InvalidToken { token: String },

    #[error("Piece id {id} appears more than once")]
    DuplicatePieceId { id: PieceId },

    #[error("Invalid layout: {message}")]
    InvalidLayout { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Validation(e) => e.code(),
            Error::Packing(e) => e.code(),
            Error::FileNotFound { .. } => ErrorCode::FileNotFound,
            Error::ParseError { .. } => ErrorCode::ParseError,
            Error::InvalidEntry { source, .. } => source.code(),
            Error::InvalidToken { .. } => ErrorCode::ParseError,
            Error::DuplicatePieceId { .. } => ErrorCode::DuplicatePieceId,
            Error::InvalidLayout { .. } => ErrorCode::InvalidLayout,
            Error::Io(_) => ErrorCode::ReadError,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, Error>;
