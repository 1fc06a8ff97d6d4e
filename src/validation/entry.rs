//! Validation of a submitted piece entry.

use crate::config::{MAX_PIECE_COUNT, SHEET_LENGTH, SHEET_WIDTH};
use crate::error::{Field, ValidationError};

/// A numeric-like input value as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Field left empty.
    Missing,
    /// Already numeric.
    Number(f64),
    /// Already an integer.
    Integer(i64),
    /// Text still to be parsed.
    Text(String),
}

impl RawValue {
    fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            RawValue::Missing
        } else {
            RawValue::Text(trimmed.to_string())
        }
    }
}

/// A candidate piece entry before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceEntry {
    pub width: RawValue,
    pub length: RawValue,
    pub count: RawValue,
}

impl PieceEntry {
    /// Entry from form-like text fields. Blank fields count as missing.
    pub fn from_text(width: &str, length: &str, count: &str) -> Self {
        Self {
            width: RawValue::from_text(width),
            length: RawValue::from_text(length),
            count: RawValue::from_text(count),
        }
    }

    /// Entry from numbers.
    pub fn from_numbers(width: f64, length: f64, count: i64) -> Self {
        Self {
            width: RawValue::Number(width),
            length: RawValue::Number(length),
            count: RawValue::Integer(count),
        }
    }
}

/// A validated entry, ready to become a `PieceSpec`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidEntry {
    pub width: f64,
    pub length: f64,
    pub count: u32,
}

/// Validate a piece entry against the sheet dimensions.
pub fn validate_entry(entry: &PieceEntry) -> Result<ValidEntry, ValidationError> {
    let width = positive_dimension(&entry.width, Field::Width)?;
    let length = positive_dimension(&entry.length, Field::Length)?;
    let count = positive_count(&entry.count)?;

    if width > SHEET_WIDTH {
        return Err(ValidationError::WidthExceedsSheet {
            width,
            max: SHEET_WIDTH,
        });
    }

    if length > SHEET_LENGTH {
        return Err(ValidationError::LengthExceedsSheet {
            length,
            max: SHEET_LENGTH,
        });
    }

    Ok(ValidEntry {
        width,
        length,
        count,
    })
}

fn positive_dimension(value: &RawValue, field: Field) -> Result<f64, ValidationError> {
    let number = match value {
        RawValue::Missing => return Err(ValidationError::MissingValue { field }),
        RawValue::Number(n) => *n,
        RawValue::Integer(n) => *n as f64,
        RawValue::Text(text) => text
            .parse::<f64>()
            .map_err(|_| ValidationError::InvalidValue {
                field,
                value: text.clone(),
            })?,
    };

    if !number.is_finite() {
        return Err(ValidationError::InvalidValue {
            field,
            value: number.to_string(),
        });
    }

    if number <= 0.0 {
        return Err(ValidationError::NonPositive {
            field,
            value: number,
        });
    }

    Ok(number)
}

fn positive_count(value: &RawValue) -> Result<u32, ValidationError> {
    let field = Field::Count;
    let invalid = |value: String| ValidationError::InvalidValue { field, value };

    let count: i64 = match value {
        RawValue::Missing => return Err(ValidationError::MissingValue { field }),
        RawValue::Integer(n) => *n,
        RawValue::Number(n) => whole_number(*n).ok_or_else(|| invalid(n.to_string()))?,
        RawValue::Text(text) => match text.parse::<i64>() {
            Ok(n) => n,
            Err(_) => text
                .parse::<f64>()
                .ok()
                .and_then(whole_number)
                .ok_or_else(|| invalid(text.clone()))?,
        },
    };

    if count <= 0 {
        return Err(ValidationError::NonPositive {
            field,
            value: count as f64,
        });
    }

    u32::try_from(count)
        .ok()
        .filter(|&count| count <= MAX_PIECE_COUNT)
        .ok_or(ValidationError::CountTooLarge {
            count,
            max: MAX_PIECE_COUNT,
        })
}

/// Accept floats such as `2.0` as counts, reject `1.5`.
fn whole_number(n: f64) -> Option<i64> {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Some(n as i64)
    } else {
        None
    }
}
