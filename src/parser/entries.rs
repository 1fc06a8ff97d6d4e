//! Piece entry parsing for command line tokens and piece list files.
//!
//! A piece list file holds one entry per line:
//!
//! ```text
//! # width  length  count
//! 1.20     2.00    3
//! 0,80 x 1,50          # count defaults to 1
//! ```

use crate::error::{Error, Result};
use crate::model::PieceList;
use crate::validation::PieceEntry;
use std::path::Path;
use tracing::debug;

/// Characters separating the fields of an entry.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, 'x' | 'X' | '*' | ';')
}

/// Split an entry into its fields, reading `,` as a decimal comma.
fn split_fields(text: &str) -> Vec<String> {
    text.split(is_separator)
        .filter(|field| !field.is_empty())
        .map(|field| field.replace(',', "."))
        .collect()
}

fn entry_from_fields(fields: &[String]) -> Option<PieceEntry> {
    match fields {
        [width, length] => Some(PieceEntry::from_text(width, length, "1")),
        [width, length, count] => Some(PieceEntry::from_text(width, length, count)),
        _ => None,
    }
}

/// Parse a single `WIDTHxLENGTH[xCOUNT]` token, e.g. `1.2x2.5x4`.
///
/// Only the shape of the token is checked here; the values are validated
/// when the entry is submitted.
pub fn parse_piece_token(token: &str) -> Result<PieceEntry> {
    entry_from_fields(&split_fields(token)).ok_or_else(|| Error::InvalidToken {
        token: token.to_string(),
    })
}

/// Parse piece list text into a validated piece list.
pub fn parse_piece_list(content: &str) -> Result<PieceList> {
    let mut pieces = PieceList::new();

    for (idx, raw_line) in content.lines().enumerate() {
        let line = idx + 1;
        let text = raw_line.split('#').next().unwrap_or("").trim();

        if text.is_empty() {
            continue;
        }

        let fields = split_fields(text);
        let entry = entry_from_fields(&fields).ok_or_else(|| Error::ParseError {
            line,
            message: format!("expected 2 or 3 fields, found {}", fields.len()),
        })?;

        pieces
            .submit_entry(&entry)
            .map_err(|source| Error::InvalidEntry { line, source })?;
    }

    debug!("Parsed {} piece spec(s)", pieces.len());
    Ok(pieces)
}

/// Read and parse a piece list file.
pub fn parse_piece_file(path: &Path) -> Result<PieceList> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    parse_piece_list(&content)
}
