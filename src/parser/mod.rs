//! Piece list parser module.

mod entries;

pub use entries::{parse_piece_file, parse_piece_list, parse_piece_token};
