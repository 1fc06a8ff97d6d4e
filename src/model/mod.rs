//! Data model types for the sheet calculator.

mod layout;
mod piece_list;
mod piece_spec;
mod placed;
mod sheet;

pub use layout::{Layout, PackingResult};
pub use piece_list::PieceList;
pub use piece_spec::{PieceId, PieceSpec};
pub use placed::PlacedPiece;
pub use sheet::SheetLayout;
