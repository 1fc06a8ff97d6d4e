//! Output generators for packed layouts.

mod report;
mod svg;

pub use report::generate_report;
pub use svg::{generate_svg, piece_color, SvgWriter};
