//! Plain-text summary of a layout.

use crate::config::ReportConfig;
use crate::model::{Layout, PieceList, SheetLayout};
use std::fmt::Write;

/// Render the summary numbers, the piece list and the first sheets.
///
/// At most `config.display_cap` sheets are listed; the rest are
/// summarized in a closing "more" line.
pub fn generate_report(pieces: &PieceList, layout: &Layout, config: &ReportConfig) -> String {
    let mut output = String::new();

    generate_summary_section(&mut output, layout);
    generate_pieces_section(&mut output, pieces);

    for sheet in layout.bins.iter().take(config.display_cap) {
        generate_sheet_section(&mut output, sheet);
    }

    let hidden = config.hidden_bins(layout.bins.len());
    if hidden > 0 {
        writeln!(output, "... and {} more sheet(s)", hidden).unwrap();
    }

    output
}

fn generate_summary_section(output: &mut String, layout: &Layout) {
    writeln!(output, "Sheets required: {}", layout.required_bins).unwrap();
    writeln!(output, "Total area: {:.2} m²", layout.total_area).unwrap();
    let utilization = layout.utilization_percent();
    if utilization.is_finite() {
        writeln!(output, "Utilization: {:.1}%", utilization).unwrap();
    } else {
        writeln!(output, "Utilization: n/a").unwrap();
    }

    if let Some(failure) = &layout.failure {
        writeln!(output, "Incomplete: {}", failure).unwrap();
    }

    writeln!(output).unwrap();
}

fn generate_pieces_section(output: &mut String, pieces: &PieceList) {
    writeln!(output, "Pieces:").unwrap();

    if pieces.is_empty() {
        writeln!(output, "  No pieces added").unwrap();
    }

    for spec in pieces {
        writeln!(output, "  {} {}", spec.id, spec).unwrap();
    }

    writeln!(output).unwrap();
}

fn generate_sheet_section(output: &mut String, sheet: &SheetLayout) {
    writeln!(
        output,
        "Sheet {}: {} piece(s), {:.1}% used",
        sheet.index + 1,
        sheet.num_pieces(),
        sheet.fill_ratio() * 100.0
    )
    .unwrap();

    for piece in &sheet.pieces {
        writeln!(
            output,
            "  {} {}x{} at ({:.2}, {:.2})",
            piece.spec_id, piece.width, piece.length, piece.x, piece.y
        )
        .unwrap();
    }

    writeln!(output).unwrap();
}
