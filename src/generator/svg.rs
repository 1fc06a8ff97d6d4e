//! SVG drawing of packed sheets.
//!
//! Sheets are drawn side by side, top-left origin, one rectangle per placed
//! piece. Pieces of the same spec share a color.

use crate::config::{ReportConfig, SHEET_LENGTH, SHEET_WIDTH};
use crate::model::{Layout, PieceId, PieceList, SheetLayout};
use std::collections::HashMap;
use std::fmt::Write;

/// Pixels per meter.
const SCALE: f64 = 50.0;

/// Space around and between sheets, in pixels.
const MARGIN: f64 = 20.0;

/// Room above each sheet for its title, in pixels.
const TITLE_HEIGHT: f64 = 20.0;

/// Fill color of the `index`-th spec in the piece list.
///
/// Hues step by the golden angle so neighbouring specs stay distinct.
pub fn piece_color(index: usize) -> String {
    let hue = (index as f64 * 137.5) % 360.0;
    format!("hsl({:.1}, 50%, 50%)", hue)
}

/// SVG writer with a fixed scale.
pub struct SvgWriter {
    output: String,
}

impl SvgWriter {
    /// Start a document of the given pixel size.
    pub fn new(width: f64, height: f64) -> Self {
        let mut output = String::new();
        writeln!(
            output,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = format_px(width),
            h = format_px(height)
        )
        .unwrap();
        Self { output }
    }

    /// Close the document and return it.
    pub fn into_string(mut self) -> String {
        writeln!(self.output, "</svg>").unwrap();
        self.output
    }

    /// Write a rectangle.
    pub fn write_rect(&mut self, x: f64, y: f64, width: f64, height: f64, style: &str) {
        writeln!(
            self.output,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" {}/>"#,
            format_px(x),
            format_px(y),
            format_px(width),
            format_px(height),
            style
        )
        .unwrap();
    }

    /// Write a text label anchored at its center.
    pub fn write_text(&mut self, x: f64, y: f64, size: f64, text: &str) {
        writeln!(
            self.output,
            r#"  <text x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            format_px(x),
            format_px(y),
            format_px(size),
            escape(text)
        )
        .unwrap();
    }

    /// Draw one sheet with its pieces, origin at (`left`, `top`).
    fn write_sheet(
        &mut self,
        sheet: &SheetLayout,
        left: f64,
        top: f64,
        colors: &HashMap<PieceId, String>,
    ) {
        let sheet_w = sheet.width() * SCALE;
        let sheet_h = sheet.length() * SCALE;

        self.write_text(
            left + sheet_w / 2.0,
            top - TITLE_HEIGHT / 2.0,
            12.0,
            &format!("Sheet {}", sheet.index + 1),
        );
        self.write_rect(left, top, sheet_w, sheet_h, r##"fill="#f3f4f6" stroke="#9ca3af""##);

        for piece in &sheet.pieces {
            let fill = colors
                .get(&piece.spec_id)
                .map(String::as_str)
                .unwrap_or("gray");
            self.write_rect(
                left + piece.x * SCALE,
                top + piece.y * SCALE,
                piece.width * SCALE,
                piece.length * SCALE,
                &format!(r#"fill="{}" fill-opacity="0.7" stroke="white""#, fill),
            );
            self.write_text(
                left + piece.center_x() * SCALE,
                top + piece.center_y() * SCALE,
                10.0,
                &format!("{}x{}", piece.width, piece.length),
            );
        }
    }
}

/// Render the first `config.display_cap` sheets of a layout as SVG.
pub fn generate_svg(pieces: &PieceList, layout: &Layout, config: &ReportConfig) -> String {
    let colors: HashMap<PieceId, String> = pieces
        .iter()
        .enumerate()
        .map(|(idx, spec)| (spec.id, piece_color(idx)))
        .collect();

    let shown = layout.bins.len().min(config.display_cap);
    let hidden = config.hidden_bins(layout.bins.len());

    let sheet_w = SHEET_WIDTH * SCALE;
    let sheet_h = SHEET_LENGTH * SCALE;
    let note_height = if hidden > 0 { TITLE_HEIGHT } else { 0.0 };
    let width = MARGIN + shown.max(1) as f64 * (sheet_w + MARGIN);
    let height = TITLE_HEIGHT + MARGIN * 2.0 + sheet_h + note_height;

    let mut writer = SvgWriter::new(width, height);

    for (slot, sheet) in layout.bins.iter().take(shown).enumerate() {
        let left = MARGIN + slot as f64 * (sheet_w + MARGIN);
        writer.write_sheet(sheet, left, MARGIN + TITLE_HEIGHT, &colors);
    }

    if hidden > 0 {
        writer.write_text(
            width / 2.0,
            height - MARGIN / 2.0 - note_height / 2.0,
            12.0,
            &format!("{} more sheet(s) not shown", hidden),
        );
    }

    writer.into_string()
}

/// Format a pixel value with at most two decimals.
fn format_px(value: f64) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
