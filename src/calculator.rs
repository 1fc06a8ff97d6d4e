//! Calculator session: the piece list plus its latest layout.

use crate::compute_layout;
use crate::error::ValidationError;
use crate::model::{Layout, PieceId, PieceList};
use crate::validation::PieceEntry;
use tracing::{debug, info};

/// Holds the piece list of one session and keeps its layout current.
///
/// Every successful change triggers a full recompute before the call
/// returns.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    pieces: PieceList,
    layout: Layout,
}

impl Calculator {
    /// Start a session with an empty piece list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from an existing piece list.
    pub fn with_pieces(pieces: PieceList) -> Self {
        let layout = compute_layout(&pieces);
        Self { pieces, layout }
    }

    /// Validate and add a piece entry given as numbers.
    pub fn submit_piece(
        &mut self,
        width: f64,
        length: f64,
        count: i64,
    ) -> Result<PieceId, ValidationError> {
        self.submit_entry(&PieceEntry::from_numbers(width, length, count))
    }

    /// Validate and add a piece entry given as text fields.
    pub fn submit_raw(
        &mut self,
        width: &str,
        length: &str,
        count: &str,
    ) -> Result<PieceId, ValidationError> {
        self.submit_entry(&PieceEntry::from_text(width, length, count))
    }

    /// Validate and add a piece entry.
    pub fn submit_entry(&mut self, entry: &PieceEntry) -> Result<PieceId, ValidationError> {
        let id = self.pieces.submit_entry(entry).inspect_err(|err| {
            debug!("Rejected piece entry ({}): {}", err.field(), err);
        })?;

        if let Some(spec) = self.pieces.get(id) {
            info!("Added piece {}: {}", id, spec);
        }
        self.recompute();
        Ok(id)
    }

    /// Remove a piece by id. Returns `false` (and changes nothing) if absent.
    pub fn remove_piece(&mut self, id: PieceId) -> bool {
        if !self.pieces.remove(id) {
            return false;
        }

        info!("Removed piece {}", id);
        self.recompute();
        true
    }

    /// Current piece list.
    pub fn pieces(&self) -> &PieceList {
        &self.pieces
    }

    /// Layout of the current piece list.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    fn recompute(&mut self) {
        self.layout = compute_layout(&self.pieces);
        debug!(
            "{} sheet(s), {:.2} m², {:.1}% utilization",
            self.layout.required_bins,
            self.layout.total_area,
            self.layout.utilization_percent()
        );
    }
}
