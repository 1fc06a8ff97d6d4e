//! PieceList - the ordered, owned cut list of one session.

use super::{PieceId, PieceSpec};
use crate::error::{Error, ValidationError};
use crate::validation::{validate_entry, PieceEntry};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered list of piece specifications.
///
/// Entries keep their submission order; ids are never reused within a list.
/// Deserialized lists go through the same checks as submitted entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredPieceList")]
pub struct PieceList {
    specs: Vec<PieceSpec>,
    next_id: u64,
}

/// Serialized form of a [`PieceList`], checked before use.
#[derive(Deserialize)]
struct StoredPieceList {
    specs: Vec<PieceSpec>,
    #[serde(default)]
    next_id: u64,
}

impl TryFrom<StoredPieceList> for PieceList {
    type Error = Error;

    fn try_from(stored: StoredPieceList) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        let mut next_id = stored.next_id;

        for spec in &stored.specs {
            let entry = PieceEntry::from_numbers(spec.width, spec.length, i64::from(spec.count));
            validate_entry(&entry)?;

            if !seen.insert(spec.id) {
                return Err(Error::DuplicatePieceId { id: spec.id });
            }
            next_id = next_id.max(spec.id.0);
        }

        Ok(Self {
            specs: stored.specs,
            next_id,
        })
    }
}

impl PieceList {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a numeric entry.
    pub fn submit(
        &mut self,
        width: f64,
        length: f64,
        count: i64,
    ) -> Result<PieceId, ValidationError> {
        self.submit_entry(&PieceEntry::from_numbers(width, length, count))
    }

    /// Validate and append an entry given as raw text fields.
    pub fn submit_raw(
        &mut self,
        width: &str,
        length: &str,
        count: &str,
    ) -> Result<PieceId, ValidationError> {
        self.submit_entry(&PieceEntry::from_text(width, length, count))
    }

    /// Validate and append an entry. The list is untouched on error.
    pub fn submit_entry(&mut self, entry: &PieceEntry) -> Result<PieceId, ValidationError> {
        let valid = validate_entry(entry)?;
        let id = self.allocate_id();

        self.specs.push(PieceSpec {
            id,
            width: valid.width,
            length: valid.length,
            count: valid.count,
        });

        Ok(id)
    }

    /// Remove the spec with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: PieceId) -> bool {
        let before = self.specs.len();
        self.specs.retain(|spec| spec.id != id);
        self.specs.len() != before
    }

    /// Find a spec by id.
    pub fn get(&self, id: PieceId) -> Option<&PieceSpec> {
        self.specs.iter().find(|spec| spec.id == id)
    }

    /// All specs in submission order.
    pub fn specs(&self) -> &[PieceSpec] {
        &self.specs
    }

    /// Iterate over specs in submission order.
    pub fn iter(&self) -> std::slice::Iter<'_, PieceSpec> {
        self.specs.iter()
    }

    /// Get number of specs.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Total number of piece instances over all specs.
    pub fn total_instances(&self) -> usize {
        self.specs.iter().map(|spec| spec.count as usize).sum()
    }

    fn allocate_id(&mut self) -> PieceId {
        self.next_id += 1;
        PieceId(self.next_id)
    }
}

impl<'a> IntoIterator for &'a PieceList {
    type Item = &'a PieceSpec;
    type IntoIter = std::slice::Iter<'a, PieceSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
