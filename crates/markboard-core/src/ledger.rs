//! The score ledger: an ordered, newest-first collection of entered scores.
//!
//! The ledger itself performs no range validation; that happens in the
//! input layer before a batch reaches [`ScoreLedger::append_batch`]. Scores
//! already stored are never re-validated when thresholds change.

use serde::{Deserialize, Serialize};

/// Ordered sequence of scores, newest entries first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreLedger {
    scores: Vec<f64>,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a ledger from an existing list, taken as already newest-first.
    pub fn from_scores(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    /// Prepend a batch of scores as one unit.
    ///
    /// The batch keeps its internal order, so the first value of the batch
    /// becomes the new head of the ledger.
    pub fn append_batch(&mut self, values: &[f64]) {
        if values.is_empty() {
            return;
        }
        let mut next = Vec::with_capacity(values.len() + self.scores.len());
        next.extend_from_slice(values);
        next.append(&mut self.scores);
        self.scores = next;
    }

    /// Remove the score at `index`. Out-of-range indices are a silent no-op.
    pub fn remove_at(&mut self, index: usize) {
        if index < self.scores.len() {
            self.scores.remove(index);
        }
    }

    /// Drop every score.
    pub fn clear(&mut self) {
        self.scores.clear();
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
