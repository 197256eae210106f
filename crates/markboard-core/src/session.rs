//! The grade-entry session: explicit application state plus its reducer
//! surface.
//!
//! `GradeSession` owns the ledger, thresholds, entry buffer, and the error
//! signal, and is the single mutation path for all of them. Statistics are
//! never stored here: [`GradeSession::stats`] recomputes the snapshot from
//! scratch on every call.

use crate::input::{CommitOutcome, EntryBuffer, ErrorSignal, KeyOutcome};
use crate::ledger::ScoreLedger;
use crate::model::{GradeStats, Thresholds};
use crate::statistics;

/// All mutable state of one grade-entry session.
#[derive(Debug)]
pub struct GradeSession {
    ledger: ScoreLedger,
    thresholds: Thresholds,
    buffer: EntryBuffer,
    signal: ErrorSignal,
}

impl GradeSession {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            ledger: ScoreLedger::new(),
            thresholds,
            buffer: EntryBuffer::new(),
            signal: ErrorSignal::new(),
        }
    }

    /// Handle a keypad token. A fresh keypress dismisses any error still
    /// showing; an out-of-range token trips it again.
    pub fn press(&mut self, key: char) {
        self.signal.clear();
        if self.buffer.press(key, self.thresholds.max_score) == KeyOutcome::Rejected {
            self.signal.trip();
        }
    }

    /// Replace the pending buffer with a whole expression (pasted or read
    /// from a file). Validation happens at commit time.
    pub fn load_expression(&mut self, expression: &str) {
        self.signal.clear();
        self.buffer.load(expression);
    }

    pub fn backspace(&mut self) {
        self.buffer.backspace();
    }

    pub fn reset_entry(&mut self) {
        self.buffer.reset();
    }

    /// Commit the pending buffer into the ledger.
    ///
    /// Returns how many scores were appended. A rejected commit appends
    /// nothing, leaves the buffer intact, and trips the error signal.
    pub fn commit_entry(&mut self) -> usize {
        match self.buffer.commit(self.thresholds.max_score) {
            CommitOutcome::Committed(values) => {
                self.ledger.append_batch(&values);
                values.len()
            }
            CommitOutcome::Rejected => {
                self.signal.trip();
                0
            }
            CommitOutcome::Nothing => 0,
        }
    }

    /// Remove one score by position; silent no-op when out of range.
    pub fn remove_score(&mut self, index: usize) {
        self.ledger.remove_at(index);
    }

    pub fn clear_scores(&mut self) {
        self.ledger.clear();
    }

    /// Replace the thresholds. Takes effect on the next recomputation;
    /// scores already in the ledger are not re-validated.
    pub fn set_thresholds(&mut self, thresholds: Thresholds) {
        self.thresholds = thresholds;
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub fn scores(&self) -> &[f64] {
        self.ledger.scores()
    }

    pub fn entry(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn error_showing(&self) -> bool {
        self.signal.is_showing()
    }

    /// Recompute the statistics snapshot for the current state.
    pub fn stats(&self) -> GradeStats {
        statistics::compute(self.ledger.scores(), &self.thresholds)
    }
}

impl Default for GradeSession {
    fn default() -> Self {
        Self::new(Thresholds::default())
    }
}
