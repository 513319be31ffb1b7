//! The running-total ledger: ordered category totals, a submission counter,
//! and the last applied batch for exact undo.

use serde::{Deserialize, Serialize};

use crate::errors::{SubmitError, UndoError};
use crate::parse::parse_line;
use crate::resolve::resolve_category;

/// One category and its accumulated total. Totals keep first-seen order so
/// display and tie-breaking are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub name: String,
    pub total: i64,
}

/// One applied (category, value) addition; the unit of undo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delta {
    pub name: String,
    pub value: i64,
}

/// Read-only view of the ledger for rendering by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub submission_count: u32,
    pub totals: Vec<CategoryTotal>,
    pub max_submissions: u32,
}

/// The aggregate state machine. Created empty, mutated only by
/// [`submit_batch`](Ledger::submit_batch), [`undo_last_batch`](Ledger::undo_last_batch),
/// and [`reset_cycle`](Ledger::reset_cycle). The persisted form is a direct
/// serialization of these fields; no versioning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    pub submission_count: u32,
    #[serde(default)]
    pub totals: Vec<CategoryTotal>,
    #[serde(default)]
    pub last_batch: Vec<Delta>,
}

impl Ledger {
    /// Submissions allowed per cycle before `reset_cycle` is required.
    pub const MAX_SUBMISSIONS: u32 = 6;

    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the current cycle has used up its submission allowance.
    /// `submit_batch` rejects with `CycleFull` until `reset_cycle` is called.
    pub fn is_full(&self) -> bool {
        self.submission_count >= Self::MAX_SUBMISSIONS
    }

    /// Parses `raw_text` line by line, resolves each entry against the current
    /// category keys, and applies the resulting deltas.
    ///
    /// Deltas are applied as lines are processed, so later lines in the same
    /// submission can merge into categories created by earlier ones. Lines
    /// that fail to parse are skipped. A submission with zero parsed lines
    /// mutates nothing and reports `NoDataFound`; otherwise the applied deltas
    /// become the undoable last batch and the submission counter advances.
    pub fn submit_batch(&mut self, raw_text: &str) -> Result<Vec<Delta>, SubmitError> {
        if self.is_full() {
            return Err(SubmitError::CycleFull);
        }

        let mut applied = Vec::new();
        for line in raw_text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let Some(entry) = parse_line(line) else {
                tracing::debug!(line, "skipping unparseable line");
                continue;
            };
            let key = {
                let keys: Vec<&str> = self.totals.iter().map(|c| c.name.as_str()).collect();
                resolve_category(&entry.name, &keys)
            };
            self.apply_delta(&key, entry.value);
            applied.push(Delta {
                name: key,
                value: entry.value,
            });
        }

        if applied.is_empty() {
            return Err(SubmitError::NoDataFound);
        }
        self.last_batch = applied.clone();
        self.submission_count += 1;
        tracing::debug!(
            deltas = applied.len(),
            submission_count = self.submission_count,
            "batch applied"
        );
        Ok(applied)
    }

    /// Reverses the most recent batch: subtracts its deltas, decrements the
    /// submission counter, and clears the batch record.
    ///
    /// When every remaining total is zero the whole map is cleared, so an
    /// undone-to-nothing session reads as empty. A single zeroed category
    /// alongside non-zero ones is kept.
    pub fn undo_last_batch(&mut self) -> Result<(), UndoError> {
        if self.last_batch.is_empty() {
            return Err(UndoError::NothingToUndo);
        }

        for delta in &self.last_batch {
            if let Some(entry) = self.totals.iter_mut().find(|c| c.name == delta.name) {
                entry.total -= delta.value;
            }
        }
        self.submission_count = self.submission_count.saturating_sub(1);
        self.last_batch.clear();

        if self.totals.iter().all(|c| c.total == 0) {
            self.totals.clear();
        }
        Ok(())
    }

    /// Starts a new counting cycle, discarding all totals unconditionally.
    pub fn reset_cycle(&mut self) {
        self.submission_count = 0;
        self.totals.clear();
        self.last_batch.clear();
    }

    /// Read-only state for rendering, totals in first-seen order.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            submission_count: self.submission_count,
            totals: self.totals.clone(),
            max_submissions: Self::MAX_SUBMISSIONS,
        }
    }

    fn apply_delta(&mut self, key: &str, value: i64) {
        match self.totals.iter_mut().find(|c| c.name == key) {
            Some(entry) => entry.total += value,
            None => self.totals.push(CategoryTotal {
                name: key.to_owned(),
                total: value,
            }),
        }
    }
}
