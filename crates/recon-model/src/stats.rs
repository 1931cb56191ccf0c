use serde::{Deserialize, Serialize};

/// Why a row was excluded from a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Quantity cell missing, blank, or NaN.
    Empty,
    /// Identifier already accepted earlier in the same batch.
    Duplicate,
    /// Quantity not a positive integer after numeric coercion.
    InvalidQuantity,
    /// Unexpected row-level failure, caught so the batch survives.
    Error,
}

/// Per-batch audit counters. Every input row lands in exactly one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipStats {
    pub empty: usize,
    pub duplicate: usize,
    pub invalid_quantity: usize,
    pub error: usize,
    pub accepted: usize,
}

impl SkipStats {
    pub fn tally(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::Empty => self.empty += 1,
            SkipReason::Duplicate => self.duplicate += 1,
            SkipReason::InvalidQuantity => self.invalid_quantity += 1,
            SkipReason::Error => self.error += 1,
        }
    }

    /// Rows excluded from output for any reason.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.empty + self.duplicate + self.invalid_quantity + self.error
    }

    /// All rows the batch examined.
    #[must_use]
    pub fn total_seen(&self) -> usize {
        self.skipped() + self.accepted
    }

    pub fn merge(&mut self, other: &SkipStats) {
        self.empty += other.empty;
        self.duplicate += other.duplicate;
        self.invalid_quantity += other.invalid_quantity;
        self.error += other.error;
        self.accepted += other.accepted;
    }
}
