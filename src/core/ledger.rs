use crate::core::amount::Amount;
use crate::core::error::{LedgerError, LedgerResult};

/// The running savings total. The amount saved is finite and never
/// negative; it only decreases through [`Ledger::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ledger {
    saved: Amount,
}

impl Ledger {
    pub fn new() -> Ledger {
        return Ledger { saved: 0.0 };
    }

    /// Rebuilds a ledger from a persisted total. Values that violate
    /// the invariant (negative, infinite, NaN) come back as zero, the
    /// same fallback used for absent storage.
    pub fn restore(saved: Amount) -> Ledger {
        if saved.is_finite() && saved >= 0.0 {
            Ledger { saved }
        } else {
            Ledger::new()
        }
    }

    pub fn saved(&self) -> Amount {
        self.saved
    }

    /// Records a contribution and returns the new total. The amount
    /// and the resulting total must both stay finite.
    pub fn deposit(&mut self, amount: Amount) -> LedgerResult<Amount> {
        if !amount.is_finite() {
            return Err(LedgerError::NonFiniteContribution);
        }
        if amount <= 0.0 {
            return Err(LedgerError::NonPositiveContribution(amount));
        }

        let total = self.saved + amount;
        if !total.is_finite() {
            return Err(LedgerError::OverflowingContribution(amount));
        }

        self.saved = total;
        return Ok(self.saved);
    }

    pub fn reset(&mut self) {
        self.saved = 0.0;
    }
}
