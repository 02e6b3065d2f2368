use thiserror::Error;

use crate::core::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LedgerError {
    /// Occurs when attempting to deposit a zero or negative amount.
    /// Contributions must be strictly positive.
    #[error("contribution must be positive, got {0}")]
    NonPositiveContribution(Amount),
    /// Occurs when attempting to deposit an infinite or NaN amount,
    /// which would poison the running total.
    #[error("contribution must be a finite amount")]
    NonFiniteContribution,
    /// Occurs when adding an otherwise valid contribution would push
    /// the saved total out of the finite range.
    #[error("contribution {0} would overflow the saved total")]
    OverflowingContribution(Amount),
}

pub type LedgerResult<T> = Result<T, LedgerError>;
