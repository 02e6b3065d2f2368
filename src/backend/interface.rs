use thiserror::Error;

use crate::core::Ledger;

#[derive(Debug, Error)]
pub enum BackendError {
    /// The storage medium itself failed (disk full, permissions...).
    /// Absence of prior state is not an error and never surfaces here.
    #[error("ledger storage failure: {0}")]
    Io(#[from] std::io::Error),
    /// The ledger could not be encoded for storage.
    #[error("ledger could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BackendError>;

/// Durable home of the savings total. Every operation loads the
/// ledger through here, mutates it, and saves it straight back, so
/// the store stays the single source of truth between messages and
/// the process can restart at any point without losing state.
pub trait LedgerStore {
    /// The persisted ledger, or an empty one when no state exists yet.
    fn load(&self) -> Result<Ledger>;

    /// Persists the ledger, fully replacing any prior state.
    fn save(&self, ledger: &Ledger) -> Result<()>;
}
