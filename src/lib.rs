mod backend;
mod core;

pub mod bot;
pub mod config;

pub use crate::backend::{BackendError, JsonStore, LedgerStore};
pub use crate::core::{amount, ledger, progress};
pub use crate::core::{
    format_amount, parse_contribution, Accent, Amount, CardField, Goal, Ledger, LedgerError,
    LedgerResult, ProgressCard, ProgressView,
};
