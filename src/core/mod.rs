pub mod amount;
pub mod error;
pub mod ledger;
pub mod progress;

pub use amount::{format_amount, parse_contribution, Amount};
pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
pub use progress::{Accent, CardField, Goal, ProgressCard, ProgressView};
