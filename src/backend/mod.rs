mod interface;
mod json_store;

pub use interface::{BackendError, LedgerStore, Result};
pub use json_store::JsonStore;
