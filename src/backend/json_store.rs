use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::backend::interface::{LedgerStore, Result};
use crate::core::{Amount, Ledger};

/// On-disk shape of the ledger: `{"saved": <number>}`. A missing
/// `saved` field falls back to zero, and content that is not this
/// shape at all counts as absent state rather than as an error.
#[derive(Debug, Default, Serialize, Deserialize)]
struct LedgerRecord {
    #[serde(default)]
    saved: Amount,
}

/// Keeps the ledger in a small human-readable JSON file.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl AsRef<Path>) -> JsonStore {
        return JsonStore {
            path: path.as_ref().to_path_buf(),
        };
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn scratch_path(&self) -> PathBuf {
        let mut scratch = self.path.clone().into_os_string();
        scratch.push(".tmp");
        return PathBuf::from(scratch);
    }
}

impl LedgerStore for JsonStore {
    fn load(&self) -> Result<Ledger> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Ledger::new()),
            Err(err) => return Err(err.into()),
        };

        let record: LedgerRecord = match serde_json::from_str(&content) {
            Ok(record) => record,
            Err(err) => {
                warn!(
                    "ledger file {} is not a ledger record ({}), treating it as empty",
                    self.path.display(),
                    err
                );
                LedgerRecord::default()
            }
        };

        return Ok(Ledger::restore(record.saved));
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        let record = LedgerRecord {
            saved: ledger.saved(),
        };
        let content = serde_json::to_string_pretty(&record)?;

        // Write the whole record to a scratch file first, then move it
        // over the real one, so a concurrent load never observes a
        // partially written ledger.
        let scratch = self.scratch_path();
        fs::write(&scratch, content)?;
        fs::rename(&scratch, &self.path)?;

        return Ok(());
    }
}
