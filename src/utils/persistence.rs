use std::{fs, path::Path};

use crate::{errors::LedgerError, ledger::Ledger};

/// Writes the ledger snapshot to disk atomically by staging to a temporary file.
pub fn save_ledger_to_file(ledger: &Ledger, path: &Path) -> Result<(), LedgerError> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(ledger)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a ledger snapshot from disk, returning structured errors on failure.
pub fn load_ledger_from_file(path: &Path) -> Result<Ledger, LedgerError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Loads a ledger snapshot, falling back to an empty ledger when the file is
/// missing or unreadable. The fallback is logged, never fatal.
pub fn load_ledger_or_default(path: &Path) -> Ledger {
    if !path.exists() {
        return Ledger::new();
    }
    match load_ledger_from_file(path) {
        Ok(ledger) => ledger,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to load ledger; starting empty");
            Ledger::new()
        }
    }
}
