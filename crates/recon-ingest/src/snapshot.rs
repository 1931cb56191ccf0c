use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

/// Loads an external stock snapshot: a JSON object of `msku -> quantity`,
/// used to resync the ledger with a system of record before a batch run.
pub fn load_stock_snapshot(path: &Path) -> Result<BTreeMap<String, u64>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read stock snapshot: {}", path.display()))?;
    let snapshot: BTreeMap<String, u64> = serde_json::from_str(&contents)
        .with_context(|| format!("parse stock snapshot: {}", path.display()))?;
    Ok(snapshot)
}
