//! Loading the reference "workbook": a directory holding one CSV per sheet,
//! discovered by fixed role names.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use tracing::debug;

use recon_catalog::ReferenceTables;

use crate::csv_table::{read_csv_table, read_raw_grid};

pub const CHRONOLOGY_FILE: &str = "chronology.csv";
pub const CURRENT_INVENTORY_FILE: &str = "current_inventory.csv";
pub const COMBOS_FILE: &str = "combos.csv";
pub const MSKU_WITH_SKUS_FILE: &str = "msku_with_skus.csv";

/// Loads the four reference sheets from `dir`.
///
/// # Errors
///
/// Fails when a sheet file is absent or unreadable; the catalog's own format
/// checks run later, at construction.
pub fn load_reference_dir(dir: &Path) -> Result<ReferenceTables> {
    let tables = ReferenceTables {
        chronology: read_raw_grid(&required(dir, CHRONOLOGY_FILE)?)?,
        current_inventory: read_csv_table(&required(dir, CURRENT_INVENTORY_FILE)?)?,
        combos: read_csv_table(&required(dir, COMBOS_FILE)?)?,
        msku_with_skus: read_csv_table(&required(dir, MSKU_WITH_SKUS_FILE)?)?,
    };
    debug!(dir = %dir.display(), "loaded reference sheets");
    Ok(tables)
}

fn required(dir: &Path, name: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if !path.is_file() {
        bail!(
            "missing reference sheet '{name}' in {}",
            dir.display()
        );
    }
    Ok(path)
}
