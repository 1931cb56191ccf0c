//! The mapping catalog: sku↔msku pairs, combo expansions, the active-MSKU
//! set, and the embedded stock ledger.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use recon_model::{ResolvedIdentifier, RowSet};

use crate::error::ReferenceError;
use crate::ledger::StockLedger;
use crate::reference::ReferenceTables;

const SHEET_CHRONOLOGY: &str = "chronology";
const SHEET_CURRENT_INVENTORY: &str = "current_inventory";
const SHEET_COMBOS: &str = "combos";
const SHEET_MSKU_WITH_SKUS: &str = "msku_with_skus";

/// Candidate opening-stock column names in the current-inventory sheet,
/// probed in order.
const STOCK_COLUMNS: &[&str] = &["opening stock", "stock", "quantity", "qty"];

/// Catalog of SKU→MSKU mappings built from the reference workbook.
///
/// After construction the mapping tables are immutable; only the embedded
/// [`StockLedger`] mutates, through its decrement and overlay operations.
/// The ledger's lifetime is the catalog's — callers needing isolated batches
/// construct independent catalogs.
#[derive(Debug, Clone, Default)]
pub struct SkuCatalog {
    sku_to_msku: BTreeMap<String, String>,
    msku_to_sku: BTreeMap<String, String>,
    combo_expansion: BTreeMap<String, Vec<String>>,
    active_mskus: BTreeSet<String>,
    stock: StockLedger,
}

impl SkuCatalog {
    /// Builds the catalog from already-parsed reference tables.
    ///
    /// Pair sources load in a fixed order — chronology first, then the
    /// explicit msku-with-skus table — and later sources overwrite earlier
    /// ones on key collision.
    ///
    /// # Errors
    ///
    /// [`ReferenceError`] when a required column is absent or the chronology
    /// header anchor cannot be located. No partial catalog is returned.
    pub fn from_reference(tables: &ReferenceTables) -> Result<Self, ReferenceError> {
        let mut catalog = Self::default();
        catalog.load_chronology(&tables.chronology)?;
        catalog.load_msku_with_skus(&tables.msku_with_skus)?;
        catalog.load_combos(&tables.combos)?;
        catalog.load_current_inventory(&tables.current_inventory)?;
        info!(
            mappings = catalog.sku_to_msku.len(),
            combos = catalog.combo_expansion.len(),
            active_mskus = catalog.active_mskus.len(),
            "catalog built"
        );
        Ok(catalog)
    }

    /// Resolves an identifier bidirectionally: SKU direction first, then
    /// MSKU, else unresolved.
    #[must_use]
    pub fn lookup(&self, identifier: &str) -> ResolvedIdentifier {
        let identifier = identifier.trim();
        if let Some(msku) = self.sku_to_msku.get(identifier) {
            return ResolvedIdentifier::Sku {
                sku: identifier.to_string(),
                msku: msku.clone(),
            };
        }
        if let Some(sku) = self.msku_to_sku.get(identifier) {
            return ResolvedIdentifier::Msku {
                sku: sku.clone(),
                msku: identifier.to_string(),
            };
        }
        ResolvedIdentifier::Unresolved
    }

    /// The registered expansion sequence for a combo MSKU, or the identity
    /// single-element sequence: every MSKU is trivially its own expansion.
    #[must_use]
    pub fn expand_combo(&self, msku: &str) -> Vec<String> {
        self.combo_expansion
            .get(msku)
            .cloned()
            .unwrap_or_else(|| vec![msku.to_string()])
    }

    #[must_use]
    pub fn is_combo(&self, msku: &str) -> bool {
        self.combo_expansion.contains_key(msku)
    }

    /// Whether `msku` appears in the current-inventory sheet.
    #[must_use]
    pub fn is_active(&self, msku: &str) -> bool {
        self.active_mskus.contains(msku)
    }

    /// Maps a marketplace SKU to its MSKU, falling back to the input itself
    /// when no mapping is registered.
    #[must_use]
    pub fn map_or_identity(&self, identifier: &str) -> String {
        self.sku_to_msku
            .get(identifier)
            .cloned()
            .unwrap_or_else(|| identifier.to_string())
    }

    #[must_use]
    pub fn stock(&self) -> &StockLedger {
        &self.stock
    }

    pub fn stock_mut(&mut self) -> &mut StockLedger {
        &mut self.stock
    }

    #[must_use]
    pub fn mapping_count(&self) -> usize {
        self.sku_to_msku.len()
    }

    #[must_use]
    pub fn combo_count(&self) -> usize {
        self.combo_expansion.len()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active_mskus.len()
    }

    /// Chronology carries boilerplate above the real header; anchor on the
    /// first row with a cell literally equal to `sku` (case-insensitive).
    /// That cell's column holds SKUs and the next column MSKUs.
    fn load_chronology(&mut self, grid: &[Vec<String>]) -> Result<(), ReferenceError> {
        let (anchor_row, sku_col) = grid
            .iter()
            .enumerate()
            .find_map(|(row_index, row)| {
                row.iter()
                    .position(|cell| cell.trim().eq_ignore_ascii_case("sku"))
                    .map(|col_index| (row_index, col_index))
            })
            .ok_or_else(|| ReferenceError::HeaderAnchorNotFound {
                sheet: SHEET_CHRONOLOGY.to_string(),
            })?;
        let msku_col = sku_col + 1;
        let mut pairs = 0usize;
        for row in grid.iter().skip(anchor_row + 1) {
            let sku = row.get(sku_col).map_or("", |cell| cell.trim());
            let msku = row.get(msku_col).map_or("", |cell| cell.trim());
            if self.insert_pair(sku, msku) {
                pairs += 1;
            }
        }
        debug!(pairs, "loaded chronology pairs");
        Ok(())
    }

    fn load_msku_with_skus(&mut self, rows: &RowSet) -> Result<(), ReferenceError> {
        let sku_col = require_column(rows, SHEET_MSKU_WITH_SKUS, "sku")?;
        let msku_col = require_column(rows, SHEET_MSKU_WITH_SKUS, "msku")?;
        let mut pairs = 0usize;
        for index in 0..rows.row_count() {
            let sku = rows.value(index, &sku_col).unwrap_or("");
            let msku = rows.value(index, &msku_col).unwrap_or("");
            if self.insert_pair(sku, msku) {
                pairs += 1;
            }
        }
        debug!(pairs, "loaded explicit sku/msku pairs");
        Ok(())
    }

    /// One combo column plus `SKU1..SKUn` base columns. Base SKUs append in
    /// column order; duplicates are preserved.
    fn load_combos(&mut self, rows: &RowSet) -> Result<(), ReferenceError> {
        let combo_col = require_column(rows, SHEET_COMBOS, "combo")?;
        let base_cols: Vec<String> = rows
            .columns
            .iter()
            .filter(|column| column.to_lowercase().starts_with("sku"))
            .cloned()
            .collect();
        for index in 0..rows.row_count() {
            let Some(combo) = rows.value(index, &combo_col) else {
                continue;
            };
            let combo = combo.to_string();
            for column in &base_cols {
                if let Some(base) = rows.value(index, column) {
                    self.combo_expansion
                        .entry(combo.clone())
                        .or_default()
                        .push(base.to_string());
                }
            }
        }
        debug!(combos = self.combo_expansion.len(), "loaded combo expansions");
        Ok(())
    }

    fn load_current_inventory(&mut self, rows: &RowSet) -> Result<(), ReferenceError> {
        let msku_col = require_column(rows, SHEET_CURRENT_INVENTORY, "msku")?;
        let stock_col = STOCK_COLUMNS
            .iter()
            .find_map(|name| find_column(rows, name));
        for index in 0..rows.row_count() {
            let Some(msku) = rows.value(index, &msku_col) else {
                continue;
            };
            self.active_mskus.insert(msku.to_string());
            let quantity = stock_col
                .as_deref()
                .and_then(|column| rows.value(index, column))
                .and_then(parse_quantity)
                .unwrap_or(0);
            self.stock.seed(msku, quantity);
        }
        debug!(active_mskus = self.active_mskus.len(), "loaded current inventory");
        Ok(())
    }

    /// Inserts a trimmed pair in both directions. Empty sides are never
    /// inserted; later calls overwrite earlier ones (last-write-wins).
    fn insert_pair(&mut self, sku: &str, msku: &str) -> bool {
        let sku = sku.trim();
        let msku = msku.trim();
        if sku.is_empty() || msku.is_empty() {
            return false;
        }
        self.sku_to_msku.insert(sku.to_string(), msku.to_string());
        self.msku_to_sku.insert(msku.to_string(), sku.to_string());
        true
    }
}

fn find_column(rows: &RowSet, name: &str) -> Option<String> {
    rows.columns
        .iter()
        .find(|column| column.trim().eq_ignore_ascii_case(name))
        .cloned()
}

fn require_column(rows: &RowSet, sheet: &str, name: &str) -> Result<String, ReferenceError> {
    find_column(rows, name).ok_or_else(|| ReferenceError::missing_column(sheet, name))
}

/// Numeric coercion for opening stock: parse as float, truncate, clamp
/// non-finite and negative values to zero.
fn parse_quantity(raw: &str) -> Option<u64> {
    let value = raw.trim().parse::<f64>().ok()?;
    if !value.is_finite() || value <= 0.0 {
        return Some(0);
    }
    Some(value as u64)
}
