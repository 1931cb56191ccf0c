//! The normalization pipeline.
//!
//! One call processes one batch: infer the batch's columns once, then walk
//! rows in input order through validation, dedup, MSKU resolution (with combo
//! fan-out in direct-MSKU mode), and the stock decrement. A malformed row
//! never fails the run — it is caught, tallied, and skipped; the [`SkipStats`]
//! tally is the user-visible audit trail for data-quality issues.

use std::collections::BTreeSet;

use anyhow::{Result, bail};
use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use recon_catalog::SkuCatalog;
use recon_map::{
    SchemaError, date_patterns, infer_date_column, infer_identity_column, infer_order_column,
    is_datetime_like, order_patterns,
};
use recon_model::{
    NormalizedRecord, RecordSource, RowSet, SkipReason, SkipStats, UNMAPPED_MSKU,
};

use crate::datetime::resolve_sale_date;

/// The one column every batch must carry verbatim.
const QUANTITY_COLUMN: &str = "Quantity";

/// How identifiers in the identity column are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizeMode {
    /// Identifiers are raw marketplace SKUs (possibly MSKUs mixed in);
    /// unresolved rows emit with the `UNMAPPED` placeholder.
    #[default]
    Marketplace,
    /// Identifiers carry MSKUs directly: combo MSKUs fan out into base SKUs
    /// and rows whose MSKU is not in current inventory are dropped.
    DirectMsku,
}

/// Per-batch configuration.
///
/// The clock inputs default to the local clock and are injectable so batch
/// behavior is reproducible under test.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    pub source_label: String,
    pub mode: NormalizeMode,
    pub order_patterns: Vec<String>,
    pub date_patterns: Vec<String>,
    today: NaiveDate,
    batch_stamp: String,
}

impl NormalizeOptions {
    pub fn new(source_label: impl Into<String>) -> Self {
        let now = Local::now();
        Self {
            source_label: source_label.into(),
            mode: NormalizeMode::default(),
            order_patterns: order_patterns(None),
            date_patterns: date_patterns(None),
            today: now.date_naive(),
            batch_stamp: now.format("%Y%m%d%H%M%S").to_string(),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: NormalizeMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_order_patterns(mut self, patterns: Vec<String>) -> Self {
        self.order_patterns = patterns;
        self
    }

    #[must_use]
    pub fn with_date_patterns(mut self, patterns: Vec<String>) -> Self {
        self.date_patterns = patterns;
        self
    }

    /// Pins the fallback date used when a row has no parseable date.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Pins the timestamp suffix of synthesized order ids.
    #[must_use]
    pub fn with_batch_stamp(mut self, stamp: impl Into<String>) -> Self {
        self.batch_stamp = stamp.into();
        self
    }
}

/// Everything one batch run produces. The caller owns both; the pipeline
/// keeps no reference past the call.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub records: Vec<NormalizedRecord>,
    pub stats: SkipStats,
}

/// Columns the batch resolved once up front.
struct BatchColumns {
    identity: String,
    order: Option<String>,
    date: Option<String>,
    date_is_datetime: bool,
}

enum RowVerdict {
    /// Row accepted; one record, or several when a combo fanned out.
    Accepted(Vec<NormalizedRecord>),
    Skipped(SkipReason),
    /// Direct-MSKU mode only: MSKU absent from current inventory is out of
    /// scope, not a defect — excluded without a tally.
    Dropped,
}

/// Normalizes one batch against the catalog, decrementing its stock ledger.
///
/// # Errors
///
/// [`SchemaError`] when no identity column exists — fatal for the whole
/// batch. Everything else degrades to a per-row skip.
pub fn normalize(
    rows: &RowSet,
    catalog: &mut SkuCatalog,
    options: &NormalizeOptions,
) -> Result<BatchOutcome, SchemaError> {
    let identity = infer_identity_column(rows)?.to_string();
    let order = infer_order_column(rows, &options.order_patterns).map(str::to_string);
    let date = infer_date_column(rows, &options.date_patterns).map(str::to_string);
    let date_is_datetime = date.as_deref().is_some_and(is_datetime_like);
    let columns = BatchColumns {
        identity,
        order,
        date,
        date_is_datetime,
    };
    debug!(
        source = %options.source_label,
        identity = %columns.identity,
        order = ?columns.order,
        date = ?columns.date,
        "inferred batch columns"
    );

    let mut outcome = BatchOutcome::default();
    let mut seen: BTreeSet<String> = BTreeSet::new();
    for index in 0..rows.row_count() {
        match process_row(rows, index, &columns, catalog, &mut seen, options) {
            Ok(RowVerdict::Accepted(records)) => {
                outcome.stats.accepted += 1;
                outcome.records.extend(records);
            }
            Ok(RowVerdict::Skipped(reason)) => {
                debug!(row = index, ?reason, "row skipped");
                outcome.stats.tally(reason);
            }
            Ok(RowVerdict::Dropped) => {}
            Err(error) => {
                warn!(row = index, %error, "row failed, skipping");
                outcome.stats.tally(SkipReason::Error);
            }
        }
    }
    info!(
        source = %options.source_label,
        rows = rows.row_count(),
        accepted = outcome.stats.accepted,
        skipped = outcome.stats.skipped(),
        records = outcome.records.len(),
        "batch normalized"
    );
    Ok(outcome)
}

fn process_row(
    rows: &RowSet,
    index: usize,
    columns: &BatchColumns,
    catalog: &mut SkuCatalog,
    seen: &mut BTreeSet<String>,
    options: &NormalizeOptions,
) -> Result<RowVerdict> {
    let Some(identifier) = rows.value(index, &columns.identity) else {
        bail!("identity cell is missing");
    };
    let identifier = identifier.to_string();

    let quantity = match rows.value(index, QUANTITY_COLUMN) {
        None => return Ok(RowVerdict::Skipped(SkipReason::Empty)),
        Some(raw) => match raw.parse::<f64>() {
            Ok(value) if value.is_nan() => return Ok(RowVerdict::Skipped(SkipReason::Empty)),
            Ok(value) => {
                let truncated = value as i64;
                if truncated <= 0 {
                    return Ok(RowVerdict::Skipped(SkipReason::InvalidQuantity));
                }
                truncated as u64
            }
            Err(_) => return Ok(RowVerdict::Skipped(SkipReason::InvalidQuantity)),
        },
    };

    // Intra-batch only: the dedup set dies with this call, so the same SKU
    // across two separate runs is never deduplicated here.
    if seen.contains(&identifier) {
        return Ok(RowVerdict::Skipped(SkipReason::Duplicate));
    }

    let raw_date = columns
        .date
        .as_deref()
        .and_then(|column| rows.value(index, column));
    let date = resolve_sale_date(raw_date, columns.date_is_datetime, options.today);
    if date.is_defaulted() && raw_date.is_some() {
        debug!(row = index, value = ?raw_date, "unparseable date, defaulting to today");
    }
    let date = date.to_ymd_string();

    let order_id = columns
        .order
        .as_deref()
        .and_then(|column| rows.value(index, column))
        .map_or_else(
            || format!("GEN_{}_{}", index, options.batch_stamp),
            str::to_string,
        );

    let records = match options.mode {
        NormalizeMode::Marketplace => {
            let (msku, stock_left) = match catalog.lookup(&identifier).msku() {
                Some(msku) => {
                    let msku = msku.to_string();
                    let stock_left = catalog.stock_mut().decrement(&msku, quantity);
                    (msku, stock_left)
                }
                None => {
                    // Keep the gap visible instead of dropping the row; the
                    // ledger is left alone, a placeholder holds no stock.
                    debug!(row = index, identifier = %identifier, "identifier unmapped");
                    (UNMAPPED_MSKU.to_string(), 0)
                }
            };
            vec![NormalizedRecord {
                date,
                source: RecordSource::Direct.render(&options.source_label),
                sku: identifier.clone(),
                msku,
                quantity,
                order_id,
                stock_left,
            }]
        }
        NormalizeMode::DirectMsku => {
            if !catalog.is_active(&identifier) {
                debug!(row = index, msku = %identifier, "MSKU not in current inventory, dropped");
                return Ok(RowVerdict::Dropped);
            }
            if catalog.is_combo(&identifier) {
                catalog
                    .expand_combo(&identifier)
                    .into_iter()
                    .map(|base| {
                        let stock_left = catalog.stock_mut().decrement(&base, quantity);
                        NormalizedRecord {
                            date: date.clone(),
                            source: RecordSource::ComboExpansion.render(&options.source_label),
                            sku: identifier.clone(),
                            msku: base,
                            quantity,
                            order_id: order_id.clone(),
                            stock_left,
                        }
                    })
                    .collect()
            } else {
                let msku = catalog.map_or_identity(&identifier);
                let stock_left = catalog.stock_mut().decrement(&msku, quantity);
                vec![NormalizedRecord {
                    date,
                    source: RecordSource::Direct.render(&options.source_label),
                    sku: identifier.clone(),
                    msku,
                    quantity,
                    order_id,
                    stock_left,
                }]
            }
        }
    };

    seen.insert(identifier);
    Ok(RowVerdict::Accepted(records))
}
