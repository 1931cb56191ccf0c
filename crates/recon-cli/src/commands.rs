use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use recon_catalog::SkuCatalog;
use recon_core::{NormalizeMode, NormalizeOptions, normalize};
use recon_ingest::{load_reference_dir, load_stock_snapshot, read_csv_table};

use recon_cli::output::{output_path, write_records};

use crate::cli::{CatalogArgs, ProcessArgs};
use crate::summary::apply_table_style;
use crate::types::{ProcessResult, SourceSummary};

pub fn run_catalog(args: &CatalogArgs) -> Result<()> {
    let tables = load_reference_dir(&args.reference_dir).context("load reference sheets")?;
    let catalog = SkuCatalog::from_reference(&tables).context("build catalog")?;
    let stock_units: u64 = catalog.stock().levels().values().sum();
    let mut table = Table::new();
    table.set_header(vec!["Catalog", "Count"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        "SKU mappings".to_string(),
        catalog.mapping_count().to_string(),
    ]);
    table.add_row(vec![
        "Combo expansions".to_string(),
        catalog.combo_count().to_string(),
    ]);
    table.add_row(vec![
        "Active MSKUs".to_string(),
        catalog.active_count().to_string(),
    ]);
    table.add_row(vec![
        "Stock entries".to_string(),
        catalog.stock().len().to_string(),
    ]);
    table.add_row(vec!["Stock units".to_string(), stock_units.to_string()]);
    println!("{table}");
    Ok(())
}

pub fn run_process(args: &ProcessArgs) -> Result<ProcessResult> {
    let span = info_span!("process", reference_dir = %args.reference_dir.display());
    let _guard = span.enter();

    // =========================================================================
    // Stage 0: Build the catalog, overlay the external stock snapshot
    // =========================================================================
    let tables = load_reference_dir(&args.reference_dir).context("load reference sheets")?;
    let mut catalog = SkuCatalog::from_reference(&tables).context("build catalog")?;

    if let Some(path) = &args.stock_snapshot {
        let snapshot = load_stock_snapshot(path).context("load stock snapshot")?;
        info!(entries = snapshot.len(), "overlaying external stock snapshot");
        catalog.stock_mut().overlay(&snapshot);
    }

    let order_patterns = recon_map::order_patterns(args.order_patterns.as_deref());
    let date_patterns = recon_map::date_patterns(args.date_patterns.as_deref());
    let mode = if args.msku_mode {
        NormalizeMode::DirectMsku
    } else {
        NormalizeMode::Marketplace
    };

    if let Some(dir) = &args.output_dir
        && !args.dry_run
    {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output dir: {}", dir.display()))?;
    }

    // =========================================================================
    // Stage 1: One batch per sales file, sharing the catalog and its ledger
    // =========================================================================
    let mut sources = Vec::new();
    let mut errors = Vec::new();
    for file in &args.sales_files {
        let label = args
            .source_label
            .clone()
            .unwrap_or_else(|| derive_source_label(file));
        match process_file(args, file, &label, mode, &order_patterns, &date_patterns, &mut catalog)
        {
            Ok(summary) => sources.push(summary),
            Err(error) => errors.push(format!("{}: {error:#}", file.display())),
        }
    }

    if let Some(path) = &args.report {
        let json = serde_json::to_string_pretty(&sources).context("serialize report")?;
        std::fs::write(path, json).with_context(|| format!("write report: {}", path.display()))?;
    }

    let has_errors = !errors.is_empty();
    Ok(ProcessResult {
        sources,
        errors,
        has_errors,
    })
}

fn process_file(
    args: &ProcessArgs,
    file: &Path,
    label: &str,
    mode: NormalizeMode,
    order_patterns: &[String],
    date_patterns: &[String],
    catalog: &mut SkuCatalog,
) -> Result<SourceSummary> {
    let table = read_csv_table(file)?;
    info!(source = %label, rows = table.row_count(), "processing batch");
    let options = NormalizeOptions::new(label)
        .with_mode(mode)
        .with_order_patterns(order_patterns.to_vec())
        .with_date_patterns(date_patterns.to_vec());
    let outcome = normalize(&table, catalog, &options)?;
    let output = if args.dry_run {
        None
    } else {
        let path = output_path(file, args.output_dir.as_deref());
        write_records(&path, &outcome.records)?;
        Some(path)
    };
    Ok(SourceSummary {
        source: label.to_string(),
        rows: table.row_count(),
        records: outcome.records.len(),
        stats: outcome.stats,
        output,
    })
}

fn derive_source_label(file: &Path) -> String {
    file.file_stem()
        .and_then(|value| value.to_str())
        .unwrap_or("sales")
        .to_string()
}
