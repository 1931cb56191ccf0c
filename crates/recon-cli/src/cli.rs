//! CLI argument definitions for the reconciliation tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sku-recon",
    version,
    about = "Reconcile marketplace sales exports against the MSKU catalog",
    long_about = "Normalize third-party marketplace sales exports against the internal\n\
                  Master SKU catalog: infer identity/order/date columns, validate and\n\
                  deduplicate rows, expand combo products, and decrement the stock ledger."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize one or more sales exports against the reference catalog.
    Process(ProcessArgs),

    /// Print a summary of the mapping catalog.
    Catalog(CatalogArgs),
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Sales export CSV files, each processed as its own batch in order.
    #[arg(value_name = "SALES_CSV", required = true)]
    pub sales_files: Vec<PathBuf>,

    /// Directory holding the four reference sheets (chronology.csv,
    /// current_inventory.csv, combos.csv, msku_with_skus.csv).
    #[arg(long = "reference-dir", value_name = "DIR")]
    pub reference_dir: PathBuf,

    /// Output directory for normalized CSVs (default: next to each input).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON stock snapshot (msku -> quantity) overlaid onto the ledger
    /// before processing, as the authoritative external system of record.
    #[arg(long = "stock-snapshot", value_name = "PATH")]
    pub stock_snapshot: Option<PathBuf>,

    /// Order-id pattern file (one pattern per line, `#` comments).
    #[arg(long = "order-patterns", value_name = "PATH")]
    pub order_patterns: Option<PathBuf>,

    /// Date-column pattern file (one pattern per line, `#` comments).
    #[arg(long = "date-patterns", value_name = "PATH")]
    pub date_patterns: Option<PathBuf>,

    /// Source label recorded on every record (default: each file's stem).
    #[arg(long = "source-label", value_name = "NAME")]
    pub source_label: Option<String>,

    /// Treat the identity column as carrying MSKUs directly: expand combo
    /// MSKUs into their base SKUs and drop MSKUs not in current inventory.
    #[arg(long = "msku-mode")]
    pub msku_mode: bool,

    /// Write a JSON processing report (per-source skip statistics).
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Validate and tally without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// Directory holding the four reference sheets.
    #[arg(long = "reference-dir", value_name = "DIR")]
    pub reference_dir: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
