use std::path::PathBuf;

use serde::Serialize;

use recon_model::SkipStats;

#[derive(Debug)]
pub struct ProcessResult {
    pub sources: Vec<SourceSummary>,
    pub errors: Vec<String>,
    pub has_errors: bool,
}

/// Per-source outcome; also the shape of the `--report` JSON entries.
#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    pub source: String,
    pub rows: usize,
    pub records: usize,
    #[serde(flatten)]
    pub stats: SkipStats,
    pub output: Option<PathBuf>,
}
