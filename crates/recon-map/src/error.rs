use thiserror::Error;

/// Batch-fatal schema failures.
///
/// Unlike per-row skips, these abort the whole batch: without an identity
/// column no row can be processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("no SKU/MSKU column found in input")]
    NoIdentityColumn,
}
