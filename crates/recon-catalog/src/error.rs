use thiserror::Error;

/// Construction-time reference-format failures.
///
/// Fatal: no partial catalog is usable, the error propagates to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("reference sheet '{sheet}' is missing required column '{column}'")]
    MissingColumn { sheet: String, column: String },

    #[error("could not locate the sku/msku header row in reference sheet '{sheet}'")]
    HeaderAnchorNotFound { sheet: String },
}

impl ReferenceError {
    pub(crate) fn missing_column(sheet: &str, column: &str) -> Self {
        Self::MissingColumn {
            sheet: sheet.to_string(),
            column: column.to_string(),
        }
    }
}
