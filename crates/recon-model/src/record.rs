use serde::{Deserialize, Serialize};

/// Placeholder MSKU for identifiers the catalog cannot resolve.
///
/// Unresolved rows are emitted with this marker instead of being dropped so
/// reconciliation gaps stay visible in the output.
pub const UNMAPPED_MSKU: &str = "UNMAPPED";

/// How a record's MSKU was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    /// Single-record path: identifier resolved (or left unmapped) as-is.
    Direct,
    /// Record produced by fanning a combo MSKU out into a base SKU.
    ComboExpansion,
}

impl RecordSource {
    /// Renders the record's `source` field, tagging combo-expanded records.
    #[must_use]
    pub fn render(&self, source_label: &str) -> String {
        match self {
            Self::Direct => source_label.to_string(),
            Self::ComboExpansion => format!("{source_label} (combo)"),
        }
    }
}

/// One normalized output row.
///
/// Produced exactly once per accepted input row, or once per base SKU when
/// the identifier expands to a combo. Serde renames give the CSV export its
/// human-facing headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Sale date, always `YYYY-MM-DD`.
    #[serde(rename = "Date")]
    pub date: String,
    /// Batch source label, combo-tagged for expanded records.
    #[serde(rename = "Source")]
    pub source: String,
    /// Raw identifier as seen in the input row.
    #[serde(rename = "SKU")]
    pub sku: String,
    /// Resolved master SKU, a combo constituent, or [`UNMAPPED_MSKU`].
    #[serde(rename = "MSKU")]
    pub msku: String,
    #[serde(rename = "Quantity")]
    pub quantity: u64,
    #[serde(rename = "Order ID")]
    pub order_id: String,
    /// Ledger quantity remaining after this record's decrement.
    #[serde(rename = "Stock Left")]
    pub stock_left: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_render_tags_combos() {
        assert_eq!(RecordSource::Direct.render("amazon"), "amazon");
        assert_eq!(
            RecordSource::ComboExpansion.render("amazon"),
            "amazon (combo)"
        );
    }
}
