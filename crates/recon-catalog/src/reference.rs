use recon_model::RowSet;

/// Already-parsed reference tables extracted from the workbook-like source.
///
/// Loading (file decoding, sheet discovery) belongs to an ingestion
/// collaborator; the catalog only consumes tabular data and performs no I/O.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    /// Raw grid: the real sku/msku header sits below leading boilerplate
    /// rows, so no header interpretation is applied at ingest time.
    pub chronology: Vec<Vec<String>>,
    /// Active MSKUs and opening stock levels.
    pub current_inventory: RowSet,
    /// Combo MSKU with its base SKUs spread across `SKU1..SKUn` columns.
    pub combos: RowSet,
    /// Explicit sku/msku pair table; overrides chronology on collision.
    pub msku_with_skus: RowSet,
}
