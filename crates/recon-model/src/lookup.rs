/// Result of resolving an identifier that may be either a marketplace SKU or
/// a master SKU.
///
/// Real input files mix raw marketplace SKUs and internal MSKUs in the same
/// column across sources, so the catalog resolves both directions and reports
/// which kind the identifier was. Both resolved variants carry the full
/// (sku, msku) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedIdentifier {
    /// Identifier is a registered marketplace SKU.
    Sku { sku: String, msku: String },
    /// Identifier is a registered master SKU.
    Msku { sku: String, msku: String },
    /// Identifier is not known in either direction.
    Unresolved,
}

impl ResolvedIdentifier {
    /// The resolved master SKU, if any.
    #[must_use]
    pub fn msku(&self) -> Option<&str> {
        match self {
            Self::Sku { msku, .. } | Self::Msku { msku, .. } => Some(msku),
            Self::Unresolved => None,
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved)
    }
}
