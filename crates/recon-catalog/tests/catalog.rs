use recon_catalog::{ReferenceError, ReferenceTables, SkuCatalog};
use recon_model::{ResolvedIdentifier, RowSet};

fn rows(columns: &[&str], data: &[&[&str]]) -> RowSet {
    let mut table = RowSet::new(columns.iter().map(|c| (*c).to_string()).collect());
    for row in data {
        table.push_row(row.iter().map(|c| (*c).to_string()).collect());
    }
    table
}

fn grid(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|row| row.iter().map(|c| (*c).to_string()).collect())
        .collect()
}

fn sample_reference() -> ReferenceTables {
    ReferenceTables {
        // Two boilerplate rows before the real header, which starts in the
        // third column the way the workbook export leaves it.
        chronology: grid(&[
            &["Chronology", "", "", ""],
            &["", "", "", ""],
            &["", "", "sku", "msku"],
            &["", "", "AMZ-S1", "M1"],
            &["", "", "MEESHO-S2 ", "M1"],
            &["", "", "", "M9"],
        ]),
        current_inventory: rows(
            &["msku", "Opening Stock"],
            &[&["M1", "10"], &["M2", "4"], &["COMBO-A", "6"], &["M3", ""]],
        ),
        combos: rows(
            &["Combo", "SKU1", "SKU2", "SKU3"],
            &[&["COMBO-A", "M1", "M2", ""], &["COMBO-B", "M2", "M2", "M3"]],
        ),
        msku_with_skus: rows(
            &["sku", "msku"],
            &[&["FLIP-S3", "M2"], &["AMZ-S1", "M1-NEW"]],
        ),
    }
}

#[test]
fn builds_catalog_from_reference_tables() {
    let catalog = SkuCatalog::from_reference(&sample_reference()).unwrap();
    assert_eq!(catalog.mapping_count(), 3);
    assert_eq!(catalog.combo_count(), 2);
    assert_eq!(catalog.active_count(), 4);
}

#[test]
fn lookup_resolves_both_directions_to_the_same_pair() {
    let catalog = SkuCatalog::from_reference(&sample_reference()).unwrap();
    assert_eq!(
        catalog.lookup("FLIP-S3"),
        ResolvedIdentifier::Sku {
            sku: "FLIP-S3".to_string(),
            msku: "M2".to_string(),
        }
    );
    assert_eq!(
        catalog.lookup("M2"),
        ResolvedIdentifier::Msku {
            sku: "FLIP-S3".to_string(),
            msku: "M2".to_string(),
        }
    );
    assert_eq!(catalog.lookup("NOPE"), ResolvedIdentifier::Unresolved);
}

#[test]
fn later_sources_overwrite_earlier_pairs() {
    // AMZ-S1 -> M1 comes from chronology; msku_with_skus remaps it.
    let catalog = SkuCatalog::from_reference(&sample_reference()).unwrap();
    assert_eq!(catalog.lookup("AMZ-S1").msku(), Some("M1-NEW"));
}

#[test]
fn chronology_values_are_trimmed() {
    let catalog = SkuCatalog::from_reference(&sample_reference()).unwrap();
    assert!(catalog.lookup("MEESHO-S2").is_resolved());
}

#[test]
fn combo_expansion_preserves_order_and_duplicates() {
    let catalog = SkuCatalog::from_reference(&sample_reference()).unwrap();
    assert_eq!(catalog.expand_combo("COMBO-A"), vec!["M1", "M2"]);
    assert_eq!(catalog.expand_combo("COMBO-B"), vec!["M2", "M2", "M3"]);
}

#[test]
fn expand_combo_is_identity_for_non_combos() {
    let catalog = SkuCatalog::from_reference(&sample_reference()).unwrap();
    assert_eq!(catalog.expand_combo("M1"), vec!["M1"]);
    assert!(!catalog.is_combo("M1"));
}

#[test]
fn opening_stock_seeds_the_ledger() {
    let catalog = SkuCatalog::from_reference(&sample_reference()).unwrap();
    assert_eq!(catalog.stock().get("M1"), 10);
    assert_eq!(catalog.stock().get("M2"), 4);
    // Blank stock cell seeds zero, unknown MSKUs read zero.
    assert_eq!(catalog.stock().get("M3"), 0);
    assert_eq!(catalog.stock().get("UNKNOWN"), 0);
}

#[test]
fn active_set_comes_from_current_inventory() {
    let catalog = SkuCatalog::from_reference(&sample_reference()).unwrap();
    assert!(catalog.is_active("COMBO-A"));
    assert!(!catalog.is_active("M9"));
}

#[test]
fn missing_header_anchor_fails_construction() {
    let mut tables = sample_reference();
    tables.chronology = grid(&[&["Chronology", ""], &["stuff", "more"]]);
    let error = SkuCatalog::from_reference(&tables).unwrap_err();
    assert!(matches!(
        error,
        ReferenceError::HeaderAnchorNotFound { sheet } if sheet == "chronology"
    ));
}

#[test]
fn missing_required_column_fails_construction() {
    let mut tables = sample_reference();
    tables.current_inventory = rows(&["item", "stock"], &[&["M1", "10"]]);
    let error = SkuCatalog::from_reference(&tables).unwrap_err();
    assert!(matches!(
        error,
        ReferenceError::MissingColumn { sheet, column }
            if sheet == "current_inventory" && column == "msku"
    ));
}
