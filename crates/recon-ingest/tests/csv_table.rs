use std::fs;

use recon_ingest::{read_csv_table, read_raw_grid};

#[test]
fn reads_headers_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sales.csv");
    fs::write(
        &path,
        "Order Date,Order ID,SKU,Quantity\n2024-06-01,OD-1,S1,2\n2024-06-02,OD-2,S2,1\n",
    )
    .unwrap();
    let table = read_csv_table(&path).unwrap();
    assert_eq!(
        table.columns,
        vec!["Order Date", "Order ID", "SKU", "Quantity"]
    );
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.value(0, "SKU"), Some("S1"));
    assert_eq!(table.value(1, "Quantity"), Some("1"));
}

#[test]
fn strips_bom_and_normalizes_header_whitespace() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sales.csv");
    fs::write(&path, "\u{feff} Order  Date ,SKU,Quantity\n2024-06-01,S1,2\n").unwrap();
    let table = read_csv_table(&path).unwrap();
    assert_eq!(table.columns[0], "Order Date");
}

#[test]
fn skips_blank_rows_and_pads_ragged_ones() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sales.csv");
    fs::write(&path, "SKU,Quantity\n,\nS1,2,extra\nS2\n").unwrap();
    let table = read_csv_table(&path).unwrap();
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.value(0, "SKU"), Some("S1"));
    assert_eq!(table.value(0, "Quantity"), Some("2"));
    assert_eq!(table.value(1, "SKU"), Some("S2"));
    assert_eq!(table.value(1, "Quantity"), None);
}

#[test]
fn raw_grid_keeps_all_rows_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chronology.csv");
    fs::write(&path, "Chronology,,\n,,\n,sku,msku\n,S1,M1\n").unwrap();
    let grid = read_raw_grid(&path).unwrap();
    // The fully blank row drops; boilerplate and header rows survive.
    assert_eq!(grid.len(), 3);
    assert_eq!(grid[1][1], "sku");
    assert_eq!(grid[2][2], "M1");
}

#[test]
fn empty_file_yields_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "").unwrap();
    let table = read_csv_table(&path).unwrap();
    assert!(table.is_empty());
    assert!(table.columns.is_empty());
}
