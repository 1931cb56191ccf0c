//! End-to-end: reference sheets and a sales export on disk, through the
//! catalog and pipeline, back out as a normalized CSV.

use std::fs;

use chrono::NaiveDate;

use recon_catalog::SkuCatalog;
use recon_cli::output::{output_path, write_records};
use recon_core::{NormalizeOptions, normalize};
use recon_ingest::{load_reference_dir, load_stock_snapshot, read_csv_table};

#[test]
fn sales_export_round_trips_to_normalized_csv() {
    let dir = tempfile::tempdir().unwrap();
    let reference = dir.path().join("reference");
    fs::create_dir(&reference).unwrap();
    fs::write(
        reference.join("chronology.csv"),
        "Chronology,,\n,sku,msku\n,S1,M1\n",
    )
    .unwrap();
    fs::write(
        reference.join("current_inventory.csv"),
        "msku,Opening Stock\nM1,10\n",
    )
    .unwrap();
    fs::write(reference.join("combos.csv"), "Combo,SKU1\n").unwrap();
    fs::write(reference.join("msku_with_skus.csv"), "sku,msku\nS2,M1\n").unwrap();

    let sales = dir.path().join("meesho.csv");
    fs::write(
        &sales,
        "Order Date,Order ID,SKU,Quantity\n2024-06-01,OD-1,S1,4\n2024-06-02,OD-2,S2,3\nbad,OD-3,S1,1\n",
    )
    .unwrap();

    let snapshot_path = dir.path().join("stock.json");
    fs::write(&snapshot_path, r#"{"M1": 9}"#).unwrap();

    let tables = load_reference_dir(&reference).unwrap();
    let mut catalog = SkuCatalog::from_reference(&tables).unwrap();
    catalog
        .stock_mut()
        .overlay(&load_stock_snapshot(&snapshot_path).unwrap());

    let batch = read_csv_table(&sales).unwrap();
    let options = NormalizeOptions::new("meesho")
        .with_today(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    let outcome = normalize(&batch, &mut catalog, &options).unwrap();
    // Third row is a duplicate of S1 and must not appear.
    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.stats.duplicate, 1);
    // Snapshot overlay made 9 the authoritative level: 9 - 4 = 5, 5 - 3 = 2.
    assert_eq!(outcome.records[0].stock_left, 5);
    assert_eq!(outcome.records[1].stock_left, 2);

    let out = output_path(&sales, None);
    write_records(&out, &outcome.records).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    let mut lines = written.lines();
    assert_eq!(
        lines.next(),
        Some("Date,Source,SKU,MSKU,Quantity,Order ID,Stock Left")
    );
    assert_eq!(lines.next(), Some("2024-06-01,meesho,S1,M1,4,OD-1,5"));
    assert_eq!(lines.next(), Some("2024-06-02,meesho,S2,M1,3,OD-2,2"));
}
