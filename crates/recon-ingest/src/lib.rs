pub mod csv_table;
pub mod reference;
pub mod snapshot;

pub use csv_table::{read_csv_table, read_raw_grid};
pub use reference::load_reference_dir;
pub use snapshot::load_stock_snapshot;
