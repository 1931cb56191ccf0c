#![deny(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod ledger;
pub mod reference;

pub use catalog::SkuCatalog;
pub use error::ReferenceError;
pub use ledger::StockLedger;
pub use reference::ReferenceTables;
