#![deny(unsafe_code)]

pub mod datetime;
pub mod pipeline;

pub use datetime::{DateResolution, resolve_sale_date};
pub use pipeline::{BatchOutcome, NormalizeMode, NormalizeOptions, normalize};
