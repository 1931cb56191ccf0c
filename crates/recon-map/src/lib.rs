#![deny(unsafe_code)]

pub mod error;
pub mod infer;
pub mod patterns;

pub use error::SchemaError;
pub use infer::{
    infer_date_column, infer_identity_column, infer_order_column, is_datetime_like,
};
pub use patterns::{date_patterns, load_patterns, order_patterns};
