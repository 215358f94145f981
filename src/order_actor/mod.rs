//! Order-specific domain logic: the log record, its errors, and the stock check.

pub mod entity;
pub mod error;
pub mod validation;

pub use error::*;
pub use validation::*;
