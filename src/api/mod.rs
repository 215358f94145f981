//! HTTP surface of the order service.

pub mod error;
pub mod handlers;
pub mod routes;

pub use routes::*;
