//! Read-only access to the remote inventory service.

pub mod client;
pub mod error;

pub use client::*;
pub use error::*;
