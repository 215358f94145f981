use thiserror::Error;

/// The inventory service could not produce a stock snapshot.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// Transport failure: refused, reset, DNS, ...
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Inventory service returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed inventory response: {0}")]
    Malformed(String),
}
