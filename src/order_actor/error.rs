use thiserror::Error;
use crate::actor_framework::FrameworkError;
use crate::inventory::InventoryError;
use super::validation::RejectReason;

/// Errors that can occur while placing or listing orders.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order rejected: {0}")]
    Rejected(RejectReason),
    #[error("Inventory unavailable: {0}")]
    InventoryUnavailable(#[from] InventoryError),
    #[error("Order store error: {0}")]
    Store(#[from] FrameworkError),
}
