use std::fmt;
use crate::domain::StockSnapshot;

/// Why an order was turned away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    NotFound,
    InsufficientStock { requested: u64, available: i64 },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::NotFound => f.write_str("not found"),
            RejectReason::InsufficientStock { requested, available } => {
                write!(f, "insufficient stock: requested {}, available {}", requested, available)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Accept,
    Reject(RejectReason),
}

/// Checks a requested quantity against a stock snapshot.
///
/// The snapshot may already be stale; nothing here reserves stock.
pub fn validate(medicine: &str, quantity: u64, snapshot: &StockSnapshot) -> Validation {
    let Some(level) = snapshot.get(medicine) else {
        return Validation::Reject(RejectReason::NotFound);
    };
    // Quantities past i64::MAX exceed any stock figure
    if i64::try_from(quantity).map_or(true, |q| q > level.stock) {
        return Validation::Reject(RejectReason::InsufficientStock {
            requested: quantity,
            available: level.stock,
        });
    }
    Validation::Accept
}
