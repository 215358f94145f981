use std::fmt;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Caller-supplied customer identifier.
///
/// Never validated: any JSON value is accepted and kept as sent, so the
/// order log echoes it back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub Value);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

impl From<&str> for CustomerId {
    fn from(value: &str) -> Self {
        CustomerId(Value::from(value))
    }
}

impl From<i64> for CustomerId {
    fn from(value: i64) -> Self {
        CustomerId(Value::from(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
}

/// Represents an accepted customer order, as persisted in the order log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub customer_id: CustomerId,
    pub medicine: String,
    pub quantity: u64,
    pub status: OrderStatus,
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: CustomerId,
    pub medicine: String,
    pub quantity: u64,
}

impl Order {
    /// Creates a new order. Every order starts out `Pending`.
    pub fn new(customer_id: impl Into<CustomerId>, medicine: impl Into<String>, quantity: u64) -> Self {
        Self {
            customer_id: customer_id.into(),
            medicine: medicine.into(),
            quantity,
            status: OrderStatus::Pending,
        }
    }
}
