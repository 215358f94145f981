use std::collections::HashMap;
use serde::Deserialize;

/// Stock figure for one item, as reported by the inventory service.
///
/// Any other per-item fields in the response are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StockLevel {
    pub stock: i64,
}

/// The inventory mapping as observed by a single remote read.
pub type StockSnapshot = HashMap<String, StockLevel>;

/// Body of `GET /view_inventory`.
#[derive(Debug, Deserialize)]
pub struct InventoryResponse {
    pub inventory: StockSnapshot,
}
