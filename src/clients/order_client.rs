use tracing::{debug, error, info, instrument, warn};
use crate::actor_framework::ResourceClient;
use crate::domain::{Order, OrderCreate};
use crate::inventory::InventoryClient;
use crate::order_actor::{validate, OrderError, Validation};

/// Client for placing and listing orders.
///
/// This client handles the orchestration: it takes a stock snapshot from the
/// inventory service and validates against it before the order actor
/// records anything.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    inventory: InventoryClient,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, inventory: InventoryClient) -> Self {
        Self { inner, inventory }
    }

    /// Checks stock, then appends a `Pending` order to the log.
    ///
    /// Stock is only read, never decremented, so two concurrent requests can
    /// both be accepted against the same figure.
    #[instrument(skip(self, order), fields(customer_id = %order.customer_id, medicine = %order.medicine, quantity = order.quantity))]
    pub async fn place_order(&self, order: OrderCreate) -> Result<Order, OrderError> {
        info!("Processing place_order request");

        // Step 1: Take a stock snapshot
        let snapshot = self.inventory.fetch_stock().await.map_err(|e| {
            error!(error = %e, "Inventory check failed");
            OrderError::InventoryUnavailable(e)
        })?;

        // Step 2: Validate against it
        if let Validation::Reject(reason) = validate(&order.medicine, order.quantity, &snapshot) {
            warn!(reason = %reason, "Order rejected");
            return Err(OrderError::Rejected(reason));
        }

        // Step 3: Record the order
        let order = self.inner.create(order).await?;
        info!("Order placed successfully");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        Ok(self.inner.list().await?)
    }
}
