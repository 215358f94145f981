use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{Order, OrderCreate};

impl Entity for Order {
    type CreatePayload = OrderCreate;

    /// Creates a new Order from creation parameters.
    ///
    /// # Notes
    /// The order is always initialized with status `Pending`.
    fn from_create(payload: OrderCreate) -> Result<Self, FrameworkError> {
        Ok(Order::new(payload.customer_id, payload.medicine, payload.quantity))
    }

    /// Refuses zero-quantity orders before they reach the log.
    ///
    /// The HTTP handler already turns these away before the inventory call;
    /// this hook is the backstop for callers that use `OrderClient` directly.
    fn on_create(&mut self) -> Result<(), FrameworkError> {
        if self.quantity == 0 {
            return Err(FrameworkError::Rejected(format!("quantity must be positive for {}", self.medicine)));
        }
        Ok(())
    }
}
