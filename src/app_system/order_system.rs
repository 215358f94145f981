use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};
use crate::actor_framework::{FrameworkError, LogBackend, ResourceActor};
use crate::clients::OrderClient;
use crate::config::Config;
use crate::domain::Order;
use crate::inventory::InventoryClient;
use crate::storage::JsonFileBackend;

/// The application system that owns the order actor.
///
/// Responsible for starting the actor, wiring the clients to it, and
/// handling shutdown.
pub struct OrderSystem {
    pub order_client: OrderClient,
    handles: Vec<JoinHandle<()>>,
}

impl OrderSystem {
    /// Opens the order log named by the config and starts the order actor.
    pub async fn start(config: &Config) -> Result<Self, FrameworkError> {
        let backend = JsonFileBackend::<Order>::open(&config.orders_file).await?;
        let inventory = InventoryClient::new(config.inventory_api_url.clone());
        info!(
            orders_file = %backend.path().display(),
            inventory = %inventory.base_url(),
            "Starting order system"
        );
        Ok(Self::with_backend(backend, inventory, config.store_buffer_size))
    }

    pub fn with_backend<B: LogBackend<Order>>(
        backend: B,
        inventory: InventoryClient,
        buffer_size: usize,
    ) -> Self {
        let (order_actor, order_resource_client) = ResourceActor::<Order, B>::new(buffer_size, backend);
        let order_client = OrderClient::new(order_resource_client, inventory);
        let order_handle = tokio::spawn(order_actor.run());

        Self {
            order_client,
            handles: vec![order_handle],
        }
    }

    /// Drops this system's clients and waits for the actor to drain.
    ///
    /// The actor only stops once every clone of its client is gone, so the
    /// HTTP server must have released its state first.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
