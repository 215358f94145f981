use reqwest::Client;
use tracing::{debug, error, instrument};
use crate::domain::{InventoryResponse, StockSnapshot};
use super::error::InventoryError;

/// Client for the inventory service's stock listing.
///
/// No retries and no caching: every call is one fresh `GET /view_inventory`.
#[derive(Clone)]
pub struct InventoryClient {
    client: Client,
    base_url: String,
}

impl InventoryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn fetch_stock(&self) -> Result<StockSnapshot, InventoryError> {
        debug!("Sending request");
        let response = self.client
            .get(format!("{}/view_inventory", self.base_url))
            .send()
            .await
            .map_err(|e| InventoryError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "Inventory service refused request");
            return Err(InventoryError::Status { status: status.as_u16(), message });
        }

        let body = response.json::<InventoryResponse>().await
            .map_err(|e| InventoryError::Malformed(e.to_string()))?;

        debug!(items = body.inventory.len(), "Stock snapshot received");
        Ok(body.inventory)
    }
}
