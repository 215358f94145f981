use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use crate::domain::{CustomerId, Order, OrderCreate};
use super::error::ApiError;
use super::routes::AppState;

/// Body of `POST /place_order`.
#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    pub customer_id: CustomerId,
    pub medicine: String,
    pub quantity: u64,
}

impl PlaceOrderRequest {
    fn into_create(self) -> Result<OrderCreate, ApiError> {
        if self.quantity == 0 {
            return Err(ApiError::invalid_request("quantity must be a positive integer"));
        }
        Ok(OrderCreate {
            customer_id: self.customer_id,
            medicine: self.medicine,
            quantity: self.quantity,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
}

#[instrument(skip_all)]
pub async fn place_order(
    State(state): State<AppState>,
    payload: Result<Json<PlaceOrderRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::invalid_request(rejection.body_text()))?;
    let order = request.into_create()?;

    state.orders.place_order(order).await?;

    Ok(Json(MessageResponse {
        message: "Order placed successfully".to_string(),
    }))
}

#[instrument(skip_all)]
pub async fn view_orders(State(state): State<AppState>) -> Result<Json<OrdersResponse>, ApiError> {
    let orders = state.orders.list_orders().await
        .map_err(|e| ApiError::internal("Could not read orders").with_detail(e))?;
    Ok(Json(OrdersResponse { orders }))
}
