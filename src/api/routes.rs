use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use crate::clients::OrderClient;
use super::handlers::{place_order, view_orders};

#[derive(Clone)]
pub struct AppState {
    pub orders: OrderClient,
}

pub fn router(orders: OrderClient) -> Router {
    Router::new()
        .route("/place_order", post(place_order))
        .route("/view_orders", get(view_orders))
        .with_state(AppState { orders })
        .layer(TraceLayer::new_for_http())
}
