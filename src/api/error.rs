//! Error type bridging order failures and HTTP responses.

use std::fmt;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use crate::actor_framework::FrameworkError;
use crate::order_actor::OrderError;

pub const REJECTED_MESSAGE: &str = "Insufficient stock or medicine not found";
pub const UNAVAILABLE_MESSAGE: &str = "Could not connect to inventory service";
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid order request";

/// Error returned by the handlers.
///
/// `detail` is the underlying cause; it is sent to the caller as `error`
/// when present.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    detail: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl fmt::Display) -> Self {
        self.detail = Some(detail.to_string());
        self
    }

    pub fn invalid_request(detail: impl fmt::Display) -> Self {
        Self::new(StatusCode::BAD_REQUEST, INVALID_REQUEST_MESSAGE).with_detail(detail)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "[{}] {}: {}", self.status, self.message, detail),
            None => write!(f, "[{}] {}", self.status, self.message),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                status = %self.status,
                message = %self.message,
                error = self.detail.as_deref().unwrap_or(""),
                "Request failed"
            );
        }

        let body = ErrorBody {
            message: self.message,
            error: self.detail,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Rejected(_) => Self::new(StatusCode::BAD_REQUEST, REJECTED_MESSAGE),
            OrderError::InventoryUnavailable(e) => {
                Self::new(StatusCode::SERVICE_UNAVAILABLE, UNAVAILABLE_MESSAGE).with_detail(e)
            }
            OrderError::Store(FrameworkError::Rejected(reason)) => Self::invalid_request(reason),
            OrderError::Store(e) => Self::internal("Could not record order").with_detail(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::InventoryError;
    use crate::order_actor::RejectReason;

    #[test]
    fn test_rejection_maps_to_bad_request_without_detail() {
        let err = ApiError::from(OrderError::Rejected(RejectReason::NotFound));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), format!("[400 Bad Request] {}", REJECTED_MESSAGE));
    }

    #[test]
    fn test_inventory_failure_maps_to_unavailable() {
        let err = ApiError::from(OrderError::InventoryUnavailable(InventoryError::RequestFailed(
            "connection refused".into(),
        )));
        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.to_string().ends_with("Request failed: connection refused"));
    }

    #[test]
    fn test_store_failure_maps_to_internal() {
        let err = ApiError::from(OrderError::Store(FrameworkError::ActorClosed));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
