//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cart::CheckoutError;
use catalog::CatalogError;
use orders::OrderError;

/// API-level error type that maps onto HTTP responses.
///
/// Error bodies are `{"message": "..."}`, matching what the API clients
/// present to buyers and operators.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from the client.
    BadRequest(String),
    /// Internal server error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = serde_json::json!({ "message": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match &err {
            CatalogError::NotFound(_) => ApiError::NotFound(err.to_string()),
            CatalogError::EmptyName | CatalogError::InvalidPrice { .. } => {
                ApiError::BadRequest(err.to_string())
            }
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match &err {
            OrderError::NotFound(_) => ApiError::NotFound(err.to_string()),
            OrderError::UnknownProduct(_)
            | OrderError::InvalidQuantity { .. }
            | OrderError::EmptyBuyerName
            | OrderError::EmptyContact
            | OrderError::EmptyAddress => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::EmptyCart => ApiError::BadRequest(err.to_string()),
            CheckoutError::Order(inner) => inner.into(),
        }
    }
}
