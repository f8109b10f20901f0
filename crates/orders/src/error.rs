//! Order error types.

use common::{OrderId, ProductId};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// No order exists with the given id.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// The order references a product that does not exist in the catalog.
    #[error("Invalid product ID: {0}")]
    UnknownProduct(ProductId),

    /// Quantity must be at least one.
    #[error("Invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: u32 },

    /// Buyer name must be non-empty.
    #[error("Buyer name must not be empty")]
    EmptyBuyerName,

    /// Contact must be non-empty.
    #[error("Contact must not be empty")]
    EmptyContact,

    /// Delivery address must be non-empty.
    #[error("Address must not be empty")]
    EmptyAddress,
}

/// Result type for order operations.
pub type Result<T> = std::result::Result<T, OrderError>;
