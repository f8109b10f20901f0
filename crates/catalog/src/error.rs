//! Catalog error types.

use common::{Money, ProductId};
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product exists with the given id.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// Product name must be non-empty.
    #[error("Product name must not be empty")]
    EmptyName,

    /// Price must be greater than zero.
    #[error("Invalid price: {price} (must be greater than 0)")]
    InvalidPrice { price: Money },
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
