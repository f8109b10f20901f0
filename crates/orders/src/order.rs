//! Order record and read-time product enrichment.

use catalog::Product;
use chrono::{DateTime, Utc};
use common::{OrderId, ProductId};
use serde::{Deserialize, Serialize};

use crate::error::{OrderError, Result};
use crate::status::OrderStatus;

/// A buyer's request for a quantity of one product, with delivery details.
///
/// Only `status` is mutable after creation, via the store's status-update
/// operation; everything else is set once when the order is placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub buyer_name: String,
    pub contact: String,
    pub address: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Buyer input for placing an order.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub product_id: ProductId,
    pub quantity: u32,
    pub buyer_name: String,
    pub contact: String,
    pub address: String,
}

impl NewOrder {
    /// Creates a new order input.
    pub fn new(
        product_id: ProductId,
        quantity: u32,
        buyer_name: impl Into<String>,
        contact: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            quantity,
            buyer_name: buyer_name.into(),
            contact: contact.into(),
            address: address.into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.quantity == 0 {
            return Err(OrderError::InvalidQuantity {
                quantity: self.quantity,
            });
        }
        if self.buyer_name.trim().is_empty() {
            return Err(OrderError::EmptyBuyerName);
        }
        if self.contact.trim().is_empty() {
            return Err(OrderError::EmptyContact);
        }
        if self.address.trim().is_empty() {
            return Err(OrderError::EmptyAddress);
        }
        Ok(())
    }
}

/// An order augmented at read time with a snapshot of its referenced
/// product. The snapshot is resolved on every read and never stored on the
/// order, so later product edits are always reflected; a deleted product
/// yields no snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedOrder {
    pub order: Order,
    pub product: Option<Product>,
}

impl EnrichedOrder {
    /// Display label for the referenced product, falling back to a label
    /// built from the product id when the product no longer exists.
    pub fn product_label(&self) -> String {
        match &self.product {
            Some(product) => product.name.clone(),
            None => format!("Product #{}", self.order.product_id),
        }
    }
}

/// Resolves the product referenced by an order against a catalog listing.
pub(crate) fn resolve_product(order: &Order, products: &[Product]) -> Option<Product> {
    products.iter().find(|p| p.id == order.product_id).cloned()
}
