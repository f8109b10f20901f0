//! Checkout assembly: turns buyer input plus selections into persisted
//! orders.
//!
//! Both entry paths go through [`OrderStore::create`]: the single-product
//! order form submits one line directly, and a cart expands into one order
//! per line (an order references exactly one product).

use common::ProductId;
use orders::{EnrichedOrder, NewOrder, OrderError, OrderStore};
use thiserror::Error;

use crate::cart::Cart;

/// Delivery details captured from the buyer at checkout.
#[derive(Debug, Clone)]
pub struct ShippingDetails {
    pub buyer_name: String,
    pub contact: String,
    pub address: String,
}

impl ShippingDetails {
    /// Creates shipping details from buyer input.
    pub fn new(
        buyer_name: impl Into<String>,
        contact: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            buyer_name: buyer_name.into(),
            contact: contact.into(),
            address: address.into(),
        }
    }
}

/// Errors that can occur during checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout was attempted with no lines in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// The order store rejected a submission.
    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Result type for checkout operations.
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Submits a single-product order straight from the order form.
#[tracing::instrument(skip(store, details), fields(buyer = %details.buyer_name))]
pub async fn submit_single_order(
    store: &OrderStore,
    product_id: ProductId,
    quantity: u32,
    details: &ShippingDetails,
) -> Result<EnrichedOrder> {
    let placed = store.create(order_for(product_id, quantity, details)).await?;
    Ok(placed)
}

/// Submits every cart line as its own order, sharing the shipping details.
///
/// Every line is checked against the catalog before the first create, so a
/// stale cart does not leave a partial batch behind. The cart is cleared
/// only after all lines have been persisted.
#[tracing::instrument(
    skip(store, cart, details),
    fields(lines = cart.lines().len(), buyer = %details.buyer_name)
)]
pub async fn submit_cart(
    store: &OrderStore,
    cart: &mut Cart,
    details: &ShippingDetails,
) -> Result<Vec<EnrichedOrder>> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    for line in cart.lines() {
        if store.catalog().get(line.product_id).await.is_err() {
            return Err(OrderError::UnknownProduct(line.product_id).into());
        }
    }

    let mut placed = Vec::with_capacity(cart.lines().len());
    for line in cart.lines() {
        placed.push(
            store
                .create(order_for(line.product_id, line.quantity, details))
                .await?,
        );
    }

    cart.clear();
    tracing::info!(orders = placed.len(), "cart checked out");
    Ok(placed)
}

fn order_for(product_id: ProductId, quantity: u32, details: &ShippingDetails) -> NewOrder {
    NewOrder::new(
        product_id,
        quantity,
        details.buyer_name.clone(),
        details.contact.clone(),
        details.address.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{NewProduct, ProductCatalogStore};
    use common::Money;
    use orders::OrderStatus;

    async fn market() -> (ProductCatalogStore, OrderStore) {
        let catalog = ProductCatalogStore::new();
        catalog
            .create(NewProduct::new("Kale", Money::from_cents(250)))
            .await
            .unwrap();
        catalog
            .create(NewProduct::new("Fresh Tomatoes", Money::from_cents(199)))
            .await
            .unwrap();
        let orders = OrderStore::new(catalog.clone());
        (catalog, orders)
    }

    fn jane() -> ShippingDetails {
        ShippingDetails::new("Jane Smith", "555-123-4567", "456 Elm St")
    }

    #[tokio::test]
    async fn single_order_path_persists_through_the_store() {
        let (_, orders) = market().await;

        let placed = submit_single_order(&orders, ProductId::new(1), 10, &jane())
            .await
            .unwrap();

        assert_eq!(placed.order.status, OrderStatus::Pending);
        assert_eq!(placed.order.buyer_name, "Jane Smith");
        assert_eq!(orders.count().await, 1);
        assert!(orders.get(placed.order.id).await.is_ok());
    }

    #[tokio::test]
    async fn cart_checkout_creates_one_order_per_line_and_clears_the_cart() {
        let (catalog, orders) = market().await;

        let mut cart = Cart::new();
        for product in catalog.list().await {
            cart.add_item(&product, 2);
        }

        let placed = submit_cart(&orders, &mut cart, &jane()).await.unwrap();

        assert_eq!(placed.len(), 2);
        assert!(cart.is_empty());
        assert_eq!(orders.count().await, 2);

        for enriched in &placed {
            assert_eq!(enriched.order.quantity, 2);
            assert_eq!(enriched.order.buyer_name, "Jane Smith");
            assert_eq!(enriched.order.address, "456 Elm St");
            assert_eq!(enriched.order.status, OrderStatus::Pending);
        }

        // Each line became an order for its own product
        let product_ids: Vec<_> = placed.iter().map(|p| p.order.product_id).collect();
        assert!(product_ids.contains(&ProductId::new(1)));
        assert!(product_ids.contains(&ProductId::new(2)));
    }

    #[tokio::test]
    async fn empty_cart_is_rejected_without_touching_the_store() {
        let (_, orders) = market().await;
        let mut cart = Cart::new();

        let result = submit_cart(&orders, &mut cart, &jane()).await;
        assert!(matches!(result, Err(CheckoutError::EmptyCart)));
        assert_eq!(orders.count().await, 0);
    }

    #[tokio::test]
    async fn stale_cart_line_fails_before_any_order_is_created() {
        let (catalog, orders) = market().await;

        let mut cart = Cart::new();
        for product in catalog.list().await {
            cart.add_item(&product, 1);
        }

        // The second product disappears between add and checkout
        catalog.delete(ProductId::new(2)).await.unwrap();

        let result = submit_cart(&orders, &mut cart, &jane()).await;
        assert!(matches!(
            result,
            Err(CheckoutError::Order(OrderError::UnknownProduct(_)))
        ));

        // No partial batch, and the cart is left intact for the buyer
        assert_eq!(orders.count().await, 0);
        assert_eq!(cart.lines().len(), 2);
    }

    #[tokio::test]
    async fn blank_shipping_details_are_rejected_by_the_store() {
        let (catalog, orders) = market().await;

        let mut cart = Cart::new();
        cart.add_item(&catalog.list().await[0], 1);

        let details = ShippingDetails::new("", "555-123-4567", "456 Elm St");
        let result = submit_cart(&orders, &mut cart, &details).await;

        assert!(matches!(
            result,
            Err(CheckoutError::Order(OrderError::EmptyBuyerName))
        ));
        assert!(!cart.is_empty());
    }
}
