//! In-memory order store with referential validation against the catalog.

use std::sync::Arc;

use catalog::ProductCatalogStore;
use chrono::Utc;
use common::OrderId;
use tokio::sync::RwLock;

use crate::error::{OrderError, Result};
use crate::order::{EnrichedOrder, NewOrder, Order, resolve_product};
use crate::status::OrderStatus;

/// In-memory store owning the set of placed orders.
///
/// Holds a catalog handle to validate product references at creation time
/// and to enrich query results at read time. Cloning yields another handle
/// to the same collection; every mutation takes the lock once and runs to
/// completion, so each call is atomic relative to other calls.
#[derive(Clone)]
pub struct OrderStore {
    orders: Arc<RwLock<Vec<Order>>>,
    catalog: ProductCatalogStore,
}

impl OrderStore {
    /// Creates a new empty order store validating against the given catalog.
    pub fn new(catalog: ProductCatalogStore) -> Self {
        Self {
            orders: Arc::new(RwLock::new(Vec::new())),
            catalog,
        }
    }

    /// Returns the catalog this store validates and enriches against.
    pub fn catalog(&self) -> &ProductCatalogStore {
        &self.catalog
    }

    /// Lists orders in insertion order, each enriched with its product
    /// snapshot. A filter keeps only orders whose buyer name contains it as
    /// a case-insensitive substring.
    pub async fn list(&self, buyer_filter: Option<&str>) -> Vec<EnrichedOrder> {
        let filter = buyer_filter.map(str::to_lowercase);
        let products = self.catalog.list().await;

        self.orders
            .read()
            .await
            .iter()
            .filter(|o| match &filter {
                Some(needle) => o.buyer_name.to_lowercase().contains(needle),
                None => true,
            })
            .map(|o| EnrichedOrder {
                product: resolve_product(o, &products),
                order: o.clone(),
            })
            .collect()
    }

    /// Looks up an order by id, enriched with its product snapshot.
    pub async fn get(&self, id: OrderId) -> Result<EnrichedOrder> {
        let order = self
            .orders
            .read()
            .await
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or(OrderError::NotFound(id))?;

        Ok(self.enrich(order).await)
    }

    /// Validates the input and the product reference, then appends a new
    /// order with a fresh id, `Pending` status, and the current time.
    ///
    /// Nothing is appended when the product id does not resolve.
    #[tracing::instrument(
        skip(self, input),
        fields(product_id = %input.product_id, buyer = %input.buyer_name)
    )]
    pub async fn create(&self, input: NewOrder) -> Result<EnrichedOrder> {
        input.validate()?;

        let product = self
            .catalog
            .get(input.product_id)
            .await
            .map_err(|_| OrderError::UnknownProduct(input.product_id))?;

        let order = Order {
            id: OrderId::new(),
            product_id: input.product_id,
            quantity: input.quantity,
            buyer_name: input.buyer_name,
            contact: input.contact,
            address: input.address,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };
        self.orders.write().await.push(order.clone());

        metrics::counter!("orders_created").increment(1);
        tracing::info!(order_id = %order.id, "order created");
        Ok(EnrichedOrder {
            order,
            product: Some(product),
        })
    }

    /// Overwrites the status and returns the enriched record. Any status
    /// may replace any other; no transition-legality check is performed.
    #[tracing::instrument(skip(self))]
    pub async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<EnrichedOrder> {
        let order = {
            let mut orders = self.orders.write().await;
            let order = orders
                .iter_mut()
                .find(|o| o.id == id)
                .ok_or(OrderError::NotFound(id))?;
            order.status = status;
            order.clone()
        };

        metrics::counter!("order_status_updates").increment(1);
        tracing::info!(order_id = %id, %status, "order status updated");
        Ok(self.enrich(order).await)
    }

    /// Returns the number of placed orders.
    pub async fn count(&self) -> usize {
        self.orders.read().await.len()
    }

    async fn enrich(&self, order: Order) -> EnrichedOrder {
        let product = self.catalog.get(order.product_id).await.ok();
        EnrichedOrder { order, product }
    }
}
