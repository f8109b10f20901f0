//! In-memory product catalog store.

use std::sync::Arc;

use common::ProductId;
use tokio::sync::RwLock;

use crate::error::{CatalogError, Result};
use crate::product::{NewProduct, Product, ProductUpdate};

struct CatalogState {
    products: Vec<Product>,
    /// High-water id counter. Always at least max(existing ids) + 1, so
    /// deleting a product never recycles its id for future creates.
    next_id: i64,
}

/// In-memory store owning the set of sellable products.
///
/// Cloning yields another handle to the same collection. Every operation
/// takes the lock exactly once and runs to completion, so each call is
/// atomic relative to other calls.
#[derive(Clone)]
pub struct ProductCatalogStore {
    state: Arc<RwLock<CatalogState>>,
}

impl ProductCatalogStore {
    /// Creates a new empty catalog.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(CatalogState {
                products: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Returns all products in insertion order.
    pub async fn list(&self) -> Vec<Product> {
        self.state.read().await.products.clone()
    }

    /// Looks up a product by id.
    pub async fn get(&self, id: ProductId) -> Result<Product> {
        self.state
            .read()
            .await
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    /// Validates the input, assigns the next id, and appends the product.
    #[tracing::instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: NewProduct) -> Result<Product> {
        input.validate()?;

        let mut state = self.state.write().await;
        let id = ProductId::new(state.next_id);
        state.next_id += 1;

        let product = Product {
            id,
            name: input.name,
            price_per_unit: input.price_per_unit,
            image_url: input.image_url,
        };
        state.products.push(product.clone());

        metrics::counter!("catalog_products_created").increment(1);
        tracing::debug!(%id, "product created");
        Ok(product)
    }

    /// Merges the supplied fields over the existing record.
    #[tracing::instrument(skip(self, update))]
    pub async fn update(&self, id: ProductId, update: ProductUpdate) -> Result<Product> {
        update.validate()?;

        let mut state = self.state.write().await;
        let product = state
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))?;

        update.apply(product);
        tracing::debug!(%id, "product updated");
        Ok(product.clone())
    }

    /// Removes the product. Orders referencing it keep their product id and
    /// resolve to no product on future reads; there is no cascade.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> Result<()> {
        let mut state = self.state.write().await;
        let len_before = state.products.len();
        state.products.retain(|p| p.id != id);

        if state.products.len() == len_before {
            return Err(CatalogError::NotFound(id));
        }
        tracing::debug!(%id, "product deleted");
        Ok(())
    }

    /// Returns the number of products currently in the catalog.
    pub async fn count(&self) -> usize {
        self.state.read().await.products.len()
    }
}

impl Default for ProductCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
