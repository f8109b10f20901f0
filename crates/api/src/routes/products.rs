//! Product catalog endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use catalog::{NewProduct, Product, ProductUpdate};
use common::{Money, ProductId};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::ApiError;

// -- Request types --

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub price_per_unit: Money,
    pub image_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price_per_unit: Option<Money>,
    pub image_url: Option<String>,
}

// -- Response types --

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: ProductId,
    pub name: String,
    pub price_per_unit: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price_per_unit: product.price_per_unit,
            image_url: product.image_url,
        }
    }
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// -- Handlers --

/// GET /products — list the catalog.
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<ProductResponse>> {
    let products = state.catalog.list().await;
    Json(products.into_iter().map(ProductResponse::from).collect())
}

/// GET /products/{id} — look up one product.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state.catalog.get(ProductId::new(id)).await?;
    Ok(Json(product.into()))
}

/// POST /products — add a product to the catalog.
#[tracing::instrument(skip(state, req))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let product = state
        .catalog
        .create(NewProduct {
            name: req.name,
            price_per_unit: req.price_per_unit,
            image_url: req.image_url,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// PUT /products/{id} — merge the supplied fields over the product.
#[tracing::instrument(skip(state, req))]
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state
        .catalog
        .update(
            ProductId::new(id),
            ProductUpdate {
                name: req.name,
                price_per_unit: req.price_per_unit,
                image_url: req.image_url,
            },
        )
        .await?;

    Ok(Json(product.into()))
}

/// DELETE /products/{id} — remove the product. Existing orders keep their
/// product id and resolve to no product on future reads.
#[tracing::instrument(skip(state))]
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.catalog.delete(ProductId::new(id)).await?;
    Ok(Json(MessageResponse {
        message: "Product deleted".to_string(),
    }))
}
