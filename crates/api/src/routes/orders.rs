//! Order endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::{OrderId, ProductId};
use orders::{EnrichedOrder, NewOrder, OrderStatus};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::ApiError;
use crate::routes::products::ProductResponse;

// -- Request types --

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub product_id: ProductId,
    pub quantity: u32,
    pub buyer_name: String,
    pub contact: String,
    pub address: String,
}

#[derive(Deserialize)]
pub struct ListOrdersQuery {
    pub buyer: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

// -- Response types --

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub buyer_name: String,
    pub contact: String,
    pub address: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductResponse>,
}

impl From<EnrichedOrder> for OrderResponse {
    fn from(enriched: EnrichedOrder) -> Self {
        let order = enriched.order;
        Self {
            id: order.id,
            product_id: order.product_id,
            quantity: order.quantity,
            buyer_name: order.buyer_name,
            contact: order.contact,
            address: order.address,
            status: order.status,
            created_at: order.created_at,
            product: enriched.product.map(ProductResponse::from),
        }
    }
}

// -- Handlers --

/// GET /orders — list orders, optionally filtered by a case-insensitive
/// buyer-name substring (`?buyer=`).
#[tracing::instrument(skip(state, query))]
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListOrdersQuery>,
) -> Json<Vec<OrderResponse>> {
    let listed = state.orders.list(query.buyer.as_deref()).await;
    Json(listed.into_iter().map(OrderResponse::from).collect())
}

/// GET /orders/{id} — look up one order with its product snapshot.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<OrderResponse>, ApiError> {
    let id = parse_order_id(&id)?;
    let enriched = state.orders.get(id).await?;
    Ok(Json(enriched.into()))
}

/// POST /orders — place a single-product order.
#[tracing::instrument(skip(state, req))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    let placed = state
        .orders
        .create(NewOrder::new(
            req.product_id,
            req.quantity,
            req.buyer_name,
            req.contact,
            req.address,
        ))
        .await?;

    Ok((StatusCode::CREATED, Json(placed.into())))
}

/// PUT /orders/{id} — overwrite the order status.
#[tracing::instrument(skip(state, req))]
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateOrderStatusRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    let id = parse_order_id(&id)?;
    let updated = state.orders.update_status(id, req.status).await?;
    Ok(Json(updated.into()))
}

fn parse_order_id(id: &str) -> Result<OrderId, ApiError> {
    id.parse()
        .map_err(|e| ApiError::BadRequest(format!("Invalid ID format: {e}")))
}
