//! Unified cart checkout endpoint.
//!
//! The cart itself is client-held; the request carries its lines plus the
//! shipping form. The server rebuilds a [`Cart`] from the catalog (merging
//! duplicate product ids) and expands it into one order per line.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use cart::{Cart, ShippingDetails};
use common::ProductId;
use orders::OrderError;
use serde::Deserialize;

use crate::AppState;
use crate::error::ApiError;
use crate::routes::orders::OrderResponse;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub items: Vec<CheckoutItem>,
    pub buyer_name: String,
    pub contact: String,
    pub address: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// POST /checkout — submit the client's cart as one order per line.
#[tracing::instrument(skip(state, req), fields(items = req.items.len(), buyer = %req.buyer_name))]
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<Vec<OrderResponse>>), ApiError> {
    let mut cart = Cart::new();
    for item in &req.items {
        let product = state
            .catalog
            .get(item.product_id)
            .await
            .map_err(|_| ApiError::from(OrderError::UnknownProduct(item.product_id)))?;
        cart.add_item(&product, item.quantity);
    }

    let details = ShippingDetails::new(req.buyer_name, req.contact, req.address);
    let placed = cart::submit_cart(&state.orders, &mut cart, &details).await?;

    Ok((
        StatusCode::CREATED,
        Json(placed.into_iter().map(OrderResponse::from).collect()),
    ))
}
