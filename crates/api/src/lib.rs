//! HTTP API server for the produce market.
//!
//! Exposes the product catalog and order stores over REST, with structured
//! logging (tracing) and Prometheus metrics. Transport framing lives here;
//! all invariants are enforced by the stores underneath.

pub mod config;
pub mod error;
pub mod routes;
pub mod seed;

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post, put};
use catalog::ProductCatalogStore;
use metrics_exporter_prometheus::PrometheusHandle;
use orders::OrderStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub catalog: ProductCatalogStore,
    pub orders: OrderStore,
}

/// Creates empty stores wired together.
pub fn create_state() -> Arc<AppState> {
    let catalog = ProductCatalogStore::new();
    let orders = OrderStore::new(catalog.clone());
    Arc::new(AppState { catalog, orders })
}

/// Creates stores pre-seeded with the fixed demonstration set.
pub async fn create_seeded_state() -> Arc<AppState> {
    let state = create_state();
    seed::seed_demo_data(&state.catalog, &state.orders).await;
    state
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/products", get(routes::products::list))
        .route("/products", post(routes::products::create))
        .route("/products/{id}", get(routes::products::get))
        .route("/products/{id}", put(routes::products::update))
        .route("/products/{id}", delete(routes::products::remove))
        .route("/orders", get(routes::orders::list))
        .route("/orders", post(routes::orders::create))
        .route("/orders/{id}", get(routes::orders::get))
        .route("/orders/{id}", put(routes::orders::update_status))
        .route("/checkout", post(routes::checkout::submit))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
