//! Health check endpoints

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use axum_helpers::{health_router, run_health_checks, HealthCheckFuture};
use domain_products::{InMemoryProductRepository, ProductService};

use crate::state::AppState;

type Products = ProductService<InMemoryProductRepository>;

/// Readiness: the product store must answer a count.
async fn ready(State(products): State<Products>) -> impl IntoResponse {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "store",
        Box::pin(async {
            products
                .count_products()
                .await
                .map(|_| ())
                .map_err(|e| e.to_string())
        }),
    )];

    run_health_checks(checks).await
}

/// `/health` (liveness) and `/ready` (readiness)
pub fn router(state: &AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state.products.clone())
        .merge(health_router(state.config.app))
}
