//! API routes module

pub mod health;

use axum::Router;
use domain_products::{PgProductRepository, ProductService, handlers};

use crate::state::AppState;

/// Versioned API routes, nested under `/api` by `create_router`
pub fn routes(state: &AppState) -> Router {
    let repository = PgProductRepository::new(state.db.clone());
    let service = ProductService::new(repository);

    Router::new().nest("/v1/products", handlers::router(service))
}
