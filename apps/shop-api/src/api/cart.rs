//! Cart API routes
//!
//! This module wires up the carts domain to HTTP routes, protected by the
//! JWT middleware.

use axum::{Router, middleware};
use axum_helpers::{JwtAuth, jwt_auth_middleware};
use domain_carts::{CartService, MongoCartRepository, handlers};
use remote::{ProductClient, RestClient};
use std::sync::Arc;

use crate::state::AppState;

/// Initialize cart indexes in MongoDB
pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    let repository = MongoCartRepository::new(db.clone());
    repository
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create cart indexes: {}", e))?;
    tracing::info!("Cart collection indexes created");
    Ok(())
}

/// Create the cart router
pub fn router(state: &AppState) -> eyre::Result<Router> {
    let repository = MongoCartRepository::new(state.db.clone());
    let products = ProductClient::new(RestClient::new(&state.config.product_service_url)?);
    let service = CartService::new(repository, Arc::new(products));
    let jwt = JwtAuth::new(&state.config.jwt);

    Ok(handlers::router(service)
        .layer(middleware::from_fn_with_state(jwt, jwt_auth_middleware)))
}
