//! Users API routes
//!
//! This module wires up the users domain to HTTP routes, protected by the
//! JWT middleware.

use axum::{Router, middleware};
use axum_helpers::{JwtAuth, jwt_auth_middleware};
use domain_users::{MongoUserRepository, UserService, handlers};
use remote::{OrderClient, RestClient};
use std::sync::Arc;

use crate::state::AppState;

/// Initialize user indexes in MongoDB
pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    let repository = MongoUserRepository::new(db.clone());
    repository
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create user indexes: {}", e))?;
    tracing::info!("User collection indexes created");
    Ok(())
}

/// Create the users router
pub fn router(state: &AppState) -> eyre::Result<Router> {
    let repository = MongoUserRepository::new(state.db.clone());
    let orders = OrderClient::new(RestClient::new(&state.config.order_service_url)?);
    let service = UserService::new(repository, Arc::new(orders));
    let jwt = JwtAuth::new(&state.config.jwt);

    Ok(handlers::router(service)
        .layer(middleware::from_fn_with_state(jwt, jwt_auth_middleware)))
}
