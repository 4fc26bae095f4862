//! Orders API routes
//!
//! This module wires up order placement to HTTP routes, protected by the
//! JWT middleware.

use axum::{Router, middleware};
use axum_helpers::{JwtAuth, jwt_auth_middleware};
use domain_carts::MongoCartRepository;
use domain_orders::{OrderService, handlers};
use domain_users::MongoUserRepository;
use remote::{OrderClient, RestClient};
use std::sync::Arc;

use crate::state::AppState;

/// Create the orders router
pub fn router(state: &AppState) -> eyre::Result<Router> {
    let carts = Arc::new(MongoCartRepository::new(state.db.clone()));
    let users = Arc::new(MongoUserRepository::new(state.db.clone()));
    let orders = OrderClient::new(RestClient::new(&state.config.order_service_url)?);
    let service = OrderService::new(carts, users, Arc::new(orders));
    let jwt = JwtAuth::new(&state.config.jwt);

    Ok(handlers::router(service)
        .layer(middleware::from_fn_with_state(jwt, jwt_auth_middleware)))
}
