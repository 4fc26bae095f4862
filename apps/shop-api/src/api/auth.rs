//! Auth API routes
//!
//! Registration and login, rate-limited per client IP.

use axum::{Router, middleware};
use axum_helpers::{IpRateLimiter, JwtAuth, rate_limit_middleware};
use domain_users::{MongoUserRepository, UserService, auth_handlers};
use remote::{OrderClient, RestClient};
use std::sync::Arc;

use crate::state::AppState;

/// Create the auth router
pub fn router(state: &AppState) -> eyre::Result<Router> {
    let repository = MongoUserRepository::new(state.db.clone());
    let orders = OrderClient::new(RestClient::new(&state.config.order_service_url)?);
    let service = UserService::new(repository, Arc::new(orders));
    let jwt = JwtAuth::new(&state.config.jwt);

    // 5 requests per 15-minute window per client IP
    Ok(auth_handlers::router(service, jwt).layer(middleware::from_fn_with_state(
        IpRateLimiter::for_auth(),
        rate_limit_middleware,
    )))
}
