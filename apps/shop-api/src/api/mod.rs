//! API routes module
//!
//! This module wires the domain crates to HTTP routes.

pub mod auth;
pub mod cart;
pub mod health;
pub mod orders;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> eyre::Result<Router> {
    Ok(Router::new()
        .nest("/auth", auth::router(state)?)
        .nest("/users", users::router(state)?)
        .nest("/cart", cart::router(state)?)
        .nest("/orders", orders::router(state)?)
        .merge(health::router(state.clone())))
}
