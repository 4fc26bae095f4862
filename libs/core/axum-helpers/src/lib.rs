//! # Axum Helpers
//!
//! A collection of utilities, middleware, and helpers for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`auth`]**: Stateless JWT authentication and the `CurrentUser` extractor
//! - **[`server`]**: Server setup, health checks, graceful shutdown
//! - **[`http`]**: HTTP middleware (security headers)
//! - **[`rate_limit`]**: Per-IP rate limiting for sensitive endpoints
//! - **[`errors`]**: Structured error responses
//! - **[`extractors`]**: Custom extractors (validated JSON, UUID path params)
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes).await?;
//!
//!     let config = ServerConfig::default();
//!     create_app(router, &config).await?;
//!     Ok(())
//! }
//! ```

// Domain modules
pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod rate_limit;
pub mod server;

// Re-export auth types
pub use auth::{
    CurrentUser, JwtAuth, JwtClaims, JwtConfig, TOKEN_TTL_SECS, jwt_auth_middleware,
};

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, create_app, create_router, health_router,
    run_health_checks, shutdown_signal,
};

// Re-export HTTP middleware
pub use http::security_headers;

// Re-export rate limiting
pub use rate_limit::{IpRateLimiter, rate_limit_middleware};

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::{UuidPath, ValidatedJson};
