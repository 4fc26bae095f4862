//! Authentication and authorization module.
//!
//! This module provides:
//! - Stateless HS256 JWT token creation and verification
//! - Authentication middleware for protected routes
//! - The [`CurrentUser`] extractor for handlers behind the middleware
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{JwtAuth, JwtConfig, jwt_auth_middleware};
//! use core_config::FromEnv;
//!
//! // Load config and create auth instance
//! let config = JwtConfig::from_env()?;
//! let auth = JwtAuth::new(&config);
//!
//! // Protect routes with JWT middleware
//! let protected = Router::new()
//!     .route("/users/me", get(handler))
//!     .layer(axum::middleware::from_fn_with_state(auth, jwt_auth_middleware));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;

// Re-export commonly used types
pub use config::JwtConfig;
pub use jwt::{JwtAuth, JwtClaims, TOKEN_TTL_SECS};
pub use middleware::{CurrentUser, jwt_auth_middleware};
