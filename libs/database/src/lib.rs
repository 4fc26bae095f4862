//! Database connectivity layer.
//!
//! Provides MongoDB connection management: configuration, connection with
//! startup retry, and health checks. Domain crates own their collections
//! and queries; this crate only hands out connected clients.

pub mod common;
pub mod mongodb;
