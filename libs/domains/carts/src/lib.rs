//! # Carts Domain
//!
//! Per-user shopping carts with product snapshots:
//! - One cart per user, created lazily on first add
//! - Name/price snapshotted from the product catalog at add time
//! - Derived total recomputed before every persist
//!
//! ## Architecture
//!
//! - **models**: `Cart`/`CartItem` documents and request DTOs
//! - **repository**: `CartRepository` trait + in-memory implementation
//! - **mongodb**: MongoDB-backed repository
//! - **service**: Business logic (snapshotting, quantity replace, totals)
//! - **handlers**: HTTP endpoints scoped to the authenticated caller

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{CartError, CartResult};
pub use models::{Cart, CartItem, UpdateQuantity, UpsertItem};
pub use mongodb::MongoCartRepository;
pub use repository::{CartRepository, InMemoryCartRepository};
pub use service::CartService;
