//! # Remote
//!
//! HTTP client plumbing for the downstream order and product services:
//! a JSON [`RestClient`] with uniform error normalization, plus thin typed
//! proxies ([`OrderClient`], [`ProductClient`]) behind mockable gateway
//! traits.

pub mod client;
pub mod error;
pub mod orders;
pub mod products;

pub use client::RestClient;
pub use error::{RemoteError, RemoteResult};
pub use orders::{OrderClient, OrderGateway};
pub use products::{Product, ProductCatalog, ProductClient};
