//! # Orders Domain
//!
//! Order placement: composes the caller's cart and profile into an order
//! payload and submits it to the remote order service. No order data is
//! stored locally.

pub mod error;
pub mod handlers;
pub mod payload;
pub mod service;

pub use error::{OrderError, OrderResult};
pub use payload::{OrderItem, OrderPayload};
pub use service::OrderService;
