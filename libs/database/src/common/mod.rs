//! Utilities shared across database backends

pub mod retry;

pub use retry::{retry, retry_with_backoff, RetryConfig};
