use crate::client::RestClient;
use crate::error::RemoteResult;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, instrument};
use uuid::Uuid;

const BASE_PATH: &str = "/api/v1/order";

/// Seam for the downstream order service, mockable in service tests.
///
/// Payloads and responses stay as raw JSON: this system treats orders as
/// write-only output and never interprets the remote's shape.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn get_user_orders(&self, user_id: Uuid) -> RemoteResult<Value>;

    async fn get_order(&self, order_id: &str) -> RemoteResult<Value>;

    async fn create_order(&self, payload: Value) -> RemoteResult<Value>;

    async fn delete_order(&self, order_id: &str) -> RemoteResult<Value>;

    async fn delete_user_orders(&self, user_id: Uuid) -> RemoteResult<Value>;
}

/// Pass-through proxy for the order service.
///
/// Each call forwards, logs on failure, and re-raises the normalized error
/// untouched. No retry, no caching.
#[derive(Clone)]
pub struct OrderClient {
    api: RestClient,
}

impl OrderClient {
    pub fn new(api: RestClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl OrderGateway for OrderClient {
    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn get_user_orders(&self, user_id: Uuid) -> RemoteResult<Value> {
        self.api
            .get(&format!("{}/user/{}", BASE_PATH, user_id))
            .await
            .inspect_err(|e| error!("Error fetching user orders: {}", e))
    }

    #[instrument(skip(self))]
    async fn get_order(&self, order_id: &str) -> RemoteResult<Value> {
        self.api
            .get(&format!("{}/{}", BASE_PATH, order_id))
            .await
            .inspect_err(|e| error!("Error fetching order: {}", e))
    }

    #[instrument(skip(self, payload))]
    async fn create_order(&self, payload: Value) -> RemoteResult<Value> {
        self.api
            .post(BASE_PATH, &payload)
            .await
            .inspect_err(|e| error!("Error creating order: {}", e))
    }

    #[instrument(skip(self))]
    async fn delete_order(&self, order_id: &str) -> RemoteResult<Value> {
        self.api
            .delete(&format!("{}/{}", BASE_PATH, order_id))
            .await
            .inspect_err(|e| error!("Error deleting order: {}", e))
    }

    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn delete_user_orders(&self, user_id: Uuid) -> RemoteResult<Value> {
        self.api
            .delete(&format!("{}/user/{}", BASE_PATH, user_id))
            .await
            .inspect_err(|e| error!("Error deleting user orders: {}", e))
    }
}
