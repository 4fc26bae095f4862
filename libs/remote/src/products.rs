use crate::client::RestClient;
use crate::error::RemoteResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, instrument};
use uuid::Uuid;

const BASE_PATH: &str = "/api/v1/product";

/// Product as served by the product service.
///
/// Only the fields this system snapshots into cart lines; unknown remote
/// fields are ignored on decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Seam for the downstream product service, mockable in service tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn get_all_products(&self) -> RemoteResult<Vec<Product>>;

    async fn get_product_by_id(&self, product_id: Uuid) -> RemoteResult<Product>;
}

/// Pass-through proxy for the product service.
#[derive(Clone)]
pub struct ProductClient {
    api: RestClient,
}

impl ProductClient {
    pub fn new(api: RestClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ProductCatalog for ProductClient {
    #[instrument(skip(self))]
    async fn get_all_products(&self) -> RemoteResult<Vec<Product>> {
        self.api
            .get(BASE_PATH)
            .await
            .inspect_err(|e| error!("Error fetching products: {}", e))
    }

    #[instrument(skip(self), fields(product_id = %product_id))]
    async fn get_product_by_id(&self, product_id: Uuid) -> RemoteResult<Product> {
        self.api
            .get(&format!("{}/{}", BASE_PATH, product_id))
            .await
            .inspect_err(|e| error!("Error fetching product: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_decodes_with_unknown_fields() {
        let raw = serde_json::json!({
            "id": "0192f0c1-4a5b-7c8d-9e0f-112233445566",
            "name": "Mechanical keyboard",
            "price": 79.5,
            "stock": 12,
        });

        let product: Product = serde_json::from_value(raw).unwrap();
        assert_eq!(product.name, "Mechanical keyboard");
        assert_eq!(product.price, 79.5);
        assert!(product.description.is_none());
    }
}
