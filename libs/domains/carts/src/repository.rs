use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::CartResult;
use crate::models::Cart;

/// Repository trait for Cart persistence
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Get a user's cart, if one exists
    async fn get_by_user_id(&self, user_id: Uuid) -> CartResult<Option<Cart>>;

    /// Insert or replace the cart document
    async fn save(&self, cart: Cart) -> CartResult<Cart>;

    /// Delete a user's cart, returning whether a document was removed
    async fn delete_by_user_id(&self, user_id: Uuid) -> CartResult<bool>;
}

/// In-memory implementation of CartRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCartRepository {
    carts: Arc<RwLock<HashMap<Uuid, Cart>>>,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self {
            carts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn get_by_user_id(&self, user_id: Uuid) -> CartResult<Option<Cart>> {
        let carts = self.carts.read().await;
        Ok(carts.get(&user_id).cloned())
    }

    async fn save(&self, cart: Cart) -> CartResult<Cart> {
        let mut carts = self.carts.write().await;
        carts.insert(cart.user_id, cart.clone());
        Ok(cart)
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> CartResult<bool> {
        let mut carts = self.carts.write().await;
        Ok(carts.remove(&user_id).is_some())
    }
}
