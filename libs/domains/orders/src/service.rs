use domain_carts::CartRepository;
use domain_users::UserRepository;
use remote::OrderGateway;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{OrderError, OrderResult};
use crate::payload::OrderPayload;

/// Service composing an order from the caller's cart and profile.
///
/// No local order record is kept; the order service owns the data and its
/// response body is returned to the caller untouched. The cart is left as
/// it was, whether or not submission succeeds.
pub struct OrderService<C: CartRepository, U: UserRepository> {
    carts: Arc<C>,
    users: Arc<U>,
    orders: Arc<dyn OrderGateway>,
}

impl<C: CartRepository, U: UserRepository> Clone for OrderService<C, U> {
    fn clone(&self) -> Self {
        Self {
            carts: self.carts.clone(),
            users: self.users.clone(),
            orders: self.orders.clone(),
        }
    }
}

impl<C: CartRepository, U: UserRepository> OrderService<C, U> {
    pub fn new(carts: Arc<C>, users: Arc<U>, orders: Arc<dyn OrderGateway>) -> Self {
        Self {
            carts,
            users,
            orders,
        }
    }

    /// Submit the caller's cart as an order.
    ///
    /// An empty cart is still a valid zero-total order.
    pub async fn create_order(&self, user_id: Uuid) -> OrderResult<Value> {
        let cart = self
            .carts
            .get_by_user_id(user_id)
            .await
            .map_err(|e| OrderError::Database(e.to_string()))?
            .ok_or(OrderError::CartNotFound(user_id))?;

        let user = self
            .users
            .get_by_id(user_id)
            .await
            .map_err(|e| OrderError::Database(e.to_string()))?
            .ok_or(OrderError::UserNotFound(user_id))?;

        let payload = OrderPayload::from_cart_and_user(&cart, &user);
        let body = serde_json::to_value(&payload)
            .map_err(|e| OrderError::Remote(remote::RemoteError::Other(e.to_string())))?;

        tracing::info!(%user_id, total = payload.total_price, "Submitting order");
        let response = self.orders.create_order(body).await?;

        Ok(response)
    }
}
