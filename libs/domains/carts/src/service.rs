use remote::ProductCatalog;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{CartError, CartResult};
use crate::models::{Cart, CartItem};
use crate::repository::CartRepository;

/// Service layer for Cart business logic.
///
/// Every operation is scoped to a user id that the HTTP layer takes from
/// the verified token, never from the request body.
pub struct CartService<R: CartRepository> {
    repository: Arc<R>,
    products: Arc<dyn ProductCatalog>,
}

impl<R: CartRepository> Clone for CartService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            products: self.products.clone(),
        }
    }
}

impl<R: CartRepository> CartService<R> {
    pub fn new(repository: R, products: Arc<dyn ProductCatalog>) -> Self {
        Self {
            repository: Arc::new(repository),
            products,
        }
    }

    /// Get the user's cart
    pub async fn get_cart(&self, user_id: Uuid) -> CartResult<Cart> {
        self.repository
            .get_by_user_id(user_id)
            .await?
            .ok_or(CartError::CartNotFound(user_id))
    }

    /// Add a product to the cart, snapshotting name and price from the
    /// product catalog. An existing line for the product has its quantity
    /// replaced; the cart is created lazily on first add.
    pub async fn upsert_item(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        quantity: u32,
    ) -> CartResult<Cart> {
        let product = self
            .products
            .get_product_by_id(product_id)
            .await
            .map_err(|e| {
                tracing::warn!(%product_id, error = %e, "Product lookup failed");
                CartError::ProductNotFound(product_id)
            })?;

        let mut cart = match self.repository.get_by_user_id(user_id).await? {
            Some(cart) => cart,
            None => Cart::new(user_id),
        };

        match cart.find_item_mut(product_id) {
            Some(item) => {
                item.quantity = quantity;
            }
            None => {
                cart.items
                    .push(CartItem::new(product_id, product.name, product.price, quantity));
            }
        }

        self.persist(cart).await
    }

    /// Change the quantity of an existing line
    pub async fn update_item_quantity(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        quantity: u32,
    ) -> CartResult<Cart> {
        let mut cart = self.get_cart(user_id).await?;

        let item = cart
            .find_item_mut(product_id)
            .ok_or(CartError::ItemNotFound(product_id))?;
        item.quantity = quantity;

        self.persist(cart).await
    }

    /// Remove a line from the cart. Removing an absent product is a no-op
    /// returning the unchanged cart.
    pub async fn remove_item(&self, user_id: Uuid, product_id: Uuid) -> CartResult<Cart> {
        let mut cart = self.get_cart(user_id).await?;

        cart.items.retain(|i| i.product_id != product_id);

        self.persist(cart).await
    }

    /// Delete the cart document entirely
    pub async fn clear(&self, user_id: Uuid) -> CartResult<()> {
        let deleted = self.repository.delete_by_user_id(user_id).await?;

        if !deleted {
            return Err(CartError::CartNotFound(user_id));
        }

        Ok(())
    }

    async fn persist(&self, mut cart: Cart) -> CartResult<Cart> {
        cart.prepare_for_save();
        self.repository.save(cart).await
    }
}
