use domain_carts::Cart;
use domain_users::User;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// One ordered line, snapshotted from the cart
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderItem {
    pub product_id: Uuid,
    pub product_name: String,
    pub price: f64,
    pub quantity: u32,
}

/// The document submitted to the order service.
///
/// Write-only: the remote response is returned to the caller as-is and
/// never read back into this type.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderPayload {
    pub user_id: Uuid,
    pub items: Vec<OrderItem>,
    pub total_price: f64,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
}

impl OrderPayload {
    /// Compose a payload from the caller's cart and user record
    pub fn from_cart_and_user(cart: &Cart, user: &User) -> Self {
        let items = cart
            .items
            .iter()
            .map(|i| OrderItem {
                product_id: i.product_id,
                product_name: i.product_name.clone(),
                price: i.price,
                quantity: i.quantity,
            })
            .collect();

        let address = user.address.clone().unwrap_or_default();

        Self {
            user_id: user.id,
            items,
            total_price: cart.total_price,
            street: address.street,
            city: address.city,
            state: address.state,
            country: address.country,
            zip_code: address.zip_code,
        }
    }
}
