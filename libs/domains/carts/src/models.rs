use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A single line in a cart.
///
/// `product_name` and `price` are snapshots taken from the product service
/// when the line is added; they do not track later catalog changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    pub product_id: Uuid,
    pub product_name: String,
    pub price: f64,
    pub quantity: u32,
    /// Legacy numeric line identifier kept alongside the Uuid.
    #[serde(default)]
    pub id_num: Option<i64>,
}

impl CartItem {
    pub fn new(product_id: Uuid, product_name: String, price: f64, quantity: u32) -> Self {
        Self {
            product_id,
            product_name,
            price,
            quantity,
            id_num: Some(rand::random::<u32>() as i64),
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Shopping cart document. One cart per user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Cart {
    /// Unique identifier (UUID v7)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub user_id: Uuid,
    pub items: Vec<CartItem>,
    /// Derived total, recomputed before every persist. Never client-supplied.
    pub total_price: f64,
    pub last_updated: DateTime<Utc>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Create an empty cart for a user
    pub fn new(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            user_id,
            items: Vec::new(),
            total_price: 0.0,
            last_updated: now,
            created_at: now,
        }
    }

    /// Recompute the derived fields. Must run immediately before every
    /// persist; nothing else updates `total_price` or `last_updated`.
    pub fn prepare_for_save(&mut self) {
        self.total_price = self.items.iter().map(CartItem::line_total).sum();
        self.last_updated = Utc::now();
    }

    pub fn find_item(&self, product_id: Uuid) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    pub fn find_item_mut(&mut self, product_id: Uuid) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|i| i.product_id == product_id)
    }
}

/// DTO for adding a product to the cart
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpsertItem {
    pub product_id: Uuid,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,
}

/// DTO for changing the quantity of an existing line
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateQuantity {
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,
}
