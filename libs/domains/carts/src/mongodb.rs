//! MongoDB implementation of CartRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{Bson, doc, to_bson},
    options::ReplaceOptions,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::CartResult;
use crate::models::Cart;
use crate::repository::CartRepository;

/// MongoDB implementation of the CartRepository
pub struct MongoCartRepository {
    collection: Collection<Cart>,
}

impl MongoCartRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Cart>("carts");
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Cart> {
        &self.collection
    }

    fn user_filter(user_id: Uuid) -> mongodb::bson::Document {
        doc! { "user_id": to_bson(&user_id).unwrap_or(Bson::Null) }
    }

    /// Create indexes backing the one-cart-per-user constraint
    pub async fn create_indexes(&self) -> CartResult<()> {
        use mongodb::IndexModel;
        use mongodb::options::IndexOptions;

        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "user_id": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        Ok(())
    }
}

#[async_trait]
impl CartRepository for MongoCartRepository {
    #[instrument(skip(self))]
    async fn get_by_user_id(&self, user_id: Uuid) -> CartResult<Option<Cart>> {
        let cart = self.collection.find_one(Self::user_filter(user_id)).await?;
        Ok(cart)
    }

    #[instrument(skip(self, cart), fields(user_id = %cart.user_id))]
    async fn save(&self, cart: Cart) -> CartResult<Cart> {
        // Upsert keyed on _id; user_id carries a unique index
        let filter = doc! { "_id": to_bson(&cart.id).unwrap_or(Bson::Null) };
        let options = ReplaceOptions::builder().upsert(true).build();

        self.collection
            .replace_one(filter, &cart)
            .with_options(options)
            .await?;

        tracing::debug!(cart_id = %cart.id, "Cart saved");
        Ok(cart)
    }

    #[instrument(skip(self))]
    async fn delete_by_user_id(&self, user_id: Uuid) -> CartResult<bool> {
        let result = self.collection.delete_one(Self::user_filter(user_id)).await?;
        Ok(result.deleted_count > 0)
    }
}
