//! MongoDB implementation of UserRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{Bson, doc, to_bson},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::User;
use crate::repository::UserRepository;

/// MongoDB implementation of the UserRepository
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<User>("users");
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<User> {
        &self.collection
    }

    fn email_filter(email: &str) -> mongodb::bson::Document {
        doc! { "email": email.to_lowercase() }
    }

    /// Create indexes backing the store-level constraints
    pub async fn create_indexes(&self) -> UserResult<()> {
        use mongodb::IndexModel;
        use mongodb::options::IndexOptions;

        let indexes = vec![
            // Unique index enforcing one account per email
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
            // Index on created_at for newest-first listing
            IndexModel::builder().keys(doc! { "created_at": -1 }).build(),
        ];

        self.collection.create_indexes(indexes).await?;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn create(&self, user: User) -> UserResult<User> {
        // Uniqueness is also backed by a unique index on `email`
        if self.email_exists(&user.email).await? {
            return Err(UserError::DuplicateEmail(user.email));
        }

        self.collection.insert_one(&user).await?;

        tracing::info!(user_id = %user.id, "User created successfully");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let user = self.collection.find_one(filter).await?;
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let user = self.collection.find_one(Self::email_filter(email)).await?;
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> UserResult<Vec<User>> {
        use futures_util::TryStreamExt;

        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();

        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let users: Vec<User> = cursor.try_collect().await?;

        Ok(users)
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn update(&self, user: User) -> UserResult<User> {
        let filter = doc! { "_id": to_bson(&user.id).unwrap_or(Bson::Null) };
        let result = self.collection.replace_one(filter, &user).await?;

        if result.matched_count == 0 {
            return Err(UserError::NotFound(user.id));
        }

        tracing::info!(user_id = %user.id, "User updated successfully");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> UserResult<bool> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let result = self.collection.delete_one(filter).await?;

        Ok(result.deleted_count > 0)
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> UserResult<bool> {
        let count = self
            .collection
            .count_documents(Self::email_filter(email))
            .await?;
        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests would require a MongoDB instance; filter construction
    // is the only logic worth unit-testing here.

    #[test]
    fn test_email_filter_is_lowercased() {
        let filter = MongoUserRepository::email_filter("Ada@Example.COM");
        assert_eq!(filter.get_str("email").unwrap(), "ada@example.com");
    }
}
