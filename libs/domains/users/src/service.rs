use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use remote::OrderGateway;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{RegisterRequest, UpdateUser, User, UserResponse};
use crate::repository::UserRepository;

/// Service layer for User business logic
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    orders: Arc<dyn OrderGateway>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            orders: self.orders.clone(),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R, orders: Arc<dyn OrderGateway>) -> Self {
        Self {
            repository: Arc::new(repository),
            orders,
        }
    }

    /// Register a new user: reject taken emails, hash the password, persist.
    pub async fn register(&self, input: RegisterRequest) -> UserResult<UserResponse> {
        self.validate_password(&input.password)?;

        let email = normalize_email(&input.email);

        if self.repository.email_exists(&email).await? {
            return Err(UserError::DuplicateEmail(email));
        }

        let password_hash = self.hash_password(&input.password)?;

        let user = User::new(
            input.name.trim().to_string(),
            email,
            password_hash,
            input.address,
            input.phone_number,
            input.avatar_url,
        );

        let created = self.repository.create(user).await?;
        Ok(created.into())
    }

    /// Verify login credentials.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller;
    /// an empty candidate password verifies to false rather than erroring.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> UserResult<UserResponse> {
        let user = self
            .repository
            .get_by_email(&normalize_email(email))
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !self.verify_password(password, &user.password_hash)? {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user.into())
    }

    /// List all users
    pub async fn list_users(&self) -> UserResult<Vec<UserResponse>> {
        let users = self.repository.list().await?;
        Ok(users.into_iter().map(|u| u.into()).collect())
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: Uuid) -> UserResult<UserResponse> {
        let user = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        Ok(user.into())
    }

    /// Update a user (partial patch; password re-hashed when present)
    pub async fn update_user(&self, id: Uuid, mut input: UpdateUser) -> UserResult<UserResponse> {
        if let Some(ref password) = input.password {
            self.validate_password(password)?;
        }

        let mut user = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        let new_password_hash = match input.password.take() {
            Some(password) => Some(self.hash_password(&password)?),
            None => None,
        };

        if let Some(ref new_email) = input.email {
            let normalized = normalize_email(new_email);
            if normalized != user.email {
                if self.repository.email_exists(&normalized).await? {
                    return Err(UserError::DuplicateEmail(normalized));
                }
            }
            input.email = Some(normalized);
        }

        user.apply_update(input, new_password_hash);

        let updated = self.repository.update(user).await?;
        Ok(updated.into())
    }

    /// Delete a user, cascading deletion of their remote orders first.
    ///
    /// Two-step saga: the order cascade is best-effort (log and continue on
    /// failure); only a failure of the user-record delete reaches the caller.
    pub async fn delete_user(&self, id: Uuid) -> UserResult<()> {
        if let Err(e) = self.orders.delete_user_orders(id).await {
            tracing::error!(user_id = %id, error = %e, "Error deleting user orders, continuing with user deletion");
        }

        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(UserError::NotFound(id));
        }

        Ok(())
    }

    // Password helpers

    fn hash_password(&self, password: &str) -> UserResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::PasswordHash(e.to_string()))
    }

    fn verify_password(&self, password: &str, hash: &str) -> UserResult<bool> {
        if password.is_empty() {
            return Ok(false);
        }

        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    fn validate_password(&self, password: &str) -> UserResult<()> {
        if password.len() < 6 {
            return Err(UserError::Validation(
                "Password must be at least 6 characters".to_string(),
            ));
        }

        if password.len() > 128 {
            return Err(UserError::Validation(
                "Password cannot exceed 128 characters".to_string(),
            ));
        }

        Ok(())
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryUserRepository;
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::eq;
    use remote::{RemoteError, RemoteResult};
    use serde_json::Value;

    mock! {
        pub Orders {}

        #[async_trait]
        impl OrderGateway for Orders {
            async fn get_user_orders(&self, user_id: Uuid) -> RemoteResult<Value>;
            async fn get_order(&self, order_id: &str) -> RemoteResult<Value>;
            async fn create_order(&self, payload: Value) -> RemoteResult<Value>;
            async fn delete_order(&self, order_id: &str) -> RemoteResult<Value>;
            async fn delete_user_orders(&self, user_id: Uuid) -> RemoteResult<Value>;
        }
    }

    fn service() -> UserService<InMemoryUserRepository> {
        UserService::new(InMemoryUserRepository::new(), Arc::new(MockOrders::new()))
    }

    fn register_input(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Test User".to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
            address: None,
            phone_number: None,
            avatar_url: None,
        }
    }

    #[tokio::test]
    async fn test_register_then_duplicate_email_fails() {
        let service = service();

        let first = service.register(register_input("ada@example.com")).await;
        assert!(first.is_ok());

        // Case differs, still the same email
        let second = service.register(register_input("ADA@Example.com")).await;
        assert!(matches!(second, Err(UserError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_register_normalizes_email_and_hashes_password() {
        let service = service();

        let created = service
            .register(register_input("  Ada@Example.COM "))
            .await
            .unwrap();

        assert_eq!(created.email, "ada@example.com");

        // The response serialization carries no password material
        let value = serde_json::to_value(&created).unwrap();
        assert!(value.get("password").is_none());
        assert!(value.get("password_hash").is_none());
    }

    #[tokio::test]
    async fn test_login_unknown_email_and_wrong_password_are_identical() {
        let service = service();
        service
            .register(register_input("ada@example.com"))
            .await
            .unwrap();

        let unknown = service
            .verify_credentials("nobody@example.com", "secret1")
            .await;
        let wrong = service
            .verify_credentials("ada@example.com", "wrong-password")
            .await;

        assert!(matches!(unknown, Err(UserError::InvalidCredentials)));
        assert!(matches!(wrong, Err(UserError::InvalidCredentials)));
        assert_eq!(
            unknown.unwrap_err().to_string(),
            wrong.unwrap_err().to_string()
        );
    }

    #[tokio::test]
    async fn test_login_empty_password_is_rejected_not_an_error() {
        let service = service();
        service
            .register(register_input("ada@example.com"))
            .await
            .unwrap();

        let result = service.verify_credentials("ada@example.com", "").await;
        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_succeeds_with_correct_credentials() {
        let service = service();
        service
            .register(register_input("ada@example.com"))
            .await
            .unwrap();

        let user = service
            .verify_credentials("ada@example.com", "secret1")
            .await
            .unwrap();
        assert_eq!(user.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_update_rejects_taken_email() {
        let service = service();
        service
            .register(register_input("ada@example.com"))
            .await
            .unwrap();
        let second = service
            .register(register_input("grace@example.com"))
            .await
            .unwrap();

        let result = service
            .update_user(
                second.id,
                UpdateUser {
                    email: Some("ada@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(UserError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_update_rehashes_password() {
        let service = service();
        let created = service
            .register(register_input("ada@example.com"))
            .await
            .unwrap();

        service
            .update_user(
                created.id,
                UpdateUser {
                    password: Some("new-secret".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(
            service
                .verify_credentials("ada@example.com", "secret1")
                .await
                .is_err()
        );
        assert!(
            service
                .verify_credentials("ada@example.com", "new-secret")
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_delete_user_survives_order_cascade_failure() {
        let repository = InMemoryUserRepository::new();
        let mut orders = MockOrders::new();

        let service_for_setup =
            UserService::new(repository.clone(), Arc::new(MockOrders::new()));
        let created = service_for_setup
            .register(register_input("ada@example.com"))
            .await
            .unwrap();

        orders
            .expect_delete_user_orders()
            .with(eq(created.id))
            .times(1)
            .returning(|_| Err(RemoteError::NoResponse));

        let service = UserService::new(repository, Arc::new(orders));
        service.delete_user(created.id).await.unwrap();

        assert!(matches!(
            service.get_user(created.id).await,
            Err(UserError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_not_found() {
        let mut orders = MockOrders::new();
        orders
            .expect_delete_user_orders()
            .returning(|_| Ok(Value::Null));

        let service = UserService::new(InMemoryUserRepository::new(), Arc::new(orders));
        let result = service.delete_user(Uuid::now_v7()).await;

        assert!(matches!(result, Err(UserError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_register_rejects_short_password() {
        let service = service();
        let result = service
            .register(RegisterRequest {
                password: "abc".to_string(),
                ..register_input("ada@example.com")
            })
            .await;

        assert!(matches!(result, Err(UserError::Validation(_))));
    }
}
