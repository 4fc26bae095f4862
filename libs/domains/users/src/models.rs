use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+]?[(]?[0-9]{3}[)]?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$")
        .expect("phone regex is valid")
});

static AVATAR_URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(http|https)://[^ "]+$"#).expect("avatar url regex is valid"));

/// Postal address. Each field is independently nullable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
}

/// User entity stored in the `users` collection.
///
/// Never returned from handlers directly: the outward representation is
/// [`UserResponse`], which has no password field at all.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email, trimmed and lowercased before persisting (unique at the store level)
    pub email: String,
    /// Argon2 password hash. Serialized only into the database document.
    pub password_hash: String,
    pub address: Option<Address>,
    pub phone_number: Option<String>,
    pub avatar_url: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// User response DTO (structurally omits the password hash)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub address: Option<Address>,
    pub phone_number: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            address: user.address,
            phone_number: user.phone_number,
            avatar_url: user.avatar_url,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// DTO for user registration
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    pub password: String,
    pub address: Option<Address>,
    #[validate(regex(path = *PHONE_REGEX, message = "Please enter a valid phone number"))]
    pub phone_number: Option<String>,
    #[validate(regex(path = *AVATAR_URL_REGEX, message = "Avatar must be a valid URL"))]
    pub avatar_url: Option<String>,
}

/// DTO for user login
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email, length(max = 255))]
    pub email: String,
    pub password: String,
}

/// DTO for updating an existing user (partial patch, re-validated)
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(email, length(max = 255))]
    pub email: Option<String>,
    pub password: Option<String>,
    pub address: Option<Address>,
    #[validate(regex(path = *PHONE_REGEX, message = "Please enter a valid phone number"))]
    pub phone_number: Option<String>,
    #[validate(regex(path = *AVATAR_URL_REGEX, message = "Avatar must be a valid URL"))]
    pub avatar_url: Option<String>,
}

/// Response after successful register/login
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

impl User {
    /// Create a new user (password already hashed, email already normalized)
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        address: Option<Address>,
        phone_number: Option<String>,
        avatar_url: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name,
            email,
            password_hash,
            address,
            phone_number,
            avatar_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates (password must already be hashed, email already normalized)
    pub fn apply_update(&mut self, update: UpdateUser, new_password_hash: Option<String>) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(hash) = new_password_hash {
            self.password_hash = hash;
        }
        if let Some(address) = update.address {
            self.address = Some(address);
        }
        if let Some(phone) = update.phone_number {
            self.phone_number = Some(phone);
        }
        if let Some(avatar) = update.avatar_url {
            self.avatar_url = Some(avatar);
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_has_no_password_field() {
        let user = User::new(
            "Ada".to_string(),
            "ada@example.com".to_string(),
            "$argon2id$hash".to_string(),
            None,
            None,
            None,
        );

        let response: UserResponse = user.into();
        let value = serde_json::to_value(&response).unwrap();

        assert!(value.get("password").is_none());
        assert!(value.get("password_hash").is_none());
        assert_eq!(value["email"], "ada@example.com");
    }

    #[test]
    fn test_register_request_validates_phone_and_avatar() {
        let valid = RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
            address: None,
            phone_number: Some("+123 456 7890".to_string()),
            avatar_url: Some("https://cdn.example.com/a.png".to_string()),
        };
        assert!(valid.validate().is_ok());

        let bad_phone = RegisterRequest {
            phone_number: Some("not-a-phone".to_string()),
            ..valid.clone()
        };
        assert!(bad_phone.validate().is_err());

        let bad_avatar = RegisterRequest {
            avatar_url: Some("ftp://example.com/a.png".to_string()),
            ..valid
        };
        assert!(bad_avatar.validate().is_err());
    }

    #[test]
    fn test_apply_update_is_partial() {
        let mut user = User::new(
            "Ada".to_string(),
            "ada@example.com".to_string(),
            "hash".to_string(),
            None,
            None,
            None,
        );

        user.apply_update(
            UpdateUser {
                name: Some("Ada L.".to_string()),
                ..Default::default()
            },
            None,
        );

        assert_eq!(user.name, "Ada L.");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.password_hash, "hash");
    }
}
