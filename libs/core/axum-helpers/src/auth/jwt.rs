use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Token lifetime: 24 hours.
pub const TOKEN_TTL_SECS: i64 = 86_400;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,   // Subject (user ID)
    pub email: String, // User email
    pub exp: i64,      // Expiration time
    pub iat: i64,      // Issued at
}

/// Stateless HS256 JWT authentication.
///
/// Issues and verifies short-lived bearer tokens signed with a shared secret.
#[derive(Clone)]
pub struct JwtAuth {
    secret: String,
}

impl JwtAuth {
    /// Create a new JWT auth instance.
    ///
    /// # Example
    /// ```ignore
    /// use axum_helpers::{JwtAuth, JwtConfig};
    /// use core_config::FromEnv;
    ///
    /// let config = JwtConfig::from_env()?;
    /// let jwt_auth = JwtAuth::new(&config);
    /// ```
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
        }
    }

    /// Create a signed token for the given user, valid for 24 hours.
    pub fn create_token(&self, user_id: &str, email: &str) -> eyre::Result<String> {
        let now = Utc::now();
        let exp = (now + Duration::seconds(TOKEN_TTL_SECS)).timestamp();
        let iat = now.timestamp();

        let claims = JwtClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            exp,
            iat,
        };

        let header = Header {
            alg: jsonwebtoken::Algorithm::HS256,
            ..Default::default()
        };

        let token = encode(
            &header,
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Verify token signature and expiry, returning the decoded claims.
    pub fn verify_token(&self, token: &str) -> eyre::Result<JwtClaims> {
        let token_data = decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new("test-secret-with-at-least-32-characters"))
    }

    #[test]
    fn test_create_and_verify_token() {
        let auth = auth();
        let token = auth.create_token("user-123", "user@example.com").unwrap();
        let claims = auth.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "user-123");
        assert_eq!(claims.email, "user@example.com");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_verify_rejects_tampered_token() {
        let auth = auth();
        let token = auth.create_token("user-123", "user@example.com").unwrap();
        let tampered = format!("{}x", token);

        assert!(auth.verify_token(&tampered).is_err());
    }

    #[test]
    fn test_verify_rejects_token_from_different_secret() {
        let auth1 = auth();
        let auth2 = JwtAuth::new(&JwtConfig::new("another-secret-that-is-also-32-chars!"));
        let token = auth1.create_token("user-123", "user@example.com").unwrap();

        assert!(auth2.verify_token(&token).is_err());
    }
}
