use super::jwt::{JwtAuth, JwtClaims};
use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Extract a bearer token from the Authorization header
fn extract_token_from_request(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer ").map(|s| s.to_string()))
}

/// JWT authentication middleware
///
/// Validates the bearer token from the Authorization header.
/// Inserts `JwtClaims` into request extensions on success.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::{JwtAuth, auth::jwt_auth_middleware};
///
/// let protected_routes = Router::new()
///     .route("/users/me", get(me_handler))
///     .layer(axum::middleware::from_fn_with_state(
///         jwt_auth.clone(),
///         jwt_auth_middleware
///     ));
/// ```
pub async fn jwt_auth_middleware(
    State(auth): State<JwtAuth>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = match extract_token_from_request(&headers) {
        Some(t) => t,
        None => {
            tracing::debug!("No bearer token in Authorization header");
            return Err(AppError::Unauthorized("No token provided".to_string()));
        }
    };

    let claims = match auth.verify_token(&token) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!("JWT verification failed: {}", e);
            return Err(AppError::Unauthorized("Invalid token".to_string()));
        }
    };

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// The authenticated caller, extracted from verified JWT claims.
///
/// Only available on routes behind [`jwt_auth_middleware`].
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub email: String,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<JwtClaims>()
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))?;

        Ok(CurrentUser {
            user_id,
            email: claims.email.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_token_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(
            extract_token_from_request(&headers),
            Some("abc.def.ghi".to_string())
        );
    }

    #[test]
    fn test_extract_token_missing_or_malformed() {
        let headers = HeaderMap::new();
        assert_eq!(extract_token_from_request(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Basic abc"));
        assert_eq!(extract_token_from_request(&headers), None);
    }
}
