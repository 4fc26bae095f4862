use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CartError {
    #[error("Cart not found for user {0}")]
    CartNotFound(Uuid),

    #[error("Item {0} not found in cart")]
    ItemNotFound(Uuid),

    #[error("Product not found: {0}")]
    ProductNotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type CartResult<T> = Result<T, CartError>;

/// Convert CartError to AppError for standardized error responses
impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::CartNotFound(_) => AppError::NotFound("Cart not found".to_string()),
            CartError::ItemNotFound(id) => {
                AppError::NotFound(format!("Item {} not found in cart", id))
            }
            CartError::ProductNotFound(id) => {
                AppError::NotFound(format!("Product {} not found", id))
            }
            CartError::Validation(msg) => AppError::BadRequest(msg),
            CartError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CartError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for CartError {
    fn from(err: mongodb::error::Error) -> Self {
        CartError::Database(err.to_string())
    }
}
