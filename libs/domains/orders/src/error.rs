use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::AppError;
use remote::RemoteError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Cart not found for user {0}")]
    CartNotFound(Uuid),

    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("Database error: {0}")]
    Database(String),
}

pub type OrderResult<T> = Result<T, OrderError>;

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        match self {
            OrderError::CartNotFound(_) => {
                AppError::NotFound("Cart not found".to_string()).into_response()
            }
            OrderError::UserNotFound(id) => {
                AppError::NotFound(format!("User {} not found", id)).into_response()
            }
            // The order service's error body passes through verbatim
            OrderError::Remote(RemoteError::Status { status, body }) => {
                tracing::warn!(status, "Order service rejected the request");
                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, Json(body)).into_response()
            }
            OrderError::Remote(err) => {
                tracing::error!(error = %err, "Order service unreachable");
                AppError::InternalServerError(err.to_string()).into_response()
            }
            OrderError::Database(msg) => {
                AppError::InternalServerError(msg).into_response()
            }
        }
    }
}
