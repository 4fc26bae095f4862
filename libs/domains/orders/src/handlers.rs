use axum::{Json, Router, extract::State, routing::post};
use axum_helpers::{
    CurrentUser,
    errors::responses::{InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse},
};
use serde_json::Value;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::OrderResult;
use crate::payload::{OrderItem, OrderPayload};
use domain_carts::CartRepository;
use domain_users::UserRepository;

use crate::service::OrderService;

/// OpenAPI documentation for the Orders API
#[derive(OpenApi)]
#[openapi(
    paths(create_order),
    components(
        schemas(OrderPayload, OrderItem),
        responses(NotFoundResponse, UnauthorizedResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Orders", description = "Order placement via the order service")
    )
)]
pub struct ApiDoc;

/// Create the orders router
pub fn router<C, U>(service: OrderService<C, U>) -> Router
where
    C: CartRepository + 'static,
    U: UserRepository + 'static,
{
    Router::new()
        .route("/", post(create_order))
        .with_state(Arc::new(service))
}

/// Submit the caller's cart as an order
#[utoipa::path(
    post,
    path = "",
    tag = "Orders",
    responses(
        (status = 200, description = "Order accepted by the order service", body = Value),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_order<C, U>(
    State(service): State<Arc<OrderService<C, U>>>,
    user: CurrentUser,
) -> OrderResult<Json<Value>>
where
    C: CartRepository,
    U: UserRepository,
{
    let order = service.create_order(user.user_id).await?;
    Ok(Json(order))
}
