use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use axum_helpers::{
    CurrentUser, UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, UnauthorizedResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CartResult;
use crate::models::{Cart, CartItem, UpdateQuantity, UpsertItem};
use crate::repository::CartRepository;
use crate::service::CartService;

/// OpenAPI documentation for the Cart API
#[derive(OpenApi)]
#[openapi(
    paths(get_cart, upsert_item, update_quantity, remove_item, clear_cart),
    components(
        schemas(Cart, CartItem, UpsertItem, UpdateQuantity),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Cart", description = "Per-user shopping cart endpoints")
    )
)]
pub struct ApiDoc;

/// Create the cart router with all HTTP endpoints.
///
/// Every handler takes the user id from the verified bearer token via
/// `CurrentUser`; the request body never names a user.
pub fn router<R: CartRepository + 'static>(service: CartService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(get_cart).delete(clear_cart))
        .route("/items", post(upsert_item))
        .route(
            "/items/{product_id}",
            put(update_quantity).delete(remove_item),
        )
        .with_state(shared_service)
}

/// Get the caller's cart
#[utoipa::path(
    get,
    path = "",
    tag = "Cart",
    responses(
        (status = 200, description = "The caller's cart", body = Cart),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_cart<R: CartRepository>(
    State(service): State<Arc<CartService<R>>>,
    user: CurrentUser,
) -> CartResult<Json<Cart>> {
    let cart = service.get_cart(user.user_id).await?;
    Ok(Json(cart))
}

/// Add a product to the cart (quantity replaced if the line exists)
#[utoipa::path(
    post,
    path = "/items",
    tag = "Cart",
    request_body = UpsertItem,
    responses(
        (status = 200, description = "Updated cart", body = Cart),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn upsert_item<R: CartRepository>(
    State(service): State<Arc<CartService<R>>>,
    user: CurrentUser,
    ValidatedJson(input): ValidatedJson<UpsertItem>,
) -> CartResult<Json<Cart>> {
    let cart = service
        .upsert_item(user.user_id, input.product_id, input.quantity)
        .await?;
    Ok(Json(cart))
}

/// Change the quantity of an existing cart line
#[utoipa::path(
    put,
    path = "/items/{product_id}",
    tag = "Cart",
    params(
        ("product_id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateQuantity,
    responses(
        (status = 200, description = "Updated cart", body = Cart),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_quantity<R: CartRepository>(
    State(service): State<Arc<CartService<R>>>,
    user: CurrentUser,
    UuidPath(product_id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateQuantity>,
) -> CartResult<Json<Cart>> {
    let cart = service
        .update_item_quantity(user.user_id, product_id, input.quantity)
        .await?;
    Ok(Json(cart))
}

/// Remove a product from the cart (idempotent)
#[utoipa::path(
    delete,
    path = "/items/{product_id}",
    tag = "Cart",
    params(
        ("product_id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Updated cart", body = Cart),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove_item<R: CartRepository>(
    State(service): State<Arc<CartService<R>>>,
    user: CurrentUser,
    UuidPath(product_id): UuidPath,
) -> CartResult<Json<Cart>> {
    let cart = service.remove_item(user.user_id, product_id).await?;
    Ok(Json(cart))
}

/// Delete the caller's cart
#[utoipa::path(
    delete,
    path = "",
    tag = "Cart",
    responses(
        (status = 204, description = "Cart deleted"),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn clear_cart<R: CartRepository>(
    State(service): State<Arc<CartService<R>>>,
    user: CurrentUser,
) -> CartResult<impl IntoResponse> {
    service.clear(user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
