//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shop API",
        version = "0.1.0",
        description = "Storefront backend: users, carts, and order placement",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/auth", api = domain_users::auth_handlers::ApiDoc),
        (path = "/api/users", api = domain_users::handlers::ApiDoc),
        (path = "/api/cart", api = domain_carts::handlers::ApiDoc),
        (path = "/api/orders", api = domain_orders::handlers::ApiDoc)
    ),
    tags(
        (name = "Auth", description = "Registration and login endpoints"),
        (name = "Users", description = "User account management endpoints"),
        (name = "Cart", description = "Per-user shopping cart endpoints"),
        (name = "Orders", description = "Order placement via the order service")
    )
)]
pub struct ApiDoc;
