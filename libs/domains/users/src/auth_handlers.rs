use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use axum_helpers::{
    JwtAuth, ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, TooManyRequestsResponse,
        UnauthorizedResponse,
    },
};
use utoipa::OpenApi;

use crate::error::{UserError, UserResult};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for the Auth API
#[derive(OpenApi)]
#[openapi(
    paths(register, login),
    components(
        schemas(RegisterRequest, LoginRequest, AuthResponse, UserResponse),
        responses(
            BadRequestValidationResponse,
            UnauthorizedResponse,
            TooManyRequestsResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Auth", description = "Registration and login endpoints")
    )
)]
pub struct ApiDoc;

/// Shared state for auth endpoints: the user service plus the token signer.
pub struct AuthState<R: UserRepository> {
    pub service: UserService<R>,
    pub jwt: JwtAuth,
}

impl<R: UserRepository> Clone for AuthState<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            jwt: self.jwt.clone(),
        }
    }
}

/// Create the auth router with registration and login endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>, jwt: JwtAuth) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(AuthState { service, jwt })
}

/// Register a new user and issue a token
#[utoipa::path(
    post,
    path = "/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = AuthResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 429, response = TooManyRequestsResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn register<R: UserRepository>(
    State(state): State<AuthState<R>>,
    ValidatedJson(input): ValidatedJson<RegisterRequest>,
) -> UserResult<impl IntoResponse> {
    let user = state.service.register(input).await?;
    let token = issue_token(&state.jwt, &user)?;

    Ok((StatusCode::CREATED, Json(AuthResponse { user, token })))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 429, response = TooManyRequestsResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn login<R: UserRepository>(
    State(state): State<AuthState<R>>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> UserResult<Json<AuthResponse>> {
    let user = state
        .service
        .verify_credentials(&input.email, &input.password)
        .await?;
    let token = issue_token(&state.jwt, &user)?;

    Ok(Json(AuthResponse { user, token }))
}

fn issue_token(jwt: &JwtAuth, user: &UserResponse) -> UserResult<String> {
    jwt.create_token(&user.id.to_string(), &user.email)
        .map_err(|e| UserError::Token(e.to_string()))
}
