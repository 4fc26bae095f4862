//! # Users Domain
//!
//! User accounts with credential-based authentication:
//! - Registration and login with Argon2 password hashing
//! - JWT issuance on register/login
//! - CRUD over user profiles
//! - Cascading deletion of a user's remote orders
//!
//! ## Architecture
//!
//! - **models**: `User` entity and request/response DTOs
//! - **repository**: `UserRepository` trait + in-memory implementation
//! - **mongodb**: MongoDB-backed repository
//! - **service**: Business logic (hashing, uniqueness, delete saga)
//! - **handlers**: HTTP endpoints for user management
//! - **auth_handlers**: HTTP endpoints for register/login

pub mod auth_handlers;
pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{UserError, UserResult};
pub use models::{
    Address, AuthResponse, LoginRequest, RegisterRequest, UpdateUser, User, UserResponse,
};
pub use mongodb::MongoUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
