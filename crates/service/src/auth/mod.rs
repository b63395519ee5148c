//! Auth module: registration, login and token verification.
//!
//! Validation, hashing and token handling are plain components injected into [`AuthService`];
//! persistence goes through [`crate::user::repository::UserRepository`].

pub mod domain;
pub mod errors;
pub mod password;
pub mod token;
pub mod service;

pub use service::AuthService;
pub use token::{Claims, TokenIssuer};
