//! Service layer holding the business rules of the rental backend.
//! - Validation, credential hashing and token handling live here, independent of HTTP.
//! - Repositories are traits with a SeaORM implementation and an in-memory one.
//! - Storage errors are classified here before they reach the web layer.

pub mod errors;
pub mod validation;
pub mod auth;
pub mod user;
pub mod station;
#[cfg(test)]
pub mod test_support;
