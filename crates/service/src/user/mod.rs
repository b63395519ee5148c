//! User accounts: domain types, repository abstraction and the profile service.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::UserService;
