//! Rental stations and their bike counters.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::StationService;
