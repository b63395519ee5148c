pub mod errors;
pub mod db;
pub mod user;
pub mod admin;
pub mod station;
pub mod bicycle;
pub mod payment;
pub mod booking;
pub mod rental;
