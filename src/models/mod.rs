//! Data models for users, movies, and rentals

pub mod movie;
pub mod rental;
pub mod user;
