//! Cinerent Movie Rental Shop Management
//!
//! A Rust implementation of the Cinerent rental-shop server, providing a
//! REST JSON API for managing users, the movie catalog, and rentals.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
