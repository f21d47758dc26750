//! Storage layer for the rental ledger
//!
//! The ledger's collections live behind the [`Store`] trait so that the
//! in-memory reference store can be swapped for a relational database without
//! touching the business rules in the service layer.

pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    error::AppResult,
    models::{
        movie::{CreateMovie, Movie, UpdateMovie},
        rental::{CreateRental, RentalDetails},
        user::{CreateUser, UpdateUser, User},
    },
};

pub use memory::MemoryStore;

/// Shared handle to the configured store implementation
pub type SharedStore = Arc<dyn Store>;

/// Storage interface owning the user, movie, and rental collections
///
/// Implementations must serialize mutating operations: `create_rental` is an
/// atomic claim-if-available, and the deletion guards are check-then-act
/// sequences that are unsafe under interleaving.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Store: Send + Sync {
    // User operations
    async fn list_users(&self) -> AppResult<Vec<User>>;
    async fn get_user(&self, id: i32) -> AppResult<User>;
    async fn create_user(&self, data: CreateUser) -> AppResult<User>;
    async fn update_user(&self, id: i32, data: UpdateUser) -> AppResult<User>;
    /// Fails with a conflict if any open rental references the user
    async fn delete_user(&self, id: i32) -> AppResult<()>;

    // Movie operations
    async fn list_movies(&self) -> AppResult<Vec<Movie>>;
    async fn get_movie(&self, id: i32) -> AppResult<Movie>;
    async fn create_movie(&self, data: CreateMovie) -> AppResult<Movie>;
    async fn update_movie(&self, id: i32, data: UpdateMovie) -> AppResult<Movie>;
    /// Fails with a conflict if any open rental references the movie
    async fn delete_movie(&self, id: i32) -> AppResult<()>;

    // Rental operations
    async fn list_rentals(&self) -> AppResult<Vec<RentalDetails>>;
    async fn get_rental(&self, id: i32) -> AppResult<RentalDetails>;
    async fn list_rentals_by_user(&self, user_id: i32) -> AppResult<Vec<RentalDetails>>;
    async fn list_rentals_by_movie(&self, movie_id: i32) -> AppResult<Vec<RentalDetails>>;
    /// Atomically verifies the user exists and claims the movie if available,
    /// then stores the new open rental
    async fn create_rental(&self, data: CreateRental) -> AppResult<RentalDetails>;
    /// Sets the returned date and marks the movie available again
    async fn return_rental(&self, id: i32, returned_date: NaiveDate) -> AppResult<RentalDetails>;
    /// Removes the rental; an open rental releases its movie on the way out
    async fn delete_rental(&self, id: i32) -> AppResult<()>;

    // Derived statistics, computed on demand
    async fn count_users(&self) -> AppResult<i64>;
    async fn count_available_movies(&self) -> AppResult<i64>;
    async fn count_active_rentals(&self) -> AppResult<i64>;
}
