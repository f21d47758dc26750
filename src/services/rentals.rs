//! Rental lifecycle service

use chrono::{NaiveDate, Utc};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::rental::{CreateRental, RentalDetails},
    repository::SharedStore,
};

#[derive(Clone)]
pub struct RentalsService {
    store: SharedStore,
}

impl RentalsService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// List all rentals, enriched with user and movie snapshots
    pub async fn list_rentals(&self) -> AppResult<Vec<RentalDetails>> {
        self.store.list_rentals().await
    }

    /// Get an enriched rental by ID
    pub async fn get_rental(&self, id: i32) -> AppResult<RentalDetails> {
        self.store.get_rental(id).await
    }

    /// List rentals for a user
    pub async fn list_rentals_by_user(&self, user_id: i32) -> AppResult<Vec<RentalDetails>> {
        self.store.list_rentals_by_user(user_id).await
    }

    /// List rentals for a movie
    pub async fn list_rentals_by_movie(&self, movie_id: i32) -> AppResult<Vec<RentalDetails>> {
        self.store.list_rentals_by_movie(movie_id).await
    }

    /// Create a rental; the store claims the movie atomically
    pub async fn create_rental(&self, data: CreateRental) -> AppResult<RentalDetails> {
        data.validate()?;
        if data.due_date < data.rented_date {
            return Err(AppError::Validation(
                "Due date must be on or after rented date".to_string(),
            ));
        }
        let details = self.store.create_rental(data).await?;
        tracing::info!(
            rental_id = details.rental.id,
            user_id = details.rental.user_id,
            movie_id = details.rental.movie_id,
            "Rental created"
        );
        Ok(details)
    }

    /// Return a rental, defaulting the return date to today
    pub async fn return_rental(
        &self,
        id: i32,
        returned_date: Option<NaiveDate>,
    ) -> AppResult<RentalDetails> {
        let date = returned_date.unwrap_or_else(|| Utc::now().date_naive());
        let details = self.store.return_rental(id, date).await?;
        tracing::info!(rental_id = id, movie_id = details.rental.movie_id, "Rental returned");
        Ok(details)
    }

    /// Delete a rental; an open one releases its movie
    pub async fn delete_rental(&self, id: i32) -> AppResult<()> {
        self.store.delete_rental(id).await?;
        tracing::info!(rental_id = id, "Rental deleted");
        Ok(())
    }
}
