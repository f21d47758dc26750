//! In-memory reference store
//!
//! A map-backed implementation of [`Store`] guarded by a single `RwLock`, so
//! every mutation observes and updates the whole ledger atomically. The
//! availability flip on rental creation happens under the same write lock as
//! the availability check, which closes the double-booking race of separate
//! read + write steps.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{
        movie::{CreateMovie, Movie, UpdateMovie},
        rental::{CreateRental, Rental, RentalDetails},
        user::{CreateUser, UpdateUser, User},
    },
};

use super::Store;

/// Ledger state: the three collections plus their id sequences
///
/// Collections are keyed by id; `BTreeMap` iteration returns ascending ids,
/// which equals insertion order because ids are allocated monotonically and
/// never reused within a process lifetime.
#[derive(Debug, Default)]
struct Ledger {
    users: BTreeMap<i32, User>,
    movies: BTreeMap<i32, Movie>,
    rentals: BTreeMap<i32, Rental>,
    user_seq: i32,
    movie_seq: i32,
    rental_seq: i32,
}

impl Ledger {
    fn create_user(&mut self, data: CreateUser) -> User {
        self.user_seq += 1;
        let user = User {
            id: self.user_seq,
            name: data.name,
            email: data.email,
            phone: data.phone,
            created_at: Utc::now(),
        };
        self.users.insert(user.id, user.clone());
        user
    }

    fn update_user(&mut self, id: i32, data: UpdateUser) -> AppResult<User> {
        let user = self
            .users
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))?;
        user.apply(data);
        Ok(user.clone())
    }

    fn delete_user(&mut self, id: i32) -> AppResult<()> {
        if !self.users.contains_key(&id) {
            return Err(AppError::NotFound(format!("User with id {} not found", id)));
        }
        if self.rentals.values().any(|r| r.user_id == id && r.is_open()) {
            return Err(AppError::Conflict(
                "Cannot delete user with active rentals".to_string(),
            ));
        }
        self.users.remove(&id);
        Ok(())
    }

    fn create_movie(&mut self, data: CreateMovie) -> Movie {
        self.movie_seq += 1;
        let movie = Movie {
            id: self.movie_seq,
            title: data.title,
            director: data.director,
            year: data.year,
            genre: data.genre,
            description: data.description,
            available: data.available.unwrap_or(true),
            created_at: Utc::now(),
        };
        self.movies.insert(movie.id, movie.clone());
        movie
    }

    fn update_movie(&mut self, id: i32, data: UpdateMovie) -> AppResult<Movie> {
        let movie = self
            .movies
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Movie with id {} not found", id)))?;
        movie.apply(data);
        Ok(movie.clone())
    }

    fn delete_movie(&mut self, id: i32) -> AppResult<()> {
        if !self.movies.contains_key(&id) {
            return Err(AppError::NotFound(format!("Movie with id {} not found", id)));
        }
        if self.rentals.values().any(|r| r.movie_id == id && r.is_open()) {
            return Err(AppError::Conflict(
                "Cannot delete movie with active rentals".to_string(),
            ));
        }
        self.movies.remove(&id);
        Ok(())
    }

    /// Atomic claim: user exists, movie exists and is available, flip the
    /// flag and store the open rental - all under the caller's write lock
    fn create_rental(&mut self, data: CreateRental) -> AppResult<RentalDetails> {
        if !self.users.contains_key(&data.user_id) {
            return Err(AppError::NotFound(format!(
                "User with id {} not found",
                data.user_id
            )));
        }
        let movie = self
            .movies
            .get_mut(&data.movie_id)
            .ok_or_else(|| AppError::NotFound(format!("Movie with id {} not found", data.movie_id)))?;
        if !movie.available {
            return Err(AppError::Conflict(
                "Movie is not available for rent".to_string(),
            ));
        }
        movie.available = false;

        self.rental_seq += 1;
        let rental = Rental {
            id: self.rental_seq,
            user_id: data.user_id,
            movie_id: data.movie_id,
            rented_date: data.rented_date,
            due_date: data.due_date,
            returned_date: None,
            notes: data.notes,
            created_at: Utc::now(),
        };
        self.rentals.insert(rental.id, rental.clone());
        self.enrich(&rental)
    }

    /// Sets the returned date and re-marks the movie available. A second
    /// return overwrites the stored date; the availability flip is idempotent.
    fn return_rental(&mut self, id: i32, returned_date: NaiveDate) -> AppResult<RentalDetails> {
        let rental = self
            .rentals
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Rental with id {} not found", id)))?;
        rental.returned_date = Some(returned_date);
        let rental = rental.clone();

        let movie = self.movies.get_mut(&rental.movie_id).ok_or_else(|| {
            AppError::Integrity(format!(
                "Rental {} references missing movie {}",
                rental.id, rental.movie_id
            ))
        })?;
        movie.available = true;

        self.enrich(&rental)
    }

    fn delete_rental(&mut self, id: i32) -> AppResult<()> {
        let rental = self
            .rentals
            .remove(&id)
            .ok_or_else(|| AppError::NotFound(format!("Rental with id {} not found", id)))?;
        // Deleting an open rental releases the movie back to available
        if rental.is_open() {
            if let Some(movie) = self.movies.get_mut(&rental.movie_id) {
                movie.available = true;
            }
        }
        Ok(())
    }

    /// Read-time join of a rental with its user and movie snapshots
    ///
    /// A missing reference means the deletion guards were bypassed; that is
    /// surfaced as an integrity error, never silently skipped.
    fn enrich(&self, rental: &Rental) -> AppResult<RentalDetails> {
        let user = self.users.get(&rental.user_id).ok_or_else(|| {
            AppError::Integrity(format!(
                "Rental {} references missing user {}",
                rental.id, rental.user_id
            ))
        })?;
        let movie = self.movies.get(&rental.movie_id).ok_or_else(|| {
            AppError::Integrity(format!(
                "Rental {} references missing movie {}",
                rental.id, rental.movie_id
            ))
        })?;
        Ok(RentalDetails {
            rental: rental.clone(),
            user: user.clone(),
            movie: movie.clone(),
        })
    }

    fn enrich_filtered<F>(&self, filter: F) -> AppResult<Vec<RentalDetails>>
    where
        F: Fn(&Rental) -> bool,
    {
        self.rentals
            .values()
            .filter(|r| filter(r))
            .map(|r| self.enrich(r))
            .collect()
    }
}

/// In-memory store with a single lock guarding the whole ledger
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Ledger>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the demo fixture: 4 users, 7 movies, and
    /// 3 open rentals in varying states (due later, due today, overdue)
    pub fn with_demo_data() -> AppResult<Self> {
        let mut ledger = Ledger::default();

        for (name, email, phone) in [
            ("John Smith", "john.smith@example.com", "555-123-4567"),
            ("Jane Cooper", "jane.cooper@example.com", "555-987-6543"),
            ("Robert Johnson", "robert.j@example.com", "555-456-7890"),
            ("Anna Davis", "anna.davis@example.com", "555-789-1234"),
        ] {
            ledger.create_user(CreateUser {
                name: name.to_string(),
                email: email.to_string(),
                phone: Some(phone.to_string()),
            });
        }

        for (title, director, year, genre, description) in [
            (
                "Inception",
                "Christopher Nolan",
                2010,
                "Sci-Fi",
                "A thief who steals corporate secrets through the use of dream-sharing technology.",
            ),
            (
                "The Matrix",
                "Lana Wachowski",
                1999,
                "Sci-Fi",
                "A computer hacker learns about the true nature of reality and his role in the war against the controllers.",
            ),
            (
                "The Shawshank Redemption",
                "Frank Darabont",
                1994,
                "Drama",
                "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
            ),
            (
                "Interstellar",
                "Christopher Nolan",
                2014,
                "Sci-Fi",
                "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
            ),
            (
                "Pulp Fiction",
                "Quentin Tarantino",
                1994,
                "Crime/Drama",
                "The lives of two mob hitmen, a boxer, a gangster and his wife intersect in four tales of violence and redemption.",
            ),
            (
                "The Godfather",
                "Francis Ford Coppola",
                1972,
                "Crime/Drama",
                "The aging patriarch of an organized crime dynasty transfers control to his reluctant son.",
            ),
            (
                "Parasite",
                "Bong Joon Ho",
                2019,
                "Drama/Thriller",
                "Greed and class discrimination threaten the newly formed symbiotic relationship between the wealthy Park family and the destitute Kim clan.",
            ),
        ] {
            ledger.create_movie(CreateMovie {
                title: title.to_string(),
                director: Some(director.to_string()),
                year: Some(year),
                genre: Some(genre.to_string()),
                description: Some(description.to_string()),
                available: None,
            });
        }

        let today = Utc::now().date_naive();
        let day = chrono::Duration::days(1);
        for (user_id, movie_id, rented_date, due_date, notes) in [
            (1, 1, today - day * 7, today + day * 7, "First rental"),
            (2, 2, today - day * 7, today, "Please return on time"),
            (3, 3, today - day * 10, today - day * 3, "Extended rental"),
        ] {
            ledger.create_rental(CreateRental {
                user_id,
                movie_id,
                rented_date,
                due_date,
                notes: Some(notes.to_string()),
            })?;
        }

        Ok(Self {
            inner: RwLock::new(ledger),
        })
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.inner.read().await.users.values().cloned().collect())
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.inner
            .read()
            .await
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    async fn create_user(&self, data: CreateUser) -> AppResult<User> {
        Ok(self.inner.write().await.create_user(data))
    }

    async fn update_user(&self, id: i32, data: UpdateUser) -> AppResult<User> {
        self.inner.write().await.update_user(id, data)
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.inner.write().await.delete_user(id)
    }

    async fn list_movies(&self) -> AppResult<Vec<Movie>> {
        Ok(self.inner.read().await.movies.values().cloned().collect())
    }

    async fn get_movie(&self, id: i32) -> AppResult<Movie> {
        self.inner
            .read()
            .await
            .movies
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Movie with id {} not found", id)))
    }

    async fn create_movie(&self, data: CreateMovie) -> AppResult<Movie> {
        Ok(self.inner.write().await.create_movie(data))
    }

    async fn update_movie(&self, id: i32, data: UpdateMovie) -> AppResult<Movie> {
        self.inner.write().await.update_movie(id, data)
    }

    async fn delete_movie(&self, id: i32) -> AppResult<()> {
        self.inner.write().await.delete_movie(id)
    }

    async fn list_rentals(&self) -> AppResult<Vec<RentalDetails>> {
        self.inner.read().await.enrich_filtered(|_| true)
    }

    async fn get_rental(&self, id: i32) -> AppResult<RentalDetails> {
        let ledger = self.inner.read().await;
        let rental = ledger
            .rentals
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Rental with id {} not found", id)))?;
        ledger.enrich(rental)
    }

    async fn list_rentals_by_user(&self, user_id: i32) -> AppResult<Vec<RentalDetails>> {
        self.inner
            .read()
            .await
            .enrich_filtered(|r| r.user_id == user_id)
    }

    async fn list_rentals_by_movie(&self, movie_id: i32) -> AppResult<Vec<RentalDetails>> {
        self.inner
            .read()
            .await
            .enrich_filtered(|r| r.movie_id == movie_id)
    }

    async fn create_rental(&self, data: CreateRental) -> AppResult<RentalDetails> {
        self.inner.write().await.create_rental(data)
    }

    async fn return_rental(&self, id: i32, returned_date: NaiveDate) -> AppResult<RentalDetails> {
        self.inner.write().await.return_rental(id, returned_date)
    }

    async fn delete_rental(&self, id: i32) -> AppResult<()> {
        self.inner.write().await.delete_rental(id)
    }

    async fn count_users(&self) -> AppResult<i64> {
        Ok(self.inner.read().await.users.len() as i64)
    }

    async fn count_available_movies(&self) -> AppResult<i64> {
        Ok(self
            .inner
            .read()
            .await
            .movies
            .values()
            .filter(|m| m.available)
            .count() as i64)
    }

    async fn count_active_rentals(&self) -> AppResult<i64> {
        Ok(self
            .inner
            .read()
            .await
            .rentals
            .values()
            .filter(|r| r.is_open())
            .count() as i64)
    }
}
