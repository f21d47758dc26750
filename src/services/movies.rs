//! Movie catalog service

use validator::Validate;

use crate::{
    error::AppResult,
    models::movie::{CreateMovie, Movie, UpdateMovie},
    repository::SharedStore,
};

#[derive(Clone)]
pub struct MoviesService {
    store: SharedStore,
}

impl MoviesService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// List all movies in insertion order
    pub async fn list_movies(&self) -> AppResult<Vec<Movie>> {
        self.store.list_movies().await
    }

    /// Get a movie by ID
    pub async fn get_movie(&self, id: i32) -> AppResult<Movie> {
        self.store.get_movie(id).await
    }

    /// Create a new movie, available by default
    pub async fn create_movie(&self, data: CreateMovie) -> AppResult<Movie> {
        data.validate()?;
        let movie = self.store.create_movie(data).await?;
        tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");
        Ok(movie)
    }

    /// Merge the supplied fields onto an existing movie
    pub async fn update_movie(&self, id: i32, data: UpdateMovie) -> AppResult<Movie> {
        data.validate()?;
        self.store.update_movie(id, data).await
    }

    /// Delete a movie; blocked while any rental for it is open
    pub async fn delete_movie(&self, id: i32) -> AppResult<()> {
        self.store.delete_movie(id).await?;
        tracing::info!(movie_id = id, "Movie deleted");
        Ok(())
    }
}
