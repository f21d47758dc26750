//! Movie catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::movie::{CreateMovie, Movie, UpdateMovie},
};

/// List all movies
#[utoipa::path(
    get,
    path = "/movies",
    tag = "movies",
    responses(
        (status = 200, description = "List of movies in insertion order", body = Vec<Movie>)
    )
)]
pub async fn list_movies(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.services.movies.list_movies().await?;
    Ok(Json(movies))
}

/// Get movie details by ID
#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = "movies",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie details", body = Movie),
        (status = 400, description = "Invalid movie ID"),
        (status = 404, description = "Movie not found")
    )
)]
pub async fn get_movie(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Movie>> {
    let movie = state.services.movies.get_movie(id).await?;
    Ok(Json(movie))
}

/// Create a new movie
#[utoipa::path(
    post,
    path = "/movies",
    tag = "movies",
    request_body = CreateMovie,
    responses(
        (status = 201, description = "Movie created", body = Movie),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_movie(
    State(state): State<crate::AppState>,
    Json(movie): Json<CreateMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let created = state.services.movies.create_movie(movie).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing movie (merge semantics)
#[utoipa::path(
    patch,
    path = "/movies/{id}",
    tag = "movies",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    request_body = UpdateMovie,
    responses(
        (status = 200, description = "Movie updated", body = Movie),
        (status = 400, description = "Invalid movie ID or input"),
        (status = 404, description = "Movie not found")
    )
)]
pub async fn update_movie(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(movie): Json<UpdateMovie>,
) -> AppResult<Json<Movie>> {
    let updated = state.services.movies.update_movie(id, movie).await?;
    Ok(Json(updated))
}

/// Delete a movie
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = "movies",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 204, description = "Movie deleted"),
        (status = 400, description = "Invalid movie ID or movie has active rentals"),
        (status = 404, description = "Movie not found")
    )
)]
pub async fn delete_movie(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.movies.delete_movie(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
