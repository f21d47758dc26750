//! Rental lifecycle endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::rental::{CreateRental, RentalDetails},
};

/// Return rental request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRentalRequest {
    /// Return date; defaults to today when omitted
    pub return_date: Option<NaiveDate>,
}

/// List all rentals, enriched with their user and movie
#[utoipa::path(
    get,
    path = "/rentals",
    tag = "rentals",
    responses(
        (status = 200, description = "List of enriched rentals", body = Vec<RentalDetails>)
    )
)]
pub async fn list_rentals(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<RentalDetails>>> {
    let rentals = state.services.rentals.list_rentals().await?;
    Ok(Json(rentals))
}

/// Get an enriched rental by ID
#[utoipa::path(
    get,
    path = "/rentals/{id}",
    tag = "rentals",
    params(
        ("id" = i32, Path, description = "Rental ID")
    ),
    responses(
        (status = 200, description = "Enriched rental", body = RentalDetails),
        (status = 400, description = "Invalid rental ID"),
        (status = 404, description = "Rental not found")
    )
)]
pub async fn get_rental(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<RentalDetails>> {
    let rental = state.services.rentals.get_rental(id).await?;
    Ok(Json(rental))
}

/// List rentals for a user
#[utoipa::path(
    get,
    path = "/users/{id}/rentals",
    tag = "rentals",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User's rentals", body = Vec<RentalDetails>),
        (status = 400, description = "Invalid user ID")
    )
)]
pub async fn list_user_rentals(
    State(state): State<crate::AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Vec<RentalDetails>>> {
    let rentals = state.services.rentals.list_rentals_by_user(user_id).await?;
    Ok(Json(rentals))
}

/// List rentals for a movie
#[utoipa::path(
    get,
    path = "/movies/{id}/rentals",
    tag = "rentals",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie's rentals", body = Vec<RentalDetails>),
        (status = 400, description = "Invalid movie ID")
    )
)]
pub async fn list_movie_rentals(
    State(state): State<crate::AppState>,
    Path(movie_id): Path<i32>,
) -> AppResult<Json<Vec<RentalDetails>>> {
    let rentals = state
        .services
        .rentals
        .list_rentals_by_movie(movie_id)
        .await?;
    Ok(Json(rentals))
}

/// Create a new rental (rent a movie)
#[utoipa::path(
    post,
    path = "/rentals",
    tag = "rentals",
    request_body = CreateRental,
    responses(
        (status = 201, description = "Rental created", body = RentalDetails),
        (status = 400, description = "Invalid input, due date before rented date, or movie unavailable"),
        (status = 404, description = "User or movie not found")
    )
)]
pub async fn create_rental(
    State(state): State<crate::AppState>,
    Json(rental): Json<CreateRental>,
) -> AppResult<(StatusCode, Json<RentalDetails>)> {
    let created = state.services.rentals.create_rental(rental).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Return a rented movie
#[utoipa::path(
    patch,
    path = "/rentals/{id}/return",
    tag = "rentals",
    params(
        ("id" = i32, Path, description = "Rental ID")
    ),
    request_body = ReturnRentalRequest,
    responses(
        (status = 200, description = "Rental returned", body = RentalDetails),
        (status = 400, description = "Invalid rental ID"),
        (status = 404, description = "Rental not found")
    )
)]
pub async fn return_rental(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    body: Option<Json<ReturnRentalRequest>>,
) -> AppResult<Json<RentalDetails>> {
    let return_date = body.and_then(|Json(request)| request.return_date);
    let returned = state.services.rentals.return_rental(id, return_date).await?;
    Ok(Json(returned))
}

/// Delete a rental
#[utoipa::path(
    delete,
    path = "/rentals/{id}",
    tag = "rentals",
    params(
        ("id" = i32, Path, description = "Rental ID")
    ),
    responses(
        (status = 204, description = "Rental deleted"),
        (status = 400, description = "Invalid rental ID"),
        (status = 404, description = "Rental not found")
    )
)]
pub async fn delete_rental(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.rentals.delete_rental(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
