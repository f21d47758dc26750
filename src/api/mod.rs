//! API handlers for the Cinerent REST endpoints

pub mod health;
pub mod movies;
pub mod openapi;
pub mod rentals;
pub mod stats;
pub mod users;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration for the browser dashboard
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Users
        .route("/users", get(users::list_users))
        .route("/users", post(users::create_user))
        .route("/users/:id", get(users::get_user))
        .route("/users/:id", patch(users::update_user))
        .route("/users/:id", delete(users::delete_user))
        .route("/users/:id/rentals", get(rentals::list_user_rentals))
        // Movies
        .route("/movies", get(movies::list_movies))
        .route("/movies", post(movies::create_movie))
        .route("/movies/:id", get(movies::get_movie))
        .route("/movies/:id", patch(movies::update_movie))
        .route("/movies/:id", delete(movies::delete_movie))
        .route("/movies/:id/rentals", get(rentals::list_movie_rentals))
        // Rentals
        .route("/rentals", get(rentals::list_rentals))
        .route("/rentals", post(rentals::create_rental))
        .route("/rentals/:id", get(rentals::get_rental))
        .route("/rentals/:id", delete(rentals::delete_rental))
        .route("/rentals/:id/return", patch(rentals::return_rental))
        // Statistics
        .route("/stats", get(stats::get_stats))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api", api)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
