//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, movies, rentals, stats, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cinerent API",
        version = "0.1.0",
        description = "Movie Rental Shop Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        // Movies
        movies::list_movies,
        movies::get_movie,
        movies::create_movie,
        movies::update_movie,
        movies::delete_movie,
        // Rentals
        rentals::list_rentals,
        rentals::get_rental,
        rentals::list_user_rentals,
        rentals::list_movie_rentals,
        rentals::create_rental,
        rentals::return_rental,
        rentals::delete_rental,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Users
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            // Movies
            crate::models::movie::Movie,
            crate::models::movie::CreateMovie,
            crate::models::movie::UpdateMovie,
            // Rentals
            crate::models::rental::Rental,
            crate::models::rental::RentalDetails,
            crate::models::rental::CreateRental,
            rentals::ReturnRentalRequest,
            // Stats
            crate::services::stats::StatsSnapshot,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "User management"),
        (name = "movies", description = "Movie catalog management"),
        (name = "rentals", description = "Rental lifecycle"),
        (name = "stats", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
