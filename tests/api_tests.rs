//! In-process API tests driving the real router

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use cinerent_server::{api, repository::MemoryStore, services::Services, AppConfig, AppState};

fn app(seed: bool) -> Router {
    let store = if seed {
        MemoryStore::with_demo_data().expect("demo fixture")
    } else {
        MemoryStore::new()
    };
    let state = AppState {
        config: Arc::new(AppConfig::default()),
        services: Arc::new(Services::new(Arc::new(store))),
    };
    api::router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    };
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let app = app(false);
    let (status, body) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn stats_reflect_the_seeded_store() {
    let app = app(true);
    let (status, body) = send(&app, "GET", "/api/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["activeRentals"], 3);
    assert_eq!(body["availableMovies"], 4);
    assert_eq!(body["registeredUsers"], 4);
}

#[tokio::test]
async fn users_are_listed_in_insertion_order_with_camel_case_fields() {
    let app = app(true);
    let (status, body) = send(&app, "GET", "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().expect("array body");
    assert_eq!(users.len(), 4);
    assert_eq!(users[0]["name"], "John Smith");
    assert_eq!(users[0]["email"], "john.smith@example.com");
    assert!(users[0]["createdAt"].is_string());
}

#[tokio::test]
async fn missing_and_malformed_ids_map_to_404_and_400() {
    let app = app(true);
    let (status, body) = send(&app, "GET", "/api/users/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let (status, _) = send(&app, "GET", "/api/users/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/api/movies/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/rentals/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_user_assigns_the_next_id() {
    let app = app(true);
    let (status, body) = send(
        &app,
        "POST",
        "/api/users",
        Some(json!({"name": "Eve Stone", "email": "eve.stone@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 5);
    assert_eq!(body["phone"], Value::Null);
}

#[tokio::test]
async fn invalid_email_is_rejected_with_400() {
    let app = app(false);
    let (status, body) = send(
        &app,
        "POST",
        "/api/users",
        Some(json!({"name": "Eve", "email": "not-an-email"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation");
}

#[tokio::test]
async fn patch_merges_only_the_supplied_fields() {
    let app = app(true);
    let (status, body) = send(
        &app,
        "PATCH",
        "/api/users/4",
        Some(json!({"phone": "555-000-1111"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 4);
    assert_eq!(body["name"], "Anna Davis");
    assert_eq!(body["phone"], "555-000-1111");
}

#[tokio::test]
async fn deleting_a_user_with_an_open_rental_is_blocked() {
    let app = app(true);
    // Seeded user 1 has open rental 1
    let (status, body) = send(&app, "DELETE", "/api/users/1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Cannot delete user with active rentals");

    // User 4 has no rentals at all
    let (status, _) = send(&app, "DELETE", "/api/users/4", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn deleting_a_movie_with_an_open_rental_is_blocked() {
    let app = app(true);
    let (status, body) = send(&app, "DELETE", "/api/movies/2", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Cannot delete movie with active rentals");

    let (status, _) = send(&app, "DELETE", "/api/movies/7", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn renting_an_unavailable_movie_is_rejected_without_state_change() {
    let app = app(true);
    // Movie 1 is out with seeded rental 1
    let (status, body) = send(
        &app,
        "POST",
        "/api/rentals",
        Some(json!({
            "userId": 4,
            "movieId": 1,
            "rentedDate": "2026-08-30",
            "dueDate": "2026-09-06"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Movie is not available for rent");

    let (_, stats) = send(&app, "GET", "/api/stats", None).await;
    assert_eq!(stats["activeRentals"], 3);
}

#[tokio::test]
async fn renting_against_missing_references_is_404() {
    let app = app(true);
    let (status, _) = send(
        &app,
        "POST",
        "/api/rentals",
        Some(json!({
            "userId": 99,
            "movieId": 4,
            "rentedDate": "2026-08-30",
            "dueDate": "2026-09-06"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "POST",
        "/api/rentals",
        Some(json!({
            "userId": 1,
            "movieId": 99,
            "rentedDate": "2026-08-30",
            "dueDate": "2026-09-06"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn due_date_before_rented_date_is_rejected() {
    let app = app(true);
    let (status, body) = send(
        &app,
        "POST",
        "/api/rentals",
        Some(json!({
            "userId": 4,
            "movieId": 4,
            "rentedDate": "2026-08-30",
            "dueDate": "2026-08-29"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation");
}

#[tokio::test]
async fn rentals_are_enriched_with_user_and_movie_snapshots() {
    let app = app(true);
    let (status, body) = send(&app, "GET", "/api/rentals/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userId"], 1);
    assert_eq!(body["movieId"], 1);
    assert_eq!(body["user"]["name"], "John Smith");
    assert_eq!(body["movie"]["title"], "Inception");
    assert_eq!(body["movie"]["available"], false);
    assert_eq!(body["returnedDate"], Value::Null);
    assert_eq!(body["notes"], "First rental");
}

#[tokio::test]
async fn rentals_can_be_filtered_by_user_and_movie() {
    let app = app(true);
    let (status, body) = send(&app, "GET", "/api/users/2/rentals", None).await;
    assert_eq!(status, StatusCode::OK);
    let rentals = body.as_array().expect("array body");
    assert_eq!(rentals.len(), 1);
    assert_eq!(rentals[0]["movie"]["title"], "The Matrix");

    let (status, body) = send(&app, "GET", "/api/movies/3/rentals", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("array body").len(), 1);

    // Unknown ids yield an empty list, not an error
    let (status, body) = send(&app, "GET", "/api/users/99/rentals", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("array body").len(), 0);
}

#[tokio::test]
async fn full_rental_lifecycle_over_http() {
    let app = app(false);

    let (status, user) = send(
        &app,
        "POST",
        "/api/users",
        Some(json!({"name": "Alice", "email": "alice@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["id"], 1);

    let (status, movie) = send(&app, "POST", "/api/movies", Some(json!({"title": "Heat"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(movie["available"], true);

    let (status, rental) = send(
        &app,
        "POST",
        "/api/rentals",
        Some(json!({
            "userId": 1,
            "movieId": 1,
            "rentedDate": "2026-08-30",
            "dueDate": "2026-09-13"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(rental["returnedDate"], Value::Null);
    assert_eq!(rental["movie"]["available"], false);

    // The movie is now out
    let (_, movie) = send(&app, "GET", "/api/movies/1", None).await;
    assert_eq!(movie["available"], false);

    // Return it; empty body defaults the return date to today
    let (status, returned) = send(&app, "PATCH", "/api/rentals/1/return", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(returned["returnedDate"].is_string());
    assert_eq!(returned["movie"]["available"], true);

    // An explicit return date overwrites the stored one
    let (status, returned) = send(
        &app,
        "PATCH",
        "/api/rentals/1/return",
        Some(json!({"returnDate": "2026-09-01"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(returned["returnedDate"], "2026-09-01");

    // Delete the returned rental, then the now-unreferenced user
    let (status, _) = send(&app, "DELETE", "/api/rentals/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "DELETE", "/api/users/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, stats) = send(&app, "GET", "/api/stats", None).await;
    assert_eq!(stats["activeRentals"], 0);
    assert_eq!(stats["availableMovies"], 1);
    assert_eq!(stats["registeredUsers"], 0);
}

#[tokio::test]
async fn deleting_an_open_rental_releases_the_movie() {
    let app = app(true);
    let (status, _) = send(&app, "DELETE", "/api/rentals/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, movie) = send(&app, "GET", "/api/movies/1", None).await;
    assert_eq!(movie["available"], true);

    let (_, stats) = send(&app, "GET", "/api/stats", None).await;
    assert_eq!(stats["activeRentals"], 2);
    assert_eq!(stats["availableMovies"], 5);
}
