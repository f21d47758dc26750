//! Movie (catalog title) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Movie record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub director: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub description: Option<String>,
    /// True iff no open rental currently references this movie
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

/// Create movie request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovie {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    pub director: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub description: Option<String>,
    /// Defaults to true when omitted
    pub available: Option<bool>,
}

/// Update movie request (merge semantics: absent fields are left unchanged)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovie {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    pub director: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

impl Movie {
    /// Merge an update onto this record. `id` and `created_at` are immutable.
    pub fn apply(&mut self, update: UpdateMovie) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(director) = update.director {
            self.director = Some(director);
        }
        if let Some(year) = update.year {
            self.year = Some(year);
        }
        if let Some(genre) = update.genre {
            self.genre = Some(genre);
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(available) = update.available {
            self.available = available;
        }
    }
}
