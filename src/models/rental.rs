//! Rental model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{movie::Movie, user::User};

/// Rental record
///
/// A rental is *open* while `returned_date` is `None`; setting it moves the
/// rental to the returned state. Those are the only two states.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: i32,
    pub user_id: i32,
    pub movie_id: i32,
    pub rented_date: NaiveDate,
    pub due_date: NaiveDate,
    pub returned_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Rental {
    /// True while the movie is still out
    pub fn is_open(&self) -> bool {
        self.returned_date.is_none()
    }
}

/// Rental joined at read time with its user and movie snapshots
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RentalDetails {
    #[serde(flatten)]
    pub rental: Rental,
    pub user: User,
    pub movie: Movie,
}

/// Create rental request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRental {
    pub user_id: i32,
    pub movie_id: i32,
    pub rented_date: NaiveDate,
    /// Must be on or after `rented_date`
    pub due_date: NaiveDate,
    pub notes: Option<String>,
}
