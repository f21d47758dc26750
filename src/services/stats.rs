//! Dashboard statistics service

use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, repository::SharedStore};

/// Aggregate counters for the dashboard, computed on demand
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    /// Rentals with no returned date
    pub active_rentals: i64,
    /// Movies with no open rental
    pub available_movies: i64,
    /// Total registered users
    pub registered_users: i64,
}

#[derive(Clone)]
pub struct StatsService {
    store: SharedStore,
}

impl StatsService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Compute the current dashboard counters from the collections
    pub async fn overview(&self) -> AppResult<StatsSnapshot> {
        Ok(StatsSnapshot {
            active_rentals: self.store.count_active_rentals().await?,
            available_movies: self.store.count_available_movies().await?,
            registered_users: self.store.count_users().await?,
        })
    }
}
