//! Business logic services

pub mod movies;
pub mod rentals;
pub mod stats;
pub mod users;

use crate::repository::SharedStore;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub users: users::UsersService,
    pub movies: movies::MoviesService,
    pub rentals: rentals::RentalsService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services over the given store
    pub fn new(store: SharedStore) -> Self {
        Self {
            users: users::UsersService::new(store.clone()),
            movies: movies::MoviesService::new(store.clone()),
            rentals: rentals::RentalsService::new(store.clone()),
            stats: stats::StatsService::new(store),
        }
    }
}
