//! User management service

use validator::Validate;

use crate::{
    error::AppResult,
    models::user::{CreateUser, UpdateUser, User},
    repository::SharedStore,
};

#[derive(Clone)]
pub struct UsersService {
    store: SharedStore,
}

impl UsersService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// List all users in insertion order
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.store.list_users().await
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: i32) -> AppResult<User> {
        self.store.get_user(id).await
    }

    /// Create a new user
    pub async fn create_user(&self, data: CreateUser) -> AppResult<User> {
        data.validate()?;
        let user = self.store.create_user(data).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Merge the supplied fields onto an existing user
    pub async fn update_user(&self, id: i32, data: UpdateUser) -> AppResult<User> {
        data.validate()?;
        self.store.update_user(id, data).await
    }

    /// Delete a user; blocked while any rental for them is open
    pub async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.store.delete_user(id).await?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}
