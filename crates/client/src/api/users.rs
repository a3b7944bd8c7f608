//! User endpoints: admin CRUD plus the caller's own profile and stats.

use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use super::ApiClient;
use crate::error::ApiError;
use crate::types::{Empty, User, UserDraft, UserStats};

#[derive(Serialize)]
struct UpdatePointsRequest {
    points: i64,
}

impl ApiClient {
    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.execute(Method::GET, "/users").await
    }

    /// Get one user by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the user does not exist.
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        self.execute(Method::GET, &format!("/users/{id}")).await
    }

    /// Create a user record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, draft), fields(email = %draft.email))]
    pub async fn create_user(&self, draft: &UserDraft) -> Result<User, ApiError> {
        self.execute_with_body(Method::POST, "/users", draft).await
    }

    /// Update a user record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, draft), fields(email = %draft.email))]
    pub async fn update_user(&self, id: i64, draft: &UserDraft) -> Result<User, ApiError> {
        self.execute_with_body(Method::PUT, &format!("/users/{id}"), draft)
            .await
    }

    /// Delete a user record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: i64) -> Result<Empty, ApiError> {
        self.execute(Method::DELETE, &format!("/users/{id}")).await
    }

    /// The authenticated user's own profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no session is active.
    #[instrument(skip(self))]
    pub async fn profile(&self) -> Result<User, ApiError> {
        self.execute(Method::GET, "/users/profile").await
    }

    /// Add points to the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn update_points(&self, points: i64) -> Result<User, ApiError> {
        self.execute_with_body(Method::PUT, "/users/points", &UpdatePointsRequest { points })
            .await
    }

    /// The authenticated user's aggregate statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn user_stats(&self) -> Result<UserStats, ApiError> {
        self.execute(Method::GET, "/users/stats").await
    }
}
