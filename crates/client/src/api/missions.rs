//! Mission endpoints.

use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use super::ApiClient;
use crate::error::ApiError;
use crate::types::{Empty, Mission, MissionDraft, MissionResult};

#[derive(Serialize)]
struct UpdateProgressRequest {
    progress: i64,
}

impl ApiClient {
    /// List all missions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_missions(&self) -> Result<Vec<Mission>, ApiError> {
        self.execute(Method::GET, "/missions").await
    }

    /// Create a mission.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create_mission(&self, draft: &MissionDraft) -> Result<Mission, ApiError> {
        self.execute_with_body(Method::POST, "/missions", draft)
            .await
    }

    /// Update a mission.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn update_mission(&self, id: i64, draft: &MissionDraft) -> Result<Mission, ApiError> {
        self.execute_with_body(Method::PUT, &format!("/missions/{id}"), draft)
            .await
    }

    /// Delete a mission.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn delete_mission(&self, id: i64) -> Result<Empty, ApiError> {
        self.execute(Method::DELETE, &format!("/missions/{id}"))
            .await
    }

    /// Report progress on a mission.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn update_mission_progress(
        &self,
        id: i64,
        progress: i64,
    ) -> Result<Mission, ApiError> {
        self.execute_with_body(
            Method::PUT,
            &format!("/missions/{id}/progress"),
            &UpdateProgressRequest { progress },
        )
        .await
    }

    /// Mark a mission as completed, collecting its reward.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn complete_mission(&self, id: i64) -> Result<MissionResult, ApiError> {
        self.execute(Method::POST, &format!("/missions/{id}/complete"))
            .await
    }
}
