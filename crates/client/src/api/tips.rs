//! Eco-tip endpoints.

use reqwest::Method;
use tracing::instrument;

use super::ApiClient;
use crate::error::ApiError;
use crate::types::{Empty, Tip, TipDraft};

impl ApiClient {
    /// List all tips.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_tips(&self) -> Result<Vec<Tip>, ApiError> {
        self.execute(Method::GET, "/tips").await
    }

    /// Create a tip.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create_tip(&self, draft: &TipDraft) -> Result<Tip, ApiError> {
        self.execute_with_body(Method::POST, "/tips", draft).await
    }

    /// Update a tip.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn update_tip(&self, id: i64, draft: &TipDraft) -> Result<Tip, ApiError> {
        self.execute_with_body(Method::PUT, &format!("/tips/{id}"), draft)
            .await
    }

    /// Delete a tip.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn delete_tip(&self, id: i64) -> Result<Empty, ApiError> {
        self.execute(Method::DELETE, &format!("/tips/{id}")).await
    }

    /// Like a tip.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn like_tip(&self, id: i64) -> Result<Empty, ApiError> {
        self.execute(Method::POST, &format!("/tips/{id}/like")).await
    }
}
