//! Read-only global statistics endpoints.

use reqwest::Method;
use tracing::instrument;

use super::ApiClient;
use crate::error::ApiError;
use crate::types::{DashboardStats, GlobalCo2};

impl ApiClient {
    /// The collective CO2-reduction counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn global_co2(&self) -> Result<GlobalCo2, ApiError> {
        self.execute(Method::GET, "/stats/global-co2").await
    }

    /// Aggregated dashboard statistics for the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.execute(Method::GET, "/stats/dashboard").await
    }
}
