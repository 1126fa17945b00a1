//! Sales analytics client

use crosscheck_core::{AnalyticsSummary, ApiSettings};

use crate::client::HttpClient;
use crate::error::ApiResult;

/// Read-only access to aggregated sales figures
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    http: HttpClient,
}

impl AnalyticsClient {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// # Errors
    ///
    /// Returns error if the transport cannot be constructed
    pub fn from_settings(settings: &ApiSettings) -> ApiResult<Self> {
        Ok(Self::new(HttpClient::new(settings)?))
    }

    /// # Errors
    ///
    /// Returns the classified failure
    pub fn summary(&self) -> ApiResult<AnalyticsSummary> {
        self.http.get("/api/analytics/summary")
    }
}
