use std::collections::BTreeSet;
use std::time::Duration;

use client_logging::{client_debug, client_info};
use jobscope_core::{SearchRequest, SearchResult, Source, TimeFilter};

use crate::types::{
    ApiError, ApiErrorKind, DashboardSnapshot, DiscoveryAck, JobsResponse, TimeRange,
};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Service root including the `/api` prefix.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Delay before the single follow-up search after a discovery trigger.
    pub refresh_delay: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            refresh_delay: jobscope_core::DISCOVERY_REFRESH_DELAY,
        }
    }
}

/// The HTTP boundary of the search service. A trait so drivers and tests
/// can substitute a fake without a server.
#[async_trait::async_trait]
pub trait SearchApi: Send + Sync {
    /// Queries the already-indexed postings.
    async fn search(&self, request: &SearchRequest) -> Result<SearchResult, ApiError>;

    /// Asks the backend to scrape fresh postings now. Fire-and-forget
    /// from the caller's perspective; consistency comes later, if at
    /// all, through a follow-up search.
    async fn trigger_discovery(
        &self,
        hashtags: &[String],
        sources: &BTreeSet<Source>,
        time_filter: TimeFilter,
    ) -> Result<DiscoveryAck, ApiError>;

    /// Fetches the dashboard aggregates.
    async fn dashboard(&self, time_range: TimeRange) -> Result<DashboardSnapshot, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    client: reqwest::Client,
    settings: ApiSettings,
}

impl ReqwestApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(ApiErrorKind::Network, err.to_string()))?;
        Ok(Self { client, settings })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.settings.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait::async_trait]
impl SearchApi for ReqwestApi {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResult, ApiError> {
        let mut params: Vec<(&str, String)> = Vec::new();
        let hashtags = &request.filters.hashtags;
        if !hashtags.is_empty() {
            params.push(("hashtags", hashtags.join(",")));
        }
        let text = request.filters.text.trim();
        if !text.is_empty() {
            params.push(("q", text.to_string()));
        }
        params.push(("limit", request.page_size.to_string()));
        params.push(("offset", request.offset().to_string()));

        client_debug!(
            "search page={} offset={} hashtags={:?}",
            request.page,
            request.offset(),
            hashtags
        );

        let response = self
            .client
            .get(self.endpoint("/jobs"))
            .query(&params)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                ApiErrorKind::Status(status.as_u16()),
                status.to_string(),
            ));
        }

        let body: JobsResponse = response.json().await.map_err(map_reqwest_error)?;
        Ok(SearchResult::from(body))
    }

    async fn trigger_discovery(
        &self,
        hashtags: &[String],
        sources: &BTreeSet<Source>,
        time_filter: TimeFilter,
    ) -> Result<DiscoveryAck, ApiError> {
        // Empty set means "all sources" on the wire; the distinction is
        // translated here and nowhere else.
        let sources: Vec<&str> = if sources.is_empty() {
            Source::ALL.iter().map(|source| source.as_str()).collect()
        } else {
            sources.iter().map(|source| source.as_str()).collect()
        };

        let body = serde_json::json!({
            "hashtags": hashtags,
            "sources": sources,
            "timeFilter": time_filter.as_str(),
        });

        client_info!(
            "trigger discovery hashtags={:?} sources={:?} window={}",
            hashtags,
            sources,
            time_filter.as_str()
        );

        let response = self
            .client
            .post(self.endpoint("/scrape-jobs"))
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                ApiErrorKind::Status(status.as_u16()),
                status.to_string(),
            ));
        }

        response.json().await.map_err(map_reqwest_error)
    }

    async fn dashboard(&self, time_range: TimeRange) -> Result<DashboardSnapshot, ApiError> {
        let response = self
            .client
            .get(self.endpoint("/analytics/dashboard"))
            .query(&[("time_range", time_range.as_str())])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                ApiErrorKind::Status(status.as_u16()),
                status.to_string(),
            ));
        }

        response.json().await.map_err(map_reqwest_error)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(ApiErrorKind::Timeout, err.to_string());
    }
    ApiError::new(ApiErrorKind::Network, err.to_string())
}
