use chrono::{DateTime, Utc};
use jobscope_core::{JobSummary, SalaryRange, SearchResult};
use serde::Deserialize;
use thiserror::Error;

/// Terminal failure of one API call. The taxonomy is deliberately small:
/// transport and body-decode problems are `Network`, the client deadline
/// is `Timeout`, any non-2xx response is `Status`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Network,
    Timeout,
    Status(u16),
}

impl std::fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiErrorKind::Network => write!(f, "network error"),
            ApiErrorKind::Timeout => write!(f, "timeout"),
            ApiErrorKind::Status(status) => write!(f, "http status {status}"),
        }
    }
}

/// Wire shape of `GET /jobs`.
#[derive(Debug, Clone, Deserialize)]
pub struct JobsResponse {
    pub jobs: Vec<JobRecord>,
    pub total: u64,
}

impl From<JobsResponse> for SearchResult {
    fn from(response: JobsResponse) -> Self {
        SearchResult {
            jobs: response.jobs.into_iter().map(JobSummary::from).collect(),
            total: response.total,
        }
    }
}

/// One posting as the backend serializes it. Optional fields default so
/// a sparse record from one scraper never sinks the whole page.
#[derive(Debug, Clone, Deserialize)]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub posted_at: DateTime<Utc>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub salary: Option<SalaryRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SalaryRecord {
    #[serde(default)]
    pub min: Option<u64>,
    #[serde(default)]
    pub max: Option<u64>,
    #[serde(default)]
    pub currency: String,
}

impl From<JobRecord> for JobSummary {
    fn from(record: JobRecord) -> Self {
        JobSummary {
            id: record.id,
            title: record.title,
            company: record.company,
            location: record.location,
            description: record.description,
            skills: record.skills,
            posted_at: record.posted_at.to_rfc3339(),
            source: record.source,
            salary: record.salary.map(|salary| SalaryRange {
                min: salary.min,
                max: salary.max,
                currency: salary.currency,
            }),
        }
    }
}

/// Acknowledgement of `POST /scrape-jobs`. The backend constrains the
/// shape loosely; any 2xx counts as accepted.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DiscoveryAck {
    #[serde(default)]
    pub message: String,
}

/// Aggregates from `GET /analytics/dashboard`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    #[serde(default)]
    pub job_trends: Vec<JobTrendPoint>,
    #[serde(default)]
    pub skill_trends: Vec<SkillCount>,
    #[serde(default)]
    pub location_trends: Vec<LocationCount>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_jobs: u64,
    #[serde(default)]
    pub new_jobs: u64,
    #[serde(default)]
    pub total_contacts: u64,
    #[serde(default)]
    pub saved_jobs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobTrendPoint {
    pub date: String,
    pub jobs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationCount {
    pub location: String,
    pub count: u64,
}

/// Time window accepted by the analytics endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    D1,
    #[default]
    D7,
    D30,
    D90,
}

impl TimeRange {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::D1 => "1d",
            TimeRange::D7 => "7d",
            TimeRange::D30 => "30d",
            TimeRange::D90 => "90d",
        }
    }
}
