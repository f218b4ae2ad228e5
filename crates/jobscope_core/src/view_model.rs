use crate::filters::{SortBy, TimeFilter, ViewMode};
use crate::state::{JobSummary, SalaryRange};

/// Render-ready projection of [`crate::SearchState`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchViewModel {
    pub text: String,
    pub hashtags: Vec<String>,
    pub time_filter: TimeFilter,
    pub sort_by: SortBy,
    pub view_mode: ViewMode,
    pub page: u32,
    pub page_size: u32,
    /// Authoritative match count from the last successful search.
    pub total: u64,
    /// `ceil(total / page_size)`; 0 before the first result arrives.
    pub total_pages: u64,
    pub is_loading: bool,
    /// Banner text for the current error, if the last request failed.
    /// The previous good `jobs` stay visible alongside it.
    pub error: Option<String>,
    pub discovery_pending: bool,
    pub jobs: Vec<JobRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub source: String,
    pub posted_at: String,
    pub salary_label: Option<String>,
}

impl From<&JobSummary> for JobRowView {
    fn from(job: &JobSummary) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            source: job.source.clone(),
            posted_at: job.posted_at.clone(),
            salary_label: job.salary.as_ref().and_then(salary_label),
        }
    }
}

fn salary_label(salary: &SalaryRange) -> Option<String> {
    let label = match (salary.min, salary.max) {
        (Some(min), Some(max)) => format!("{min}-{max}"),
        (Some(min), None) => format!("from {min}"),
        (None, Some(max)) => format!("up to {max}"),
        (None, None) => return None,
    };
    if salary.currency.is_empty() {
        Some(label)
    } else {
        Some(format!("{label} {}", salary.currency))
    }
}
