use crate::filters::{SearchFilters, SortBy, ViewMode};
use crate::url_state;
use crate::view_model::{JobRowView, SearchViewModel};

pub type RequestId = u64;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Immutable snapshot captured when a search is issued. Requests always
/// carry the filters they were built from, so a later filter edit never
/// changes what an in-flight request means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub filters: SearchFilters,
    pub sort_by: SortBy,
    pub page: u32,
    pub page_size: u32,
}

impl SearchRequest {
    /// Zero-based item offset for the wire request: `(page - 1) * page_size`.
    pub fn offset(&self) -> u32 {
        (self.page - 1) * self.page_size
    }
}

/// One posting as consumed by the result list. Fields mirror the search
/// service response; `source` stays a plain string so an unknown board
/// never fails the whole page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub skills: Vec<String>,
    pub posted_at: String,
    pub source: String,
    pub salary: Option<SalaryRange>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryRange {
    pub min: Option<u64>,
    pub max: Option<u64>,
    pub currency: String,
}

/// One page of results. `total` is authoritative for pagination math and
/// counts all matches, not just this page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub jobs: Vec<JobSummary>,
    pub total: u64,
}

/// Terminal failure of a single search request. Non-fatal for the
/// session: the previous good result stays visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    Network(String),
    Timeout,
    Server(u16),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::Network(message) => write!(f, "network error: {message}"),
            SearchError::Timeout => write!(f, "request timed out"),
            SearchError::Server(status) => write!(f, "server error (status {status})"),
        }
    }
}

/// Fetch state of the current search. A completion is applied only while
/// `Loading` with the matching id; everything else is a stale response
/// and is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryState {
    #[default]
    Idle,
    Loading {
        id: RequestId,
        request: SearchRequest,
    },
    Success {
        id: RequestId,
    },
    Error {
        id: RequestId,
        reason: SearchError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    filters: SearchFilters,
    sort_by: SortBy,
    page: u32,
    page_size: u32,
    view_mode: ViewMode,
    query: QueryState,
    last_result: Option<SearchResult>,
    last_issued: RequestId,
    url_query: String,
    discovery_pending: bool,
    dirty: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            filters: SearchFilters::default(),
            sort_by: SortBy::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            view_mode: ViewMode::default(),
            query: QueryState::Idle,
            last_result: None,
            last_issued: 0,
            url_query: String::new(),
            discovery_pending: false,
            dirty: false,
        }
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the mount-time state from a URL query string: known keys
    /// are merged over defaults, everything malformed degrades silently.
    pub fn hydrate(query_string: &str) -> Self {
        let patch = url_state::from_query_string(query_string);
        let mut state = Self::default();
        state.filters = state.filters.apply(patch);
        state.url_query = query_string.trim_start_matches('?').to_string();
        state
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    pub fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }

    pub fn discovery_pending(&self) -> bool {
        self.discovery_pending
    }

    /// Query string last written to (or read from) the location bar.
    pub fn url_query(&self) -> &str {
        &self.url_query
    }

    /// Snapshot of the current criteria as a wire request.
    pub fn current_request(&self) -> SearchRequest {
        SearchRequest {
            filters: self.filters.clone(),
            sort_by: self.sort_by,
            page: self.page,
            page_size: self.page_size,
        }
    }

    /// Returns whether the state changed since the last call, clearing
    /// the flag. Drivers use this to coalesce rendering.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub fn view(&self) -> SearchViewModel {
        let (total, jobs) = match &self.last_result {
            Some(result) => (result.total, result.jobs.iter().map(JobRowView::from).collect()),
            None => (0, Vec::new()),
        };
        let total_pages = if total == 0 {
            0
        } else {
            total.div_ceil(u64::from(self.page_size))
        };
        let error = match &self.query {
            QueryState::Error { reason, .. } => Some(reason.to_string()),
            _ => None,
        };

        SearchViewModel {
            text: self.filters.text.clone(),
            hashtags: self.filters.hashtags.clone(),
            time_filter: self.filters.time_filter,
            sort_by: self.sort_by,
            view_mode: self.view_mode,
            page: self.page,
            page_size: self.page_size,
            total,
            total_pages,
            is_loading: matches!(self.query, QueryState::Loading { .. }),
            error,
            discovery_pending: self.discovery_pending,
            jobs,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_filters(&mut self, filters: SearchFilters) {
        self.filters = filters;
    }

    pub(crate) fn set_sort_by(&mut self, sort_by: SortBy) {
        self.sort_by = sort_by;
    }

    pub(crate) fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub(crate) fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    pub(crate) fn set_url_query(&mut self, query: String) {
        self.url_query = query;
    }

    pub(crate) fn set_discovery_pending(&mut self, pending: bool) {
        self.discovery_pending = pending;
    }

    /// Issues the next request id and moves to `Loading`.
    pub(crate) fn begin_search(&mut self, request: SearchRequest) -> RequestId {
        self.last_issued += 1;
        self.query = QueryState::Loading {
            id: self.last_issued,
            request,
        };
        self.last_issued
    }

    /// Applies a completion if it belongs to the in-flight request.
    /// Returns false when the response was stale and dropped.
    pub(crate) fn finish_search(
        &mut self,
        request_id: RequestId,
        result: Result<SearchResult, SearchError>,
    ) -> bool {
        let current = match &self.query {
            QueryState::Loading { id, .. } if *id == request_id => *id,
            _ => return false,
        };
        match result {
            Ok(result) => {
                self.last_result = Some(result);
                self.query = QueryState::Success { id: current };
            }
            Err(reason) => {
                // Policy: retain the last good result; the error is
                // surfaced as a banner in the view model.
                self.query = QueryState::Error {
                    id: current,
                    reason,
                };
            }
        }
        true
    }

    /// Forces `Idle` and burns an id so any outstanding response is
    /// guaranteed stale.
    pub(crate) fn reset_query(&mut self) {
        self.last_issued += 1;
        self.query = QueryState::Idle;
    }

    /// The identical request currently loading, if any. Used for the
    /// dedup check before issuing a network call.
    pub(crate) fn in_flight_request(&self) -> Option<&SearchRequest> {
        match &self.query {
            QueryState::Loading { request, .. } => Some(request),
            _ => None,
        }
    }
}
