//! Jobscope core: pure search/filter state machine and view-model helpers.
//!
//! Everything here is synchronous and side-effect free. The driver feeds
//! [`Msg`] values into [`update`] and executes the returned [`Effect`]s;
//! completions come back as further messages. Out-of-order network
//! responses are handled with a monotonic request id, never with
//! transport-level cancellation.
mod effect;
mod filters;
mod msg;
mod state;
mod update;
mod url_state;
mod view_model;

pub use effect::{Effect, DISCOVERY_REFRESH_DELAY};
pub use filters::{
    extract_hashtags, ExperienceLevel, FilterPatch, JobType, SearchFilters, SortBy, Source,
    TimeFilter, ViewMode,
};
pub use msg::Msg;
pub use state::{
    JobSummary, QueryState, RequestId, SalaryRange, SearchError, SearchRequest, SearchResult,
    SearchState, DEFAULT_PAGE_SIZE,
};
pub use update::update;
pub use url_state::{from_query_string, to_query_string};
pub use view_model::{JobRowView, SearchViewModel};
