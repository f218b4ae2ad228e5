use crate::filters::{FilterPatch, SortBy, ViewMode};
use crate::state::{RequestId, SearchError, SearchResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the free-text query box (debounced text).
    TextChanged(String),
    /// User changed one or more filter controls.
    FilterChanged(FilterPatch),
    /// User confirmed the current criteria (Enter / Search button).
    SearchSubmitted,
    /// User navigated to another result page (1-based).
    PageChanged(u32),
    /// User changed the result ordering.
    SortChanged(SortBy),
    /// User toggled the list/grid presentation.
    ViewModeChanged(ViewMode),
    /// A search request settled, successfully or not.
    SearchCompleted {
        request_id: RequestId,
        result: Result<SearchResult, SearchError>,
    },
    /// User asked the backend to go fetch fresh postings now.
    DiscoveryRequested,
    /// The discovery endpoint acknowledged (or refused) the request.
    DiscoveryAcked { accepted: bool },
    /// The post-discovery follow-up poll is due.
    RefreshDue,
    /// The location bar changed underneath us (back/forward navigation).
    UrlChanged(String),
    /// User cleared the current results.
    ResetClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
