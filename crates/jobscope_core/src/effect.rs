use std::collections::BTreeSet;
use std::time::Duration;

use crate::filters::{Source, TimeFilter};
use crate::state::{RequestId, SearchRequest};

/// Delay before the single follow-up search after a discovery trigger.
/// A best-effort poll to surface newly scraped postings, not a
/// guaranteed-consistency read.
pub const DISCOVERY_REFRESH_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue a network search for the captured snapshot.
    IssueSearch {
        request_id: RequestId,
        request: SearchRequest,
    },
    /// Ask the backend to scrape fresh postings for these criteria.
    TriggerDiscovery {
        hashtags: Vec<String>,
        sources: BTreeSet<Source>,
        time_filter: TimeFilter,
    },
    /// Deliver a `Msg::RefreshDue` after `delay`.
    ScheduleRefresh { delay: Duration },
    /// Rewrite the location bar in place (no history entry).
    ReplaceUrl(String),
    /// Push a new history entry for a confirmed search.
    PushUrl(String),
}
