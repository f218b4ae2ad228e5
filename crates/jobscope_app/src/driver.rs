use std::time::{Duration, Instant};

use client_logging::{client_info, client_warn};
use jobscope_client::{
    ApiError, ApiErrorKind, CoordinatorEvent, CoordinatorHandle, DashboardSnapshot, TimeRange,
};
use jobscope_core::{update, Effect, Msg, QueryState, SearchError, SearchState};

/// Synchronous driver around the pure state machine: dispatches messages,
/// hands effects to the coordinator and folds completions back in.
pub struct Driver {
    state: SearchState,
    handle: CoordinatorHandle,
}

impl Driver {
    pub fn new(state: SearchState, handle: CoordinatorHandle) -> Self {
        Self { state, handle }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.run_effects(effects);
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::IssueSearch {
                    request_id,
                    request,
                } => {
                    client_info!(
                        "issue search id={} page={} offset={}",
                        request_id,
                        request.page,
                        request.offset()
                    );
                    self.handle.submit_search(request_id, request);
                }
                Effect::TriggerDiscovery {
                    hashtags,
                    sources,
                    time_filter,
                } => {
                    self.handle.trigger_discovery(hashtags, sources, time_filter);
                }
                Effect::ScheduleRefresh { delay } => {
                    self.handle.schedule_refresh(delay);
                }
                // Headless host: the location bar is the log.
                Effect::ReplaceUrl(query) => {
                    client_info!("url replace ?{}", query);
                }
                Effect::PushUrl(query) => {
                    client_info!("url push ?{}", query);
                }
            }
        }
    }

    /// Pumps coordinator events until no search is loading and no
    /// discovery poll is pending. Returns false on deadline expiry.
    pub fn pump_until_settled(&mut self, deadline: Duration) -> bool {
        let end = Instant::now() + deadline;
        while self.busy() {
            let now = Instant::now();
            if now >= end {
                return false;
            }
            match self.handle.recv_timeout(end - now) {
                Some(event) => {
                    let msg = map_event(event);
                    self.dispatch(msg);
                }
                None => return false,
            }
        }
        true
    }

    /// One-shot dashboard fetch through the same coordinator. Unrelated
    /// events that arrive while waiting are dispatched as usual.
    pub fn fetch_dashboard(
        &mut self,
        time_range: TimeRange,
        deadline: Duration,
    ) -> Option<DashboardSnapshot> {
        self.handle.fetch_dashboard(time_range);
        let end = Instant::now() + deadline;
        loop {
            let now = Instant::now();
            if now >= end {
                return None;
            }
            match self.handle.recv_timeout(end - now) {
                Some(CoordinatorEvent::DashboardCompleted { result }) => match result {
                    Ok(snapshot) => return Some(snapshot),
                    Err(err) => {
                        client_warn!("dashboard fetch failed: {}", err);
                        return None;
                    }
                },
                Some(event) => {
                    let msg = map_event(event);
                    self.dispatch(msg);
                }
                None => return None,
            }
        }
    }

    fn busy(&self) -> bool {
        matches!(self.state.query(), QueryState::Loading { .. }) || self.state.discovery_pending()
    }
}

fn map_event(event: CoordinatorEvent) -> Msg {
    match event {
        CoordinatorEvent::SearchCompleted { request_id, result } => Msg::SearchCompleted {
            request_id,
            result: result.map_err(map_api_error),
        },
        CoordinatorEvent::DiscoveryCompleted { result } => match result {
            Ok(ack) => {
                client_info!("discovery acknowledged: {}", ack.message);
                Msg::DiscoveryAcked { accepted: true }
            }
            Err(err) => {
                client_warn!("discovery failed: {}", err);
                Msg::DiscoveryAcked { accepted: false }
            }
        },
        CoordinatorEvent::DashboardCompleted { .. } => Msg::NoOp,
        CoordinatorEvent::RefreshDue => Msg::RefreshDue,
    }
}

pub fn map_api_error(err: ApiError) -> SearchError {
    match err.kind {
        ApiErrorKind::Network => SearchError::Network(err.message),
        ApiErrorKind::Timeout => SearchError::Timeout,
        ApiErrorKind::Status(status) => SearchError::Server(status),
    }
}
