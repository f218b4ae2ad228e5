use crate::effect::{Effect, DISCOVERY_REFRESH_DELAY};
use crate::filters::{extract_hashtags, FilterPatch, SearchFilters};
use crate::msg::Msg;
use crate::state::SearchState;
use crate::url_state;

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: SearchState, msg: Msg) -> (SearchState, Vec<Effect>) {
    let effects = match msg {
        Msg::TextChanged(text) => {
            let patch = FilterPatch {
                hashtags: Some(extract_hashtags(&text)),
                text: Some(text),
                ..FilterPatch::default()
            };
            state.set_filters(state.filters().apply(patch));
            state.mark_dirty();
            sync_url(&mut state).into_iter().collect()
        }
        Msg::FilterChanged(patch) => {
            state.set_filters(state.filters().apply(patch));
            state.mark_dirty();
            sync_url(&mut state).into_iter().collect()
        }
        Msg::SearchSubmitted => {
            // A confirmed search starts over from the first page and gets
            // its own history entry; per-keystroke edits only replace.
            state.set_page(1);
            state.mark_dirty();
            let derived = url_state::to_query_string(state.filters());
            state.set_url_query(derived.clone());
            let mut effects = vec![Effect::PushUrl(derived)];
            effects.extend(submit(&mut state));
            effects
        }
        Msg::PageChanged(page) => {
            state.set_page(page);
            state.mark_dirty();
            submit(&mut state).into_iter().collect()
        }
        Msg::SortChanged(sort_by) => {
            state.set_sort_by(sort_by);
            state.mark_dirty();
            submit(&mut state).into_iter().collect()
        }
        Msg::ViewModeChanged(view_mode) => {
            state.set_view_mode(view_mode);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SearchCompleted { request_id, result } => {
            // Completions for anything but the in-flight id are stale
            // (superseded or reset) and are dropped wholesale.
            if state.finish_search(request_id, result) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DiscoveryRequested => {
            state.set_discovery_pending(true);
            state.mark_dirty();
            let filters = state.filters();
            vec![
                Effect::TriggerDiscovery {
                    hashtags: filters.hashtags.clone(),
                    sources: filters.sources.clone(),
                    time_filter: filters.time_filter,
                },
                Effect::ScheduleRefresh {
                    delay: DISCOVERY_REFRESH_DELAY,
                },
            ]
        }
        Msg::DiscoveryAcked { accepted } => {
            if !accepted {
                state.set_discovery_pending(false);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::RefreshDue => {
            state.set_discovery_pending(false);
            state.mark_dirty();
            submit(&mut state).into_iter().collect()
        }
        Msg::UrlChanged(query_string) => {
            let normalized = query_string.trim_start_matches('?').to_string();
            if normalized == state.url_query() {
                // Our own write echoed back; ignore to avoid a feedback loop.
                return (state, Vec::new());
            }
            let patch = url_state::from_query_string(&normalized);
            let rehydrated = rehydrate(state.filters(), patch);
            state.set_filters(rehydrated);
            state.set_url_query(normalized);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ResetClicked => {
            state.reset_query();
            state.mark_dirty();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Issues a search for the current snapshot unless a deep-equal request
/// is already loading, in which case the pending outcome stands.
fn submit(state: &mut SearchState) -> Option<Effect> {
    let request = state.current_request();
    if state.in_flight_request() == Some(&request) {
        return None;
    }
    let request_id = state.begin_search(request.clone());
    state.mark_dirty();
    Some(Effect::IssueSearch {
        request_id,
        request,
    })
}

/// Writes the derived query string to the location bar only when it
/// actually changed; the string compare breaks the update cycle.
fn sync_url(state: &mut SearchState) -> Option<Effect> {
    let derived = url_state::to_query_string(state.filters());
    if derived == state.url_query() {
        return None;
    }
    state.set_url_query(derived.clone());
    Some(Effect::ReplaceUrl(derived))
}

/// External navigation replaces the URL-backed fields wholesale (absent
/// key means default) while the rest of the criteria stay put.
fn rehydrate(current: &SearchFilters, patch: FilterPatch) -> SearchFilters {
    let defaults = SearchFilters::default();
    let mut base = current.clone();
    base.hashtags = defaults.hashtags;
    base.time_filter = defaults.time_filter;
    base.location = defaults.location;
    base.job_type = defaults.job_type;
    base.experience_level = defaults.experience_level;
    base.apply(patch)
}
