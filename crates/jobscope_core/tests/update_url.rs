use jobscope_core::{
    update, Effect, FilterPatch, JobSummary, Msg, SearchResult, SearchState, TimeFilter,
};

fn job(id: &str) -> JobSummary {
    JobSummary {
        id: id.to_string(),
        title: "Engineer".to_string(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        description: String::new(),
        skills: Vec::new(),
        posted_at: "2024-01-08T10:00:00Z".to_string(),
        source: "naukri".to_string(),
        salary: None,
    }
}

#[test]
fn mount_url_hydrates_filters_and_drives_the_first_search() {
    let state = SearchState::hydrate("?hashtags=python,remote&timeFilter=7d");
    assert_eq!(
        state.filters().hashtags,
        vec!["python".to_string(), "remote".to_string()]
    );
    assert_eq!(state.filters().time_filter, TimeFilter::D7);

    let (state, effects) = update(state, Msg::SearchSubmitted);
    let request = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::IssueSearch { request, .. } => Some(request.clone()),
            _ => None,
        })
        .expect("search issued");
    assert_eq!(request.page_size, 20);
    assert_eq!(request.offset(), 0);
    assert_eq!(
        request.filters.hashtags,
        vec!["python".to_string(), "remote".to_string()]
    );

    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: 1,
            result: Ok(SearchResult {
                jobs: vec![job("1"), job("2"), job("3")],
                total: 3,
            }),
        },
    );
    let view = state.view();
    assert_eq!(view.total, 3);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.jobs.len(), 3);
}

#[test]
fn text_edit_replaces_the_url_without_a_history_entry() {
    let state = SearchState::new();
    let (state, effects) = update(state, Msg::TextChanged("#React #react #Backend".to_string()));

    assert_eq!(
        state.filters().hashtags,
        vec!["react".to_string(), "backend".to_string()]
    );
    assert_eq!(
        effects,
        vec![Effect::ReplaceUrl("hashtags=react%2Cbackend".to_string())]
    );
}

#[test]
fn unchanged_query_string_writes_no_url_effect() {
    let state = SearchState::new();
    let (state, first) = update(state, Msg::TextChanged("#rust dev".to_string()));
    assert_eq!(first.len(), 1);

    // Different text, same extracted tags: derived string is identical,
    // so the guard suppresses the write.
    let (_state, second) = update(state, Msg::TextChanged("senior #rust".to_string()));
    assert!(second.is_empty());
}

#[test]
fn own_url_write_echoed_back_is_a_no_op() {
    let state = SearchState::new();
    let (state, effects) = update(state, Msg::TextChanged("#go".to_string()));
    let written = match &effects[..] {
        [Effect::ReplaceUrl(query_string)] => query_string.clone(),
        other => panic!("expected ReplaceUrl, got {other:?}"),
    };

    let before = state.clone();
    let (state, effects) = update(state, Msg::UrlChanged(written));
    assert!(effects.is_empty());
    assert_eq!(state.filters(), before.filters());
}

#[test]
fn external_navigation_rehydrates_url_backed_fields() {
    let state = SearchState::hydrate("hashtags=python&timeFilter=7d");
    // A non-URL field set through the filter panel must survive.
    let (state, _) = update(
        state,
        Msg::FilterChanged(FilterPatch {
            salary_min: Some(Some(100_000)),
            ..FilterPatch::default()
        }),
    );

    let (state, effects) = update(state, Msg::UrlChanged("timeFilter=30d".to_string()));

    assert!(effects.is_empty());
    assert_eq!(state.filters().time_filter, TimeFilter::D30);
    // Absent key means default: the old hashtags are gone.
    assert!(state.filters().hashtags.is_empty());
    assert_eq!(state.filters().salary_min, Some(100_000));
}

#[test]
fn confirmed_search_pushes_a_history_entry() {
    let state = SearchState::new();
    let (state, _) = update(state, Msg::TextChanged("#python".to_string()));
    let (_state, effects) = update(state, Msg::SearchSubmitted);

    assert!(effects
        .iter()
        .any(|effect| matches!(effect, Effect::PushUrl(query) if query == "hashtags=python")));
}
