use pretty_assertions::assert_eq;

use jobscope_core::{
    from_query_string, to_query_string, ExperienceLevel, FilterPatch, JobType, SearchFilters,
    TimeFilter,
};

#[test]
fn default_filters_serialize_to_an_empty_string() {
    assert_eq!(to_query_string(&SearchFilters::default()), "");
}

#[test]
fn only_non_default_fields_are_emitted() {
    let filters = SearchFilters::default().apply(FilterPatch {
        time_filter: Some(TimeFilter::D7),
        ..FilterPatch::default()
    });
    assert_eq!(to_query_string(&filters), "timeFilter=7d");
}

#[test]
fn hashtags_serialize_as_a_single_csv_pair() {
    let filters = SearchFilters::default().apply(FilterPatch {
        hashtags: Some(vec!["python".to_string(), "remote".to_string()]),
        ..FilterPatch::default()
    });
    // Commas are percent-encoded by form-urlencoding; parsing decodes
    // either spelling.
    assert_eq!(to_query_string(&filters), "hashtags=python%2Cremote");
}

#[test]
fn round_trip_reconstructs_the_serialized_subset() {
    let filters = SearchFilters::default().apply(FilterPatch {
        hashtags: Some(vec!["rust".to_string(), "backend".to_string()]),
        time_filter: Some(TimeFilter::D30),
        location: Some("New Delhi".to_string()),
        job_type: Some(Some(JobType::FullTime)),
        experience_level: Some(Some(ExperienceLevel::Senior)),
        ..FilterPatch::default()
    });

    let query_string = to_query_string(&filters);
    let reparsed = SearchFilters::default().apply(from_query_string(&query_string));

    assert_eq!(reparsed, filters);
}

#[test]
fn parsing_accepts_a_leading_question_mark_and_literal_commas() {
    let patch = from_query_string("?hashtags=python,remote&timeFilter=7d");
    assert_eq!(
        patch.hashtags,
        Some(vec!["python".to_string(), "remote".to_string()])
    );
    assert_eq!(patch.time_filter, Some(TimeFilter::D7));
}

#[test]
fn hashtag_csv_is_normalized_on_parse() {
    let patch = from_query_string("hashtags=%23React,%20remote%20,REACT,,");
    assert_eq!(
        patch.hashtags,
        Some(vec!["react".to_string(), "remote".to_string()])
    );
}

#[test]
fn unknown_keys_and_malformed_values_are_dropped_silently() {
    let patch = from_query_string("timeFilter=99x&jobType=boss&experienceLevel=&bogus=1&hashtags=");
    assert_eq!(patch, FilterPatch::default());
}

#[test]
fn location_survives_percent_encoding() {
    let filters = SearchFilters::default().apply(FilterPatch {
        location: Some("São Paulo".to_string()),
        ..FilterPatch::default()
    });
    let reparsed = SearchFilters::default().apply(from_query_string(&to_query_string(&filters)));
    assert_eq!(reparsed.location, "São Paulo");
}
