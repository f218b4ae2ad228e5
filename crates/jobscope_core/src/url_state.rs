//! Bidirectional mapping between [`SearchFilters`] and the shareable URL
//! query string.
//!
//! Serialization is minimal: only fields that differ from the defaults
//! are emitted, so a default search maps to an empty string. Parsing is
//! total: unknown keys and malformed values are dropped silently and the
//! field is treated as absent.

use std::collections::BTreeSet;

use url::form_urlencoded;

use crate::filters::{ExperienceLevel, FilterPatch, JobType, SearchFilters, TimeFilter};

const KEY_HASHTAGS: &str = "hashtags";
const KEY_TIME_FILTER: &str = "timeFilter";
const KEY_LOCATION: &str = "location";
const KEY_JOB_TYPE: &str = "jobType";
const KEY_EXPERIENCE: &str = "experienceLevel";

/// Serializes the URL-backed subset of `filters`, omitting defaults.
pub fn to_query_string(filters: &SearchFilters) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !filters.hashtags.is_empty() {
        serializer.append_pair(KEY_HASHTAGS, &filters.hashtags.join(","));
    }
    if filters.time_filter != TimeFilter::default() {
        serializer.append_pair(KEY_TIME_FILTER, filters.time_filter.as_str());
    }
    if !filters.location.is_empty() {
        serializer.append_pair(KEY_LOCATION, &filters.location);
    }
    if let Some(job_type) = filters.job_type {
        serializer.append_pair(KEY_JOB_TYPE, job_type.as_str());
    }
    if let Some(level) = filters.experience_level {
        serializer.append_pair(KEY_EXPERIENCE, level.as_str());
    }

    serializer.finish()
}

/// Parses a query string (with or without a leading `?`) into a patch
/// over the URL-backed filter fields. Never fails.
pub fn from_query_string(query_string: &str) -> FilterPatch {
    let trimmed = query_string.trim_start_matches('?');
    let mut patch = FilterPatch::default();

    for (key, value) in form_urlencoded::parse(trimmed.as_bytes()) {
        match key.as_ref() {
            KEY_HASHTAGS => {
                let tags = parse_hashtag_csv(&value);
                if !tags.is_empty() {
                    patch.hashtags = Some(tags);
                }
            }
            KEY_TIME_FILTER => {
                if let Some(time_filter) = TimeFilter::parse(&value) {
                    patch.time_filter = Some(time_filter);
                }
            }
            KEY_LOCATION => {
                let location = value.trim();
                if !location.is_empty() {
                    patch.location = Some(location.to_string());
                }
            }
            KEY_JOB_TYPE => {
                if let Some(job_type) = JobType::parse(&value) {
                    patch.job_type = Some(Some(job_type));
                }
            }
            KEY_EXPERIENCE => {
                if let Some(level) = ExperienceLevel::parse(&value) {
                    patch.experience_level = Some(Some(level));
                }
            }
            _ => {}
        }
    }

    patch
}

fn parse_hashtag_csv(value: &str) -> Vec<String> {
    let mut tags = Vec::new();
    let mut seen = BTreeSet::new();
    for raw in value.split(',') {
        let tag = raw.trim().trim_start_matches('#').to_lowercase();
        if !tag.is_empty() && seen.insert(tag.clone()) {
            tags.push(tag);
        }
    }
    tags
}
