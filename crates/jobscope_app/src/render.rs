use chrono::DateTime;
use jobscope_client::DashboardSnapshot;
use jobscope_core::SearchViewModel;

/// Plain-text rendering of one result page.
pub(crate) fn render_results(view: &SearchViewModel) -> String {
    let mut out = String::new();

    if let Some(error) = &view.error {
        out.push_str(&format!("! {error}\n"));
        if !view.jobs.is_empty() {
            out.push_str("  showing last good results\n");
        }
    }

    if view.total_pages == 0 {
        out.push_str("no results\n");
        return out;
    }

    out.push_str(&format!(
        "page {}/{} of {} matching jobs (sorted by {})\n",
        view.page,
        view.total_pages,
        view.total,
        view.sort_by.as_str()
    ));

    for job in &view.jobs {
        let salary = job
            .salary_label
            .as_deref()
            .map(|label| format!("  {label}"))
            .unwrap_or_default();
        out.push_str(&format!(
            "  [{}] {} at {} ({}) posted {}{}\n",
            job.source,
            job.title,
            job.company,
            job.location,
            posted_date(&job.posted_at),
            salary
        ));
    }

    out
}

/// Day precision is enough for a listing; anything unparseable is shown
/// verbatim.
fn posted_date(posted_at: &str) -> String {
    DateTime::parse_from_rfc3339(posted_at)
        .map(|timestamp| timestamp.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| posted_at.to_string())
}

pub(crate) fn render_dashboard(snapshot: &DashboardSnapshot) -> String {
    let mut out = format!(
        "dashboard: {} jobs total, {} new, {} contacts, {} saved\n",
        snapshot.stats.total_jobs,
        snapshot.stats.new_jobs,
        snapshot.stats.total_contacts,
        snapshot.stats.saved_jobs
    );
    for skill in snapshot.skill_trends.iter().take(5) {
        out.push_str(&format!("  {} x{}\n", skill.skill, skill.count));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::render_results;
    use jobscope_core::{JobRowView, SearchViewModel};

    fn view_with_one_job() -> SearchViewModel {
        SearchViewModel {
            page: 1,
            page_size: 20,
            total: 3,
            total_pages: 1,
            jobs: vec![JobRowView {
                id: "1".to_string(),
                title: "Python Developer".to_string(),
                company: "Tech Corp".to_string(),
                location: "Mumbai, India".to_string(),
                source: "linkedin".to_string(),
                posted_at: "2024-01-08T10:00:00Z".to_string(),
                salary_label: Some("500000-900000 INR".to_string()),
            }],
            ..SearchViewModel::default()
        }
    }

    #[test]
    fn result_page_lists_jobs_with_source_and_salary() {
        let text = render_results(&view_with_one_job());
        assert!(text.contains("page 1/1 of 3 matching jobs"));
        assert!(text.contains("[linkedin] Python Developer at Tech Corp (Mumbai, India)"));
        assert!(text.contains("posted 2024-01-08"));
        assert!(text.contains("500000-900000 INR"));
    }

    #[test]
    fn error_banner_precedes_retained_results() {
        let mut view = view_with_one_job();
        view.error = Some("request timed out".to_string());

        let text = render_results(&view);
        assert!(text.starts_with("! request timed out"));
        assert!(text.contains("showing last good results"));
        assert!(text.contains("Python Developer"));
    }

    #[test]
    fn empty_state_renders_a_placeholder() {
        let view = SearchViewModel::default();
        assert_eq!(render_results(&view), "no results\n");
    }
}
