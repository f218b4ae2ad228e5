use std::time::Duration;

use jobscope_client::{ApiError, ApiErrorKind, ApiSettings, ReqwestApi, SearchApi, TimeRange};
use jobscope_core::{FilterPatch, SearchFilters, SearchRequest, SortBy, TimeFilter};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> ApiSettings {
    ApiSettings {
        base_url: format!("{}/api", server.uri()),
        ..ApiSettings::default()
    }
}

fn request_with(patch: FilterPatch, page: u32) -> SearchRequest {
    SearchRequest {
        filters: SearchFilters::default().apply(patch),
        sort_by: SortBy::Recent,
        page,
        page_size: 20,
    }
}

fn jobs_body() -> serde_json::Value {
    json!({
        "jobs": [{
            "id": "1",
            "title": "Python Developer",
            "company": "Tech Corp",
            "location": "Mumbai, India",
            "description": "FastAPI experience required",
            "skills": ["Python", "FastAPI"],
            "posted_at": "2024-01-08T10:00:00Z",
            "source": "linkedin",
            "salary": {"min": 500000, "max": 900000, "currency": "INR"}
        }],
        "total": 42
    })
}

#[tokio::test]
async fn search_sends_csv_hashtags_and_pagination_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .and(query_param("hashtags", "python,remote"))
        .and(query_param("limit", "20"))
        .and(query_param("offset", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(jobs_body()))
        .expect(1)
        .mount(&server)
        .await;

    let api = ReqwestApi::new(settings_for(&server)).expect("client");
    let request = request_with(
        FilterPatch {
            hashtags: Some(vec!["python".to_string(), "remote".to_string()]),
            ..FilterPatch::default()
        },
        2,
    );

    let result = api.search(&request).await.expect("search ok");
    assert_eq!(result.total, 42);
    assert_eq!(result.jobs.len(), 1);
    let job = &result.jobs[0];
    assert_eq!(job.title, "Python Developer");
    assert_eq!(job.source, "linkedin");
    assert!(job.posted_at.starts_with("2024-01-08T10:00:00"));
    let salary = job.salary.as_ref().expect("salary mapped");
    assert_eq!(salary.min, Some(500_000));
    assert_eq!(salary.currency, "INR");
}

#[tokio::test]
async fn free_text_goes_out_as_the_q_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .and(query_param("q", "rust developer"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jobs": [], "total": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let api = ReqwestApi::new(settings_for(&server)).expect("client");
    let request = request_with(
        FilterPatch {
            text: Some("rust developer".to_string()),
            ..FilterPatch::default()
        },
        1,
    );

    let result = api.search(&request).await.expect("search ok");
    assert_eq!(result.total, 0);
}

#[tokio::test]
async fn non_2xx_response_maps_to_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let api = ReqwestApi::new(settings_for(&server)).expect("client");
    let err = api
        .search(&request_with(FilterPatch::default(), 1))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Status(404));
}

#[tokio::test]
async fn slow_response_maps_to_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({"jobs": [], "total": 0})),
        )
        .mount(&server)
        .await;

    let settings = ApiSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let api = ReqwestApi::new(settings).expect("client");
    let err = api
        .search(&request_with(FilterPatch::default(), 1))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Timeout);
}

#[tokio::test]
async fn unreachable_host_maps_to_network_error() {
    let settings = ApiSettings {
        base_url: "http://127.0.0.1:1/api".to_string(),
        connect_timeout: Duration::from_millis(200),
        ..ApiSettings::default()
    };
    let api = ReqwestApi::new(settings).expect("client");

    let err = api
        .search(&request_with(FilterPatch::default(), 1))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError {
            kind: ApiErrorKind::Network | ApiErrorKind::Timeout,
            ..
        }
    ));
}

#[tokio::test]
async fn malformed_body_maps_to_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api = ReqwestApi::new(settings_for(&server)).expect("client");
    let err = api
        .search(&request_with(FilterPatch::default(), 1))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Network);
}

#[tokio::test]
async fn discovery_posts_the_documented_body_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/scrape-jobs"))
        .and(body_json(json!({
            "hashtags": ["python"],
            "sources": ["linkedin", "naukri", "indeed", "twitter"],
            "timeFilter": "7d",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "queued"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = ReqwestApi::new(settings_for(&server)).expect("client");
    // Empty source set is sent as all four boards.
    let ack = api
        .trigger_discovery(
            &["python".to_string()],
            &Default::default(),
            TimeFilter::D7,
        )
        .await
        .expect("discovery accepted");
    assert_eq!(ack.message, "queued");
}

#[tokio::test]
async fn discovery_failure_maps_to_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/scrape-jobs"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api = ReqwestApi::new(settings_for(&server)).expect("client");
    let err = api
        .trigger_discovery(&[], &Default::default(), TimeFilter::H24)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Status(500));
}

#[tokio::test]
async fn dashboard_parses_the_camel_case_body() {
    let server = MockServer::start().await;
    // Every top-level key is camelCase on the wire, the trend lists
    // included.
    Mock::given(method("GET"))
        .and(path("/api/analytics/dashboard"))
        .and(query_param("time_range", "30d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "stats": {"totalJobs": 120, "newJobs": 8, "totalContacts": 64, "savedJobs": 5},
            "jobTrends": [{"date": "2024-01-08", "jobs": 12}],
            "skillTrends": [{"skill": "Python", "count": 40}],
            "locationTrends": [{"location": "Mumbai", "count": 18}],
        })))
        .mount(&server)
        .await;

    let api = ReqwestApi::new(settings_for(&server)).expect("client");
    let snapshot = api.dashboard(TimeRange::D30).await.expect("dashboard ok");
    assert_eq!(snapshot.stats.total_jobs, 120);
    assert_eq!(snapshot.stats.new_jobs, 8);
    assert_eq!(snapshot.job_trends[0].jobs, 12);
    assert_eq!(snapshot.skill_trends[0].skill, "Python");
    assert_eq!(snapshot.location_trends[0].location, "Mumbai");
}
