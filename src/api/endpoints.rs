use super::client::FetchClient;
use crate::core::{HealthStatus, ProjectSummary, ResultFilter, TestResult};
use crate::error::FetchError;
use crate::utils::encode_path_segment;

pub(crate) fn list_projects(client: &FetchClient) -> Result<Vec<ProjectSummary>, FetchError> {
    client.fetch_json("/api/projects")
}

/// Newest-first run history of one project
pub(crate) fn project_results(
    client: &FetchClient,
    project: &str,
    filter: &ResultFilter,
) -> Result<Vec<TestResult>, FetchError> {
    let path = format!("/api/projects/{}/results", encode_path_segment(project));
    client.fetch_json_with_query(&path, &filter.query_pairs())
}

/// Newest-first results across all projects. The spec filter is not supported
/// by this endpoint and is dropped.
pub(crate) fn all_results(
    client: &FetchClient,
    filter: &ResultFilter,
) -> Result<Vec<TestResult>, FetchError> {
    let filter = ResultFilter {
        spec: None,
        ..filter.clone()
    };
    client.fetch_json_with_query("/api/results", &filter.query_pairs())
}

pub(crate) fn health(client: &FetchClient) -> Result<HealthStatus, FetchError> {
    client.fetch_json("/api/health")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::tests::{StubTransport, client};

    const RESULTS: &str = r#"[{"id":2,"project":"web app","spec":"b.cy.ts","browser":"chrome","status":"failed","pipeline_id":"10","job_id":"20","job_url":"https://ci/20","created_at":"2026-02-06 11:00:00"},{"id":1,"project":"web app","spec":"a.cy.ts","browser":"chrome","status":"success","pipeline_id":"9","job_id":"19","job_url":"https://ci/19","created_at":"2026-02-06 10:00:00"}]"#;

    #[test]
    fn list_projects_decodes_summaries() {
        let stub = StubTransport::default();
        stub.respond(
            "http://ci.local:8080/ci/api/projects",
            200,
            r#"[{"project":"web","latest_status":"failed","total_runs":3,"passed_runs":2,"failed_runs":1,"last_run":"2026-02-06 10:00:00"}]"#,
        );
        let projects = list_projects(&client("ci", &stub)).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].project, "web");
        assert_eq!(projects[0].latest_status, "failed");
    }

    #[test]
    fn project_results_encodes_name_and_filters() {
        let stub = StubTransport::default();
        stub.respond(
            "http://ci.local:8080/api/projects/web%20app/results",
            200,
            RESULTS,
        );
        let filter = ResultFilter {
            status: Some("failed".to_string()),
            spec: Some("login".to_string()),
            limit: Some(5),
            ..ResultFilter::default()
        };
        let results = project_results(&client("", &stub), "web app", &filter).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, 2);

        let requests = stub.requests.lock().unwrap();
        let query: Vec<&str> = requests[0].1.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(query, vec!["status", "spec", "limit"]);
    }

    #[test]
    fn all_results_drops_spec_filter() {
        let stub = StubTransport::default();
        stub.respond("http://ci.local:8080/api/results", 200, RESULTS);
        let filter = ResultFilter {
            browser: Some("chrome".to_string()),
            spec: Some("login".to_string()),
            ..ResultFilter::default()
        };
        let results = all_results(&client("", &stub), &filter).unwrap();
        assert_eq!(results.len(), 2);

        let requests = stub.requests.lock().unwrap();
        assert_eq!(
            requests[0].1,
            vec![("browser".to_string(), "chrome".to_string())]
        );
    }

    #[test]
    fn health_reports_status() {
        let stub = StubTransport::default();
        stub.respond(
            "http://ci.local:8080/api/health",
            200,
            r#"{"status":"ok","time":"2026-02-06T10:00:00Z"}"#,
        );
        let status = health(&client("/", &stub)).unwrap();
        assert_eq!(status.status, "ok");
    }

    #[test]
    fn server_error_surfaces_status() {
        let stub = StubTransport::default();
        stub.respond("http://ci.local:8080/api/projects", 500, "");
        let err = list_projects(&client("", &stub)).unwrap_err();
        assert_eq!(err.status(), Some(500));
    }
}
