//! Payload types returned by the test-results backend
//!
//! These are display records. They are deserialized as-is and never validated
//! beyond their shape.

use serde::{Deserialize, Serialize};

use super::status::StatusClass;

/// One test run reported by a CI job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct TestResult {
    pub(crate) id: i64,
    pub(crate) project: String,
    pub(crate) spec: String,
    pub(crate) browser: String,
    pub(crate) status: String,
    pub(crate) pipeline_id: String,
    pub(crate) job_id: String,
    pub(crate) job_url: String,
    pub(crate) created_at: String,
}

/// Aggregate counts for a single project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ProjectSummary {
    pub(crate) project: String,
    pub(crate) latest_status: String,
    pub(crate) total_runs: i64,
    pub(crate) passed_runs: i64,
    pub(crate) failed_runs: i64,
    pub(crate) last_run: String,
}

impl ProjectSummary {
    /// Share of passing runs in percent, `None` when the project has no runs
    pub(crate) fn pass_rate(&self) -> Option<f64> {
        if self.total_runs <= 0 {
            return None;
        }
        Some(self.passed_runs as f64 * 100.0 / self.total_runs as f64)
    }
}

/// Response of the backend health endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct HealthStatus {
    pub(crate) status: String,
    #[serde(default)]
    pub(crate) time: String,
}

/// Query filters understood by the result endpoints
///
/// Unset fields are left out of the query string so the backend applies its
/// own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ResultFilter {
    pub(crate) status: Option<String>,
    pub(crate) browser: Option<String>,
    /// Substring match on the spec path (project results only)
    pub(crate) spec: Option<String>,
    pub(crate) limit: Option<u32>,
}

impl ResultFilter {
    /// Query pairs in the order the backend documents them
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let non_blank = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        if let Some(status) = non_blank(&self.status) {
            pairs.push(("status", status));
        }
        if let Some(browser) = non_blank(&self.browser) {
            pairs.push(("browser", browser));
        }
        if let Some(spec) = non_blank(&self.spec) {
            pairs.push(("spec", spec));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// Passed/failed/other tally over a list of results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RunTally {
    pub(crate) passed: i64,
    pub(crate) failed: i64,
    pub(crate) other: i64,
}

impl RunTally {
    pub(crate) fn from_results(results: &[TestResult]) -> Self {
        let mut tally = RunTally::default();
        for result in results {
            match StatusClass::of(&result.status) {
                StatusClass::Success => tally.passed += 1,
                StatusClass::Failed => tally.failed += 1,
                StatusClass::Other => tally.other += 1,
            }
        }
        tally
    }

    pub(crate) fn total(&self) -> i64 {
        self.passed + self.failed + self.other
    }
}
