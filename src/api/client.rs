//! JSON fetch wrapper
//!
//! Every request goes through `FetchClient`, which applies the deployment
//! prefix to root-relative paths before joining them onto the server URL.
//! One call is one GET: no retries, no caching.

use std::time::Instant;

use serde::de::DeserializeOwned;

use super::transport::HttpTransport;
use crate::core::PathPrefix;
use crate::error::FetchError;
use crate::utils::{debug_enabled, is_absolute_url};

pub(crate) struct FetchClient {
    base_url: String,
    prefix: PathPrefix,
    transport: Box<dyn HttpTransport>,
}

impl FetchClient {
    pub(crate) fn new(base_url: &str, prefix: PathPrefix, transport: Box<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            prefix,
            transport,
        }
    }

    pub(crate) fn prefix(&self) -> &PathPrefix {
        &self.prefix
    }

    /// Request path after prefixing; absolute URLs pass through untouched
    pub(crate) fn effective_path(&self, path: &str) -> String {
        if is_absolute_url(path) {
            return path.to_string();
        }
        self.prefix.apply(path)
    }

    /// Full URL the request is sent to
    pub(crate) fn target(&self, path: &str) -> String {
        let effective = self.effective_path(path);
        if is_absolute_url(&effective) {
            effective
        } else if effective.starts_with('/') {
            format!("{}{}", self.base_url, effective)
        } else {
            format!("{}/{}", self.base_url, effective)
        }
    }

    pub(crate) fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        self.fetch_json_with_query(path, &[])
    }

    pub(crate) fn fetch_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let url = self.target(path);
        let start = Instant::now();
        let response = self.transport.get(&url, query)?;

        if debug_enabled() {
            eprintln!(
                "[debug] GET {} {}-> {} ({:.0}ms)",
                url,
                format_query(query),
                response.status,
                start.elapsed().as_secs_f64() * 1000.0
            );
        }

        if !response.is_success() {
            return Err(FetchError::Request {
                status: response.status,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }
}

fn format_query(query: &[(&str, String)]) -> String {
    if query.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("[{}] ", pairs.join(" "))
}
