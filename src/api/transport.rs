use std::time::Duration;

use crate::error::FetchError;

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub(crate) status: u16,
    pub(crate) body: String,
}

impl RawResponse {
    pub(crate) fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues a single GET and hands back whatever the server answered.
///
/// Implementations must not turn HTTP error statuses into errors; only
/// failures to complete the exchange are `Err`.
pub(crate) trait HttpTransport: Send + Sync {
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<RawResponse, FetchError>;
}

/// Production transport backed by a shared `ureq` agent
pub(crate) struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub(crate) fn new(timeout: Option<Duration>) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .into();
        Self { agent }
    }
}

impl HttpTransport for UreqTransport {
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<RawResponse, FetchError> {
        let mut request = self.agent.get(url).header("Accept", "application/json");
        for (key, value) in query {
            request = request.query(*key, value);
        }
        let response = request.call().map_err(FetchError::transport)?;
        let status = response.status().as_u16();

        let mut body = response.into_body();
        let body = match body.read_to_string() {
            Ok(text) => text,
            // An error page that can't be read still reports its status.
            Err(_) if !(200..300).contains(&status) => String::new(),
            Err(e) => return Err(FetchError::transport(e)),
        };
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        let ok = |status| RawResponse {
            status,
            body: String::new(),
        };
        assert!(ok(200).is_success());
        assert!(ok(204).is_success());
        assert!(ok(299).is_success());
        assert!(!ok(199).is_success());
        assert!(!ok(304).is_success());
        assert!(!ok(500).is_success());
    }

    #[test]
    fn connection_refused_is_transport_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let transport = UreqTransport::new(Some(Duration::from_secs(2)));
        let err = transport.get("http://127.0.0.1:9/api/health", &[]).unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)), "{err}");
    }
}
