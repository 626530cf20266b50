use crate::core::HealthStatus;
use crate::output::format::TableStyle;
use crate::utils::format_date;

/// One-line health report, e.g. "ok  http://localhost:8080 (Feb 6, 2026, 10:00)"
pub(crate) fn format_health(health: &HealthStatus, server: &str, style: &TableStyle<'_>) -> String {
    let status = if health.status.is_empty() {
        "unknown"
    } else {
        health.status.as_str()
    };
    let when = format_date(&health.time, style.timezone);
    format!("{status}  {server} ({when})")
}

pub(crate) fn output_health_json(health: &HealthStatus, server: &str) -> String {
    super::format::to_pretty_json(&serde_json::json!({
        "status": health.status,
        "time": health.time,
        "server": server,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::format::tests::plain_style;

    #[test]
    fn health_line() {
        let health = HealthStatus {
            status: "ok".to_string(),
            time: "2026-02-06T10:00:00Z".to_string(),
        };
        assert_eq!(
            format_health(&health, "http://ci:8080/app", &plain_style()),
            "ok  http://ci:8080/app (Feb 6, 2026, 10:00)"
        );
    }

    #[test]
    fn health_without_time() {
        let health = HealthStatus {
            status: String::new(),
            time: String::new(),
        };
        assert_eq!(
            format_health(&health, "http://ci:8080", &plain_style()),
            "unknown  http://ci:8080 (—)"
        );
    }

    #[test]
    fn health_json_includes_server() {
        let health = HealthStatus {
            status: "ok".to_string(),
            time: String::new(),
        };
        let parsed: serde_json::Value =
            serde_json::from_str(&output_health_json(&health, "http://ci:8080")).unwrap();
        assert_eq!(parsed["server"], "http://ci:8080");
    }
}
