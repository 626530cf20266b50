use chrono::{DateTime, NaiveDateTime, Utc};

use super::timezone::Timezone;

/// Shown in place of a missing timestamp, status or rate
pub(crate) const PLACEHOLDER: &str = "—";

const DISPLAY_FORMAT: &str = "%b %-d, %Y, %H:%M";

/// Parse a backend timestamp.
///
/// Accepts RFC 3339 and SQLite's `CURRENT_TIMESTAMP` layout
/// (`YYYY-MM-DD HH:MM:SS`, always UTC), with or without the `T` separator.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Human-readable timestamp, e.g. "Feb 6, 2026, 10:00".
///
/// Empty input gives the placeholder; unparseable input is shown as-is.
pub(crate) fn format_date(raw: &str, tz: Timezone) -> String {
    if raw.trim().is_empty() {
        return PLACEHOLDER.to_string();
    }
    match parse_timestamp(raw) {
        Some(utc) => tz.to_fixed_offset(utc).format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> Timezone {
        Timezone::Named(chrono_tz::UTC)
    }

    #[test]
    fn empty_is_placeholder() {
        assert_eq!(format_date("", utc()), "—");
        assert_eq!(format_date("   ", utc()), "—");
    }

    #[test]
    fn rfc3339_has_all_components() {
        let formatted = format_date("2026-02-06T09:05:00Z", utc());
        assert_eq!(formatted, "Feb 6, 2026, 09:05");
        assert!(formatted.contains("2026"));
        assert!(formatted.contains("Feb"));
        assert!(formatted.contains('6'));
        assert!(formatted.contains("09:05"));
    }

    #[test]
    fn sqlite_timestamp_is_utc() {
        assert_eq!(format_date("2026-02-06 22:30:00", utc()), "Feb 6, 2026, 22:30");
    }

    #[test]
    fn offset_is_converted() {
        assert_eq!(
            format_date("2026-02-06T23:00:00+08:00", utc()),
            "Feb 6, 2026, 15:00"
        );
    }

    #[test]
    fn named_timezone_shifts_display() {
        let tz = Timezone::parse(Some("Asia/Shanghai")).unwrap();
        assert_eq!(format_date("2026-02-06 22:30:00", tz), "Feb 7, 2026, 06:30");
    }

    #[test]
    fn garbage_is_shown_verbatim() {
        assert_eq!(format_date("yesterday", utc()), "yesterday");
    }

    #[test]
    fn parse_timestamp_variants() {
        assert!(parse_timestamp("2026-02-06T10:00:00.123Z").is_some());
        assert!(parse_timestamp("2026-02-06T10:00:00").is_some());
        assert!(parse_timestamp("2026-02-06 10:00").is_some());
        assert!(parse_timestamp("2026-02-06").is_none());
    }
}
