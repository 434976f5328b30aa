use chrono::{DateTime, Utc};

/// Day, full month name and year, as written in en-GB.
const LONG_DATE_FORMAT: &str = "%-d %B %Y";

/// Parses an ISO-8601 / RFC 3339 timestamp such as `2021-03-05T00:00:00Z`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

/// Formats a timestamp as a long date (`5 March 2021`), in UTC.
///
/// Input that does not parse is returned unchanged.
pub fn format_long_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => ts.format(LONG_DATE_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_day_month_year() {
        assert_eq!(format_long_date("2021-03-05T00:00:00Z"), "5 March 2021");
    }

    #[test]
    fn formats_in_utc() {
        assert_eq!(format_long_date("2020-12-31T23:30:00-02:00"), "1 January 2021");
    }

    #[test]
    fn unparseable_input_is_passed_through() {
        assert_eq!(format_long_date("yesterday"), "yesterday");
        assert_eq!(format_long_date(""), "");
    }

    #[test]
    fn parses_github_timestamps() {
        let ts = parse_timestamp("2011-01-26T19:01:12Z").unwrap();
        assert_eq!(ts.to_rfc3339(), "2011-01-26T19:01:12+00:00");
        assert!(parse_timestamp("2011-01-26").is_none());
    }
}
