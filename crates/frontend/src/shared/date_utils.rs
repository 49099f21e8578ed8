/// Utilities for date and time formatting
///
/// History timestamps arrive as ISO local datetimes ("2024-03-15T14:02:26.123")
/// or with an offset ("2024-03-15T14:02:26Z"); both are shown as wall-clock time.
use chrono::{DateTime, NaiveDateTime};

fn parse_datetime(datetime_str: &str) -> Option<NaiveDateTime> {
    let s = datetime_str.trim();
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.naive_local())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").ok())
        .or_else(|| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").ok())
}

/// Format an ISO datetime as "DD/MM/YYYY - HH:MM" for the history list
/// Example: "2024-03-15T14:02:26.123" -> "15/03/2024 - 14:02"
pub fn format_history_timestamp(datetime_str: &str) -> String {
    match parse_datetime(datetime_str) {
        Some(dt) => dt.format("%d/%m/%Y - %H:%M").to_string(),
        None => datetime_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_history_timestamp() {
        assert_eq!(
            format_history_timestamp("2024-03-15T14:02:26.123"),
            "15/03/2024 - 14:02"
        );
        assert_eq!(
            format_history_timestamp("2024-12-31T23:59:59Z"),
            "31/12/2024 - 23:59"
        );
        assert_eq!(format_history_timestamp("2024-01-05T08:07"), "05/01/2024 - 08:07");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_history_timestamp("invalid"), "invalid");
        assert_eq!(format_history_timestamp(""), "");
    }
}
