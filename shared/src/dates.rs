//! Small date helpers shared by the form and the date picker. Dates cross the
//! wire and the UI as `YYYY-MM-DD` strings; chrono is only consulted for
//! "today".

use chrono::{Datelike, Local};

use crate::calendar::CalendarService;

/// Today's date in the local timezone as `YYYY-MM-DD`.
pub fn current_date_string() -> String {
    let now = Local::now();
    format!("{:04}-{:02}-{:02}", now.year(), now.month(), now.day())
}

/// Parse a `YYYY-MM-DD` string into (year, month, day).
pub fn parse_date_string(date_str: &str) -> Option<(u32, u32, u32)> {
    let parts: Vec<&str> = date_str.split('-').collect();
    if parts.len() != 3 {
        return None;
    }

    let year = parts[0].parse::<u32>().ok()?;
    let month = parts[1].parse::<u32>().ok()?;
    let day = parts[2].parse::<u32>().ok()?;

    if (1..=12).contains(&month) && (1..=31).contains(&day) {
        Some((year, month, day))
    } else {
        None
    }
}

/// Format a `YYYY-MM-DD` string for display, e.g. "December 1, 2024".
/// Unparseable input is returned as-is.
pub fn format_date_for_display(date_str: &str) -> String {
    if let Some((year, month, day)) = parse_date_string(date_str) {
        format!("{} {}, {}", CalendarService::new().month_name(month), day, year)
    } else {
        date_str.to_string()
    }
}

/// Whether a `YYYY-MM-DD` string is today's local date.
pub fn is_today(date_str: &str) -> bool {
    date_str == current_date_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_date_string_is_iso() {
        let today = current_date_string();
        assert_eq!(today.len(), 10);
        assert!(parse_date_string(&today).is_some());
    }

    #[test]
    fn test_parse_date_string() {
        assert_eq!(parse_date_string("2024-12-01"), Some((2024, 12, 1)));
        assert_eq!(parse_date_string("2024-13-01"), None);
        assert_eq!(parse_date_string("2024-12-32"), None);
        assert_eq!(parse_date_string("2024-12"), None);
        assert_eq!(parse_date_string("not-a-date"), None);
    }

    #[test]
    fn test_format_date_for_display() {
        assert_eq!(format_date_for_display("2024-12-01"), "December 1, 2024");
        assert_eq!(format_date_for_display("garbage"), "garbage");
    }

    #[test]
    fn test_is_today() {
        assert!(is_today(&current_date_string()));
        assert!(!is_today("1999-01-01"));
    }
}
