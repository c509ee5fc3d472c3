//! Date formatting shared by tables and detail views.

use contracts::domain::common::parse_timestamp;

/// Fixed display format, e.g. `Mar 15, 2024`
pub const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";

/// Format an ISO date/datetime for display. Unparsable input is shown as-is.
pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format(DISPLAY_DATE_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// `YYYY-MM-DD` part of a timestamp, for `<input type="date">`
pub fn to_input_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "Mar 15, 2024");
        assert_eq!(format_date("2024-03-05"), "Mar 05, 2024");
        assert_eq!(format_date("2024-12-31 23:59:59"), "Dec 31, 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(to_input_date("invalid"), "");
        assert_eq!(to_input_date("2024-03-15T14:02:26Z"), "2024-03-15");
    }
}
