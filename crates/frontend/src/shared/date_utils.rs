//! Date helpers: display formatting and quick-range construction.

use chrono::{Datelike, Duration, NaiveDate, Utc};

/// Format an ISO date ("YYYY-MM-DD", optionally with a time suffix) as
/// "DD/MM/YYYY" for tables and cards. Unparseable input is shown as-is.
pub fn format_date(value: &str) -> String {
    let date_part = value.split('T').next().unwrap_or(value);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    value.to_string()
}

pub fn today_iso() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// `(start, end)` of the last `days` days, inclusive of today.
pub fn last_days_range(days: i64) -> (String, String) {
    let today = Utc::now().date_naive();
    let start = today - Duration::days(days - 1);
    (
        start.format("%Y-%m-%d").to_string(),
        today.format("%Y-%m-%d").to_string(),
    )
}

/// `(start, end)` of the current calendar month.
pub fn current_month_range() -> (String, String) {
    let today = Utc::now().date_naive();
    month_range(today.year(), today.month())
}

/// `(start, end)` of the previous calendar month.
pub fn previous_month_range() -> (String, String) {
    let today = Utc::now().date_naive();
    let (year, month) = if today.month() == 1 {
        (today.year() - 1, 12)
    } else {
        (today.year(), today.month() - 1)
    };
    month_range(year, month)
}

fn month_range(year: i32, month: u32) -> (String, String) {
    let start = NaiveDate::from_ymd_opt(year, month, 1).expect("invalid month start");
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .map(|d| d - Duration::days(1))
    .expect("invalid month end");
    (
        start.format("%Y-%m-%d").to_string(),
        end.format("%Y-%m-%d").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-03-15"), "15/03/2026");
        assert_eq!(format_date("2026-03-15T14:02:26.123Z"), "15/03/2026");
    }

    #[test]
    fn test_invalid_format_passes_through() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        // Day segment ending inside a multi-byte char must not slice bytes
        assert_eq!(format_date("2026-01-9é"), "9é/01/2026");
        assert_eq!(format_date("日付なし"), "日付なし");
    }

    #[test]
    fn test_month_range_handles_december() {
        assert_eq!(
            month_range(2025, 12),
            ("2025-12-01".to_string(), "2025-12-31".to_string())
        );
        assert_eq!(
            month_range(2026, 2),
            ("2026-02-01".to_string(), "2026-02-28".to_string())
        );
    }
}
