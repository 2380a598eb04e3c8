//! Parsing and formatting of API timestamps.
//!
//! The API is not consistent about timestamp shape: RFC 3339 with an offset,
//! naive ISO datetimes with `T` or a space, and bare dates all occur.
//! Offsets are dropped and the wall-clock time is kept.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse any timestamp shape the API produces
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }

    parse_date(s).map(start_of_day)
}

/// Parse a `YYYY-MM-DD` date, as produced by `<input type="date">`
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

/// Last representable instant of the day, so that `<=` includes the whole day
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_nano_opt(23, 59, 59, 999_999_999)
        .unwrap_or_else(|| start_of_day(date))
}

/// Format a timestamp as DD/MM/YYYY, "N/A" when absent, raw when unparseable
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024"
pub fn format_date_opt(s: Option<&str>) -> String {
    match s.map(str::trim).filter(|s| !s.is_empty()) {
        None => "N/A".to_string(),
        Some(raw) => parse_timestamp(raw)
            .map(|dt| dt.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

/// Format a timestamp as DD/MM/YYYY HH:MM:SS
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02:26"
pub fn format_datetime_opt(s: Option<&str>) -> String {
    match s.map(str::trim).filter(|s| !s.is_empty()) {
        None => "N/A".to_string(),
        Some(raw) => parse_timestamp(raw)
            .map(|dt| dt.format("%d/%m/%Y %H:%M:%S").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_shapes() {
        assert_eq!(
            parse_timestamp("2024-03-15T14:02:26.123Z").map(|d| d.format("%H:%M:%S").to_string()),
            Some("14:02:26".to_string())
        );
        assert_eq!(
            parse_timestamp("2024-03-15T14:02:26+07:00"),
            Some(dt(2024, 3, 15, 14, 2, 26))
        );
        assert_eq!(
            parse_timestamp("2024-03-15T14:02:26"),
            Some(dt(2024, 3, 15, 14, 2, 26))
        );
        assert_eq!(
            parse_timestamp("2024-03-15 14:02:26"),
            Some(dt(2024, 3, 15, 14, 2, 26))
        );
        assert_eq!(parse_timestamp("2024-03-15"), Some(dt(2024, 3, 15, 0, 0, 0)));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2024-13-40"), None);
    }

    #[test]
    fn test_day_bounds() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(start_of_day(date), dt(2024, 1, 31, 0, 0, 0));
        assert!(end_of_day(date) > dt(2024, 1, 31, 23, 59, 59));
        assert!(end_of_day(date) < dt(2024, 2, 1, 0, 0, 0));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date_opt(Some("2024-03-15")), "15/03/2024");
        assert_eq!(format_date_opt(Some("2024-03-15T14:02:26.123Z")), "15/03/2024");
        assert_eq!(format_date_opt(None), "N/A");
        assert_eq!(format_date_opt(Some("invalid")), "invalid");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime_opt(Some("2024-12-31T23:59:59Z")),
            "31/12/2024 23:59:59"
        );
        assert_eq!(format_datetime_opt(Some(" ")), "N/A");
    }
}
