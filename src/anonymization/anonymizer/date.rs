//! Calendar date parsing and month-year generalization

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

// Two-digit years go first: %Y would otherwise read "99" as year 99
const DATE_FORMATS: [&str; 12] = [
    "%m/%d/%y",
    "%m-%d-%y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
];

/// Parse a value as a calendar date
///
/// Accepts ISO dates, US slash/dash dates, RFC 3339 timestamps, written
/// month names and `YYYY-MM`. Bare numbers are never dates. Returns `None`
/// for anything else.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date());
        }
    }

    parse_partial(value)
}

/// `YYYY-MM` and `YYYY/MM`
fn parse_partial(value: &str) -> Option<NaiveDate> {
    let (year, month) = match value.split_once(['-', '/']) {
        Some((y, m)) if y.len() == 4 && (1..=2).contains(&m.len()) => (y, m),
        _ => return None,
    };

    if !year.bytes().all(|b| b.is_ascii_digit()) || !month.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// Generalize a date value to `<Mon>-<YYYY>`
///
/// Unparseable values are returned unchanged.
///
/// # Examples
///
/// ```
/// use tabmask::anonymization::anonymizer::date::generalize_date;
///
/// assert_eq!(generalize_date("2021-03-14"), "Mar-2021");
/// assert_eq!(generalize_date("not a date"), "not a date");
/// ```
pub fn generalize_date(value: &str) -> String {
    match parse_calendar_date(value) {
        Some(date) => format!("{}-{:04}", month_abbrev(date.month()), date.year()),
        None => value.to_string(),
    }
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}
