//! DDMMYYYY digit-string dates.
//!
//! Every date in the entity model is stored as eight ASCII digits: two for
//! the day, two for the month and four for the year. Strings of any other
//! length are kept as-is; display passes them through and comparisons treat
//! them as unparseable.

use std::borrow::Cow;

use chrono::{Duration, Local, NaiveDate};

use crate::error::{VenueError, VenueResult};

/// Length of an encoded date.
pub const ENCODED_LEN: usize = 8;

/// Decode a DDMMYYYY string into a calendar date.
///
/// Only the length is enforced. Each field is read like a lenient integer
/// parse: leading whitespace and a sign are allowed and trailing junk is
/// ignored, so `"1a082025"` is 1 August 2025. A field without any leading
/// digits makes the whole date unparseable.
///
/// Day and month are not range-checked. Out-of-range values roll over the
/// way a lenient calendar constructor does: `"32012025"` is 1 February 2025,
/// month `13` is January of the following year and day `00` is the last day
/// of the previous month.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() != ENCODED_LEN {
        return None;
    }

    let field = |range: std::ops::Range<usize>| -> Option<i64> {
        let text: String = chars[range].iter().collect();
        leading_int(&text)
    };
    let day = field(0..2)?;
    let month = i32::try_from(field(2..4)?).ok()?;
    let year = i32::try_from(field(4..8)?).ok()?;

    from_lenient_parts(year, month - 1, day)
}

/// Integer value of the leading digits of `field`, after optional whitespace and sign.
fn leading_int(field: &str) -> Option<i64> {
    let trimmed = field.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let value: i64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Like [`parse_date`], for callers that cannot proceed without a date.
pub fn require_date(s: &str) -> VenueResult<NaiveDate> {
    parse_date(s).ok_or_else(|| VenueError::InvalidDate(s.to_string()))
}

/// Build a date from a year, a zero-based month and a day, carrying any
/// overflow into the neighbouring months and years.
fn from_lenient_parts(year: i32, month0: i32, day: i64) -> Option<NaiveDate> {
    let months = year.checked_mul(12)?.checked_add(month0)?;
    let first = NaiveDate::from_ymd_opt(months.div_euclid(12), months.rem_euclid(12) as u32 + 1, 1)?;
    first.checked_add_signed(Duration::days(day - 1))
}

/// Render a DDMMYYYY string as `DD/MM/YYYY`.
///
/// Anything that is not exactly eight characters long comes back unchanged.
pub fn format_date(s: &str) -> Cow<'_, str> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() != ENCODED_LEN {
        return Cow::Borrowed(s);
    }

    let day: String = chars[0..2].iter().collect();
    let month: String = chars[2..4].iter().collect();
    let year: String = chars[4..8].iter().collect();
    Cow::Owned(format!("{}/{}/{}", day, month, year))
}

/// Check whether `date` falls within `[start, end]`, both ends inclusive.
///
/// Returns false when any of the three strings fails to parse.
pub fn is_date_in_range(date: &str, start: &str, end: &str) -> bool {
    match (parse_date(date), parse_date(start), parse_date(end)) {
        (Some(date), Some(start), Some(end)) => start <= date && date <= end,
        _ => false,
    }
}

/// Encode a calendar date as DDMMYYYY.
pub fn encode_date(date: NaiveDate) -> String {
    date.format("%d%m%Y").to_string()
}

/// Today's local date, encoded as DDMMYYYY.
pub fn today_string() -> String {
    encode_date(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("15082025"), "15/08/2025");
        assert_eq!(format_date("abc"), "abc");
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("150820251"), "150820251");
    }

    #[test]
    fn test_format_date_borrows_on_passthrough() {
        assert!(matches!(format_date("1508"), Cow::Borrowed("1508")));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("15082025"), Some(ymd(2025, 8, 15)));
        assert_eq!(parse_date("01012000"), Some(ymd(2000, 1, 1)));
    }

    #[test]
    fn test_parse_date_rejects_wrong_length() {
        assert_eq!(parse_date("123"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("150820250"), None);
    }

    #[test]
    fn test_parse_date_reads_leading_digits() {
        assert_eq!(parse_date("1a082025"), Some(ymd(2025, 8, 1)));
        assert_eq!(parse_date(" 5082025"), Some(ymd(2025, 8, 5)));
        assert_eq!(parse_date("-1082025"), Some(ymd(2025, 7, 30)));
        assert_eq!(parse_date("15+82025"), Some(ymd(2025, 8, 15)));
    }

    #[test]
    fn test_parse_date_rejects_fields_without_digits() {
        assert_eq!(parse_date("abcdefgh"), None);
        assert_eq!(parse_date("ab082025"), None);
        assert_eq!(parse_date("15ab2025"), None);
        assert_eq!(parse_date("1508 -x1"), None);
    }

    #[test]
    fn test_is_date_in_range_with_lenient_fields() {
        assert!(is_date_in_range("1a082025", "01082025", "31082025"));
        assert!(!is_date_in_range("ab082025", "01082025", "31082025"));
    }

    #[test]
    fn test_require_date() {
        assert_eq!(require_date("15082025").unwrap(), ymd(2025, 8, 15));
        let err = require_date("2025-08-15").unwrap_err();
        assert_eq!(err.to_string(), "Invalid date '2025-08-15': expected DDMMYYYY");
    }

    #[test]
    fn test_parse_date_rolls_over() {
        assert_eq!(parse_date("32012025"), Some(ymd(2025, 2, 1)));
        assert_eq!(parse_date("15132025"), Some(ymd(2026, 1, 15)));
        assert_eq!(parse_date("00032025"), Some(ymd(2025, 2, 28)));
        assert_eq!(parse_date("10002025"), Some(ymd(2024, 12, 10)));
        assert_eq!(parse_date("31022024"), Some(ymd(2024, 3, 2)));
    }

    #[test]
    fn test_is_date_in_range() {
        assert!(is_date_in_range("15082025", "10082025", "31082025"));
        assert!(!is_date_in_range("05082025", "10082025", "31082025"));
        assert!(!is_date_in_range("01092025", "10082025", "31082025"));
    }

    #[test]
    fn test_is_date_in_range_inclusive_bounds() {
        assert!(is_date_in_range("10082025", "10082025", "31082025"));
        assert!(is_date_in_range("31082025", "10082025", "31082025"));
    }

    #[test]
    fn test_is_date_in_range_compares_calendar_order() {
        // Lexical order of DDMMYYYY would put this outside the range.
        assert!(is_date_in_range("05012026", "20122025", "10012026"));
    }

    #[test]
    fn test_is_date_in_range_unparseable() {
        assert!(!is_date_in_range("bad", "10082025", "31082025"));
        assert!(!is_date_in_range("15082025", "", "31082025"));
        assert!(!is_date_in_range("15082025", "10082025", "2025"));
    }

    #[test]
    fn test_encode_date() {
        assert_eq!(encode_date(ymd(2025, 8, 5)), "05082025");
        assert_eq!(encode_date(ymd(2025, 12, 31)), "31122025");
    }

    #[test]
    fn test_today_string_is_encoded() {
        let today = today_string();
        assert_eq!(today.len(), ENCODED_LEN);
        assert!(parse_date(&today).is_some());
    }
}
