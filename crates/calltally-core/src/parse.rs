//! Call-date extraction.
//!
//! Log records carry their timestamp as a localized 12-hour clock string,
//! e.g. `2023-03-15 2:30:00 p.m.`. This module turns that text into a
//! [`NaiveDateTime`] interpreted as host-local wall-clock time.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::error::{ParseError, Result};

/// `YYYY-MM-DD H:MM:SS` followed by the French meridiem marker.
/// Unanchored on purpose: the date may be embedded in surrounding text.
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4})-(\d{2})-(\d{2}) (\d{1,2}):(\d{2}):(\d{2}) (a\.m\.|p\.m\.)")
        .expect("date pattern is valid")
});

fn parse_component(text: &str) -> Result<u32> {
    text.parse::<u32>()
        .map_err(|_| ParseError::BadNumber(text.to_string()))
}

/// Parse a localized call-date string into a [`NaiveDateTime`].
///
/// The hour is given on a 12-hour clock: if the meridiem marker is `p.m.`
/// and the hour is not 12, the hour is shifted by 12. The `a.m.` side is
/// not adjusted, so `12:xx:xx a.m.` keeps hour 12. That matches the
/// reports this tool replaces; midnight calls count toward the 12-13 band.
///
/// # Examples
///
/// ```
/// use calltally_core::parse::parse_call_date;
/// use chrono::Timelike;
///
/// let ts = parse_call_date("2023-03-15 2:30:00 p.m.").unwrap();
/// assert_eq!(ts.hour(), 14);
/// ```
pub fn parse_call_date(text: &str) -> Result<NaiveDateTime> {
    let caps = DATE_RE
        .captures(text)
        .ok_or_else(|| ParseError::Malformed(text.to_string()))?;

    let year = parse_component(&caps[1])? as i32;
    let month = parse_component(&caps[2])?;
    let day = parse_component(&caps[3])?;
    let mut hour = parse_component(&caps[4])?;
    let minute = parse_component(&caps[5])?;
    let second = parse_component(&caps[6])?;

    if &caps[7] == "p.m." && hour != 12 {
        hour += 12;
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or_else(|| ParseError::OutOfRange(text.to_string()))
}
