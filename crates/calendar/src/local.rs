//! Bridges to `chrono` and the host's current local date.

use chrono::{Datelike, Local, NaiveDate};

use crate::civil::days_from_civil;
use crate::date::CivilDate;

/// Returns the day count of a `chrono` date.
pub fn from_naive_date(date: NaiveDate) -> i64 {
    // chrono guarantees month in 1..=12 and day in 1..=31.
    days_from_civil(date.year(), date.month() as u8, date.day() as u8)
}

/// Converts a [`CivilDate`] to a `chrono` date.
///
/// Returns `None` when the year is outside chrono's supported range
/// (roughly ±262,000 years).
pub fn to_naive_date(date: CivilDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), u32::from(date.month()), u32::from(date.day()))
}

/// Returns the current date in the host's local time zone.
pub fn today() -> CivilDate {
    CivilDate::from_day_count(today_day_count())
}

/// Returns the day count of the current date in the host's local time zone.
pub fn today_day_count() -> i64 {
    from_naive_date(Local::now().date_naive())
}
