//! Validated proleptic Gregorian date.

use std::fmt;
use std::str::FromStr;

use crate::civil::{checked_civil_from_days, civil_from_days, days_from_civil};
use crate::error::CalendarError;
use crate::leap;
use crate::weekday::Weekday;

/// A valid date in the proleptic Gregorian calendar.
///
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CivilDate {
    /// 1970-01-01, day count 0.
    pub const EPOCH: Self = Self {
        year: 1970,
        month: 1,
        day: 1,
    };

    /// Creates a new `CivilDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDay`] if `day` is not valid for the
    /// given month of `year`.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = leap::last_day_of_month(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates the date `count` days after 1970-01-01.
    ///
    /// Counts beyond the `i32` year range saturate, see
    /// [`civil_from_days`](crate::civil_from_days).
    pub fn from_day_count(count: i64) -> Self {
        let (year, month, day) = civil_from_days(count);
        Self { year, month, day }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(year, month, day)` as a tuple.
    pub fn ymd(self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Returns the number of days since 1970-01-01.
    pub fn day_count(self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        Weekday::of_day_count(self.day_count())
    }

    /// Returns `true` if the date falls in a leap year.
    pub fn is_leap_year(self) -> bool {
        leap::is_leap_year(self.year)
    }

    /// Returns the last day of this date's month.
    pub fn last_day_of_month(self) -> u8 {
        leap::last_day_of_month(self.year, self.month)
    }

    /// Returns the following day.
    ///
    /// Saturates: the latest representable date, `i32::MAX`-12-31, is
    /// returned unchanged. Use [`checked_next`](Self::checked_next) to detect
    /// that case.
    pub fn next(self) -> Self {
        self.checked_next().unwrap_or(self)
    }

    /// Returns the preceding day.
    ///
    /// Saturates: the earliest representable date, `i32::MIN`-01-01, is
    /// returned unchanged. Use [`checked_prev`](Self::checked_prev) to detect
    /// that case.
    pub fn prev(self) -> Self {
        self.checked_prev().unwrap_or(self)
    }

    /// Returns the following day, or `None` after `i32::MAX`-12-31.
    pub fn checked_next(self) -> Option<Self> {
        if self.day < self.last_day_of_month() {
            return Some(Self {
                day: self.day + 1,
                ..self
            });
        }
        checked_civil_from_days(self.day_count() + 1)
            .map(|(year, month, day)| Self { year, month, day })
    }

    /// Returns the preceding day, or `None` before `i32::MIN`-01-01.
    pub fn checked_prev(self) -> Option<Self> {
        if self.day > 1 {
            return Some(Self {
                day: self.day - 1,
                ..self
            });
        }
        checked_civil_from_days(self.day_count() - 1)
            .map(|(year, month, day)| Self { year, month, day })
    }
}

/// Formats a triple as `YYYY-MM-DD`, whether or not it is a valid date.
pub(crate) fn format_ymd(year: i32, month: u8, day: u8) -> String {
    let sign = if year < 0 { "-" } else { "" };
    format!("{sign}{:04}-{month:02}-{day:02}", year.unsigned_abs())
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_ymd(self.year, self.month, self.day))
    }
}

impl FromStr for CivilDate {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD`, with an optional `+` or `-` before the year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidFormat {
            input: s.to_string(),
        };
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let mut parts = rest.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };
        let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(y) || !all_digits(m) || !all_digits(d) || m.len() > 2 || d.len() > 2 {
            return Err(invalid());
        }

        // Parse the magnitude as i64 so "-2147483648" is accepted.
        let magnitude: i64 = y.parse().map_err(|_| invalid())?;
        let year = i32::try_from(if negative { -magnitude } else { magnitude })
            .map_err(|_| invalid())?;
        let month: u8 = m.parse().map_err(|_| invalid())?;
        let day: u8 = d.parse().map_err(|_| invalid())?;
        Self::new(year, month, day)
    }
}
