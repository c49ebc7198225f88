//! Day of the week.

use std::fmt;

/// Returns the weekday (0 = Sunday ..= 6 = Saturday) of a day count.
///
/// Day 0 (1970-01-01) is a Thursday (4). Only truncating remainders are
/// used; counts below -4 are shifted so the result stays in 0..=6.
pub fn weekday_of(count: i64) -> u8 {
    if count >= -4 {
        // (count + 4) % 7, reduced first so `i64::MAX` cannot overflow.
        ((count % 7 + 4) % 7) as u8
    } else {
        ((count + 5) % 7 + 6) as u8
    }
}

/// Day of the week, numbered from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

const ALL: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

impl Weekday {
    /// Returns the weekday for an index in 0..=6, or `None` otherwise.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL.get(usize::from(index)).copied()
    }

    /// Returns the weekday of a day count.
    pub fn of_day_count(count: i64) -> Self {
        ALL[usize::from(weekday_of(count))]
    }

    /// Returns the index (0 = Sunday ..= 6 = Saturday).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Full English name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Three-letter abbreviation.
    pub fn short_name(self) -> &'static str {
        &self.name()[..3]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
