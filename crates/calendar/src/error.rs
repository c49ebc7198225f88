//! Error types for the daycount-calendar crate.

/// Error type for all fallible operations in the daycount-calendar crate.
///
/// The core conversions are infallible; these variants come from the
/// validated [`CivilDate`](crate::CivilDate) constructors, date parsing and
/// the verification sweep.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number is outside the days of the given month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year for which the day is invalid.
        year: i32,
        /// The last valid day of that month.
        max_day: u8,
    },

    /// Returned when a string is not a `YYYY-MM-DD` date.
    #[error("invalid date format: {input:?} (expected YYYY-MM-DD)")]
    InvalidFormat {
        /// The text that failed to parse.
        input: String,
    },

    /// Returned when a sweep configuration cannot be run.
    #[error("invalid sweep configuration: {reason}")]
    InvalidSweep {
        /// Why the configuration was rejected.
        reason: String,
    },

    /// Returned when the sweep finds a date violating a conversion invariant.
    #[error("sweep check {check} failed at {date}: expected {expected}, got {actual}")]
    SweepMismatch {
        /// The date being checked, formatted as `YYYY-MM-DD`.
        date: String,
        /// Name of the violated check.
        check: &'static str,
        /// Expected value.
        expected: String,
        /// Observed value.
        actual: String,
    },
}
