//! Exhaustive verification sweep over a symmetric range of years.
//!
//! Every valid date in `-years..=years` is enumerated in chronological order
//! and checked against the conversion invariants: consecutive day counts,
//! round-trip through [`civil_from_days`], and a weekday that advances by one.
//! The range is split into chunks of whole years checked in parallel.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::civil::{civil_from_days, days_from_civil};
use crate::date::format_ymd;
use crate::error::CalendarError;
use crate::leap::last_day_of_month;
use crate::weekday::weekday_of;

/// Sweep settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// The sweep covers `-years..=years`. Must be at least 1.
    pub years: i32,
    /// Number of years handed to each parallel task. Must be at least 1.
    pub chunk_years: i32,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            years: 1_000_000,
            chunk_years: 10_000,
        }
    }
}

impl SweepConfig {
    /// Checks that the configuration describes a non-empty sweep.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidSweep`] if `years` or `chunk_years`
    /// is below 1.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.years < 1 {
            return Err(CalendarError::InvalidSweep {
                reason: format!("years must be >= 1, got {}", self.years),
            });
        }
        if self.chunk_years < 1 {
            return Err(CalendarError::InvalidSweep {
                reason: format!("chunk_years must be >= 1, got {}", self.chunk_years),
            });
        }
        Ok(())
    }
}

/// Outcome of a successful sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    /// Number of dates checked.
    pub dates_checked: u64,
    /// Day count of `years`-12-31 minus day count of `-years`-01-01.
    pub days_spanned: i64,
}

/// Runs the verification sweep described by `config`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidSweep`] for an invalid configuration and
/// [`CalendarError::SweepMismatch`] for the first violated invariant found.
#[tracing::instrument(skip(config), fields(years = config.years, chunk_years = config.chunk_years))]
pub fn sweep(config: &SweepConfig) -> Result<SweepReport, CalendarError> {
    config.validate()?;
    check_epoch()?;

    let first = -config.years;
    let last = config.years;
    let chunks = year_chunks(first, last, config.chunk_years);
    debug!(n_chunks = chunks.len(), "checking year chunks");

    let dates_checked = chunks
        .par_iter()
        .map(|&(lo, hi)| {
            let prev_count = chunk_start(lo, first)?;
            check_years(lo, hi, prev_count)
        })
        .try_reduce(|| 0, |a, b| Ok(a + b))?;

    let days_spanned = days_from_civil(last, 12, 31) - days_from_civil(first, 1, 1);
    if dates_checked as i64 != days_spanned + 1 {
        return Err(mismatch(
            (last, 12, 31),
            "span",
            days_spanned + 1,
            dates_checked,
        ));
    }
    info!(dates_checked, days_spanned, "sweep complete");
    Ok(SweepReport {
        dates_checked,
        days_spanned,
    })
}

/// Fixed points around the epoch.
fn check_epoch() -> Result<(), CalendarError> {
    let count = days_from_civil(1970, 1, 1);
    if count != 0 {
        return Err(mismatch((1970, 1, 1), "epoch day count", 0, count));
    }
    let back = civil_from_days(0);
    if back != (1970, 1, 1) {
        return Err(mismatch(
            (1970, 1, 1),
            "epoch round-trip",
            format_ymd(1970, 1, 1),
            format_ymd(back.0, back.1, back.2),
        ));
    }
    let wd = weekday_of(0);
    if wd != 4 {
        return Err(mismatch((1970, 1, 1), "epoch weekday", 4, wd));
    }
    Ok(())
}

/// Splits `first..=last` into inclusive ranges of at most `chunk_years` years.
fn year_chunks(first: i32, last: i32, chunk_years: i32) -> Vec<(i32, i32)> {
    let mut chunks = Vec::new();
    // i64 so the step past `last` cannot overflow.
    let mut lo = i64::from(first);
    let last = i64::from(last);
    while lo <= last {
        let hi = (lo + i64::from(chunk_years) - 1).min(last);
        chunks.push((lo as i32, hi as i32));
        lo = hi + 1;
    }
    chunks
}

/// Day count preceding the chunk starting at `lo`-01-01.
///
/// The first chunk starts from the day before `first`-01-01, which must lie
/// before the epoch. Every later chunk starts from the count of
/// (`lo` - 1)-12-31, so the year boundary between two chunks is checked like
/// any other.
fn chunk_start(lo: i32, first: i32) -> Result<i64, CalendarError> {
    if lo != first {
        return Ok(days_from_civil(lo - 1, 12, 31));
    }
    let prev_count = days_from_civil(first, 1, 1) - 1;
    if prev_count >= 0 {
        let (y, m, d) = civil_from_days(prev_count);
        return Err(mismatch((y, m, d), "start before epoch", "< 0", prev_count));
    }
    Ok(prev_count)
}

/// Checks every date from `first`-01-01 to `last`-12-31, each against the
/// date before it starting from `prev_count`, and returns how many dates
/// were checked.
fn check_years(first: i32, last: i32, mut prev_count: i64) -> Result<u64, CalendarError> {
    let mut prev_wd = weekday_of(prev_count);
    if prev_wd > 6 {
        let (y, m, d) = civil_from_days(prev_count);
        return Err(mismatch((y, m, d), "weekday range", "0..=6", prev_wd));
    }

    let mut checked = 0u64;
    for year in first..=last {
        for month in 1..=12u8 {
            for day in 1..=last_day_of_month(year, month) {
                let ymd = (year, month, day);
                let count = days_from_civil(year, month, day);
                if count != prev_count + 1 {
                    return Err(mismatch(ymd, "consecutive", prev_count + 1, count));
                }

                let back = civil_from_days(count);
                if back != ymd {
                    return Err(mismatch(
                        ymd,
                        "round-trip",
                        format_ymd(year, month, day),
                        format_ymd(back.0, back.1, back.2),
                    ));
                }

                let wd = weekday_of(count);
                if wd != (prev_wd + 1) % 7 {
                    return Err(mismatch(ymd, "weekday", (prev_wd + 1) % 7, wd));
                }

                prev_count = count;
                prev_wd = wd;
                checked += 1;
            }
        }
    }
    debug!(first, last, checked, "chunk verified");
    Ok(checked)
}

fn mismatch(
    (year, month, day): (i32, u8, u8),
    check: &'static str,
    expected: impl ToString,
    actual: impl ToString,
) -> CalendarError {
    CalendarError::SweepMismatch {
        date: format_ymd(year, month, day),
        check,
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}
