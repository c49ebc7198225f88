//! Civil date <-> day-count conversion.
//!
//! Both directions work on a pseudo-year starting on March 1, so the leap day
//! falls at the end of the year, and on 400-year eras of exactly
//! [`DAYS_PER_ERA`] days. Within an era every quantity is non-negative and
//! truncating division equals floor division. The era index is the only
//! place a negative operand can occur, and it is floored explicitly.

/// Number of days in one 400-year Gregorian cycle.
pub const DAYS_PER_ERA: i64 = 146_097;

/// Days from 0000-03-01 (start of era 0) to 1970-01-01.
pub const EPOCH_SHIFT: i64 = 719_468;

/// Day count of `i32::MIN`-01-01, the earliest representable date.
pub const MIN_DAY_COUNT: i64 = days_from_civil(i32::MIN, 1, 1);

/// Day count of `i32::MAX`-12-31, the latest representable date.
pub const MAX_DAY_COUNT: i64 = days_from_civil(i32::MAX, 12, 31);

/// Converts a civil date to the number of days since 1970-01-01.
///
/// The inputs are not validated: `month` should be in 1..=12 and `day` in
/// `1..=last_day_of_month(year, month)`. Out-of-range days are extrapolated
/// linearly within the month arithmetic. Use [`CivilDate::new`] for a
/// checked conversion.
///
/// [`CivilDate::new`]: crate::CivilDate::new
pub const fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    // January and February belong to the previous pseudo-year.
    let y = year as i64 - (month <= 2) as i64;
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400; // [0, 399]
    let mp = if month > 2 {
        month as i64 - 3
    } else {
        month as i64 + 9
    }; // March = 0 .. February = 11
    let doy = (153 * mp + 2) / 5 + day as i64 - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * DAYS_PER_ERA + doe - EPOCH_SHIFT
}

/// Converts a day count since 1970-01-01 to a `(year, month, day)` triple.
///
/// Always returns a valid date. Counts outside
/// [`MIN_DAY_COUNT`]`..=`[`MAX_DAY_COUNT`] have no `i32` year and are
/// saturated to the nearest end of that range.
pub fn civil_from_days(count: i64) -> (i32, u8, u8) {
    let z = count.clamp(MIN_DAY_COUNT, MAX_DAY_COUNT) + EPOCH_SHIFT;
    let era = if z >= 0 { z } else { z - (DAYS_PER_ERA - 1) } / DAYS_PER_ERA;
    let doe = z - era * DAYS_PER_ERA; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365; // [0, 399]
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let d = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let m = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    let y = if m <= 2 { y + 1 } else { y };
    // The clamp above keeps `y` inside the i32 range.
    (y as i32, m as u8, d as u8)
}

/// Like [`civil_from_days`], but returns `None` instead of saturating when
/// the count has no `i32` year.
pub fn checked_civil_from_days(count: i64) -> Option<(i32, u8, u8)> {
    if (MIN_DAY_COUNT..=MAX_DAY_COUNT).contains(&count) {
        Some(civil_from_days(count))
    } else {
        None
    }
}
