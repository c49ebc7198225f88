//! Leap-year and month-length rules of the proleptic Gregorian calendar.

/// Returns `true` if `year` is a leap year.
///
/// Every fourth year is a leap year, except centuries not divisible by 400.
/// The rule is applied to all years, including zero and negative ones
/// (year 0 is a leap year).
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the last day (28..=31) of `month` in `year`.
///
/// `month` is expected to be in 1..=12. Any other value yields 31.
pub fn last_day_of_month(year: i32, month: u8) -> u8 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Returns the number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}
