//! Conversion commands: `to-days`, `from-days`, `info` and `today`.

use anyhow::{Result, bail};
use tracing::{debug, info_span};

use daycount_calendar::{CivilDate, MAX_DAY_COUNT, MIN_DAY_COUNT, today};

use crate::cli::{DateArgs, FromDaysArgs};

/// Print the day count of a date.
pub fn run_to_days(args: DateArgs) -> Result<()> {
    let _cmd = info_span!("to-days", date = %args.date).entered();
    println!("{}", args.date.day_count());
    Ok(())
}

/// Print the date of a day count.
pub fn run_from_days(args: FromDaysArgs) -> Result<()> {
    let _cmd = info_span!("from-days", count = args.count).entered();
    if !(MIN_DAY_COUNT..=MAX_DAY_COUNT).contains(&args.count) {
        bail!("day count {} is outside the supported year range", args.count);
    }
    let date = CivilDate::from_day_count(args.count);
    debug!(%date, "converted");
    println!("{date}");
    Ok(())
}

/// Print day count, weekday and calendar facts of a date.
pub fn run_info(args: DateArgs) -> Result<()> {
    let _cmd = info_span!("info", date = %args.date).entered();
    print!("{}", describe(args.date));
    Ok(())
}

/// Print the current local date and its day count.
pub fn run_today() -> Result<()> {
    let _cmd = info_span!("today").entered();
    let date = today();
    println!("{date} {}", date.day_count());
    Ok(())
}

/// Multi-line summary of a date, one `key: value` pair per line.
pub fn describe(date: CivilDate) -> String {
    let weekday = date.weekday();
    format!(
        "date: {date}\n\
         day_count: {}\n\
         weekday: {weekday} ({})\n\
         leap_year: {}\n\
         last_day_of_month: {}\n",
        date.day_count(),
        weekday.index(),
        date.is_leap_year(),
        date.last_day_of_month(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_epoch() {
        assert_eq!(
            describe(CivilDate::EPOCH),
            "date: 1970-01-01\n\
             day_count: 0\n\
             weekday: Thursday (4)\n\
             leap_year: false\n\
             last_day_of_month: 31\n"
        );
    }

    #[test]
    fn describe_leap_day() {
        let text = describe(CivilDate::new(2024, 2, 29).unwrap());
        assert!(text.contains("day_count: 19782\n"));
        assert!(text.contains("weekday: Thursday (4)\n"));
        assert!(text.contains("leap_year: true\n"));
        assert!(text.contains("last_day_of_month: 29\n"));
    }

    #[test]
    fn from_days_accepts_range_ends() {
        assert!(run_from_days(FromDaysArgs { count: -719_468 }).is_ok());
        assert!(run_from_days(FromDaysArgs { count: MIN_DAY_COUNT }).is_ok());
        assert!(run_from_days(FromDaysArgs { count: MAX_DAY_COUNT }).is_ok());
    }

    #[test]
    fn from_days_out_of_range_is_error() {
        let err = run_from_days(FromDaysArgs { count: i64::MAX }).unwrap_err();
        assert!(err.to_string().contains("outside the supported year range"));
        assert!(run_from_days(FromDaysArgs { count: MIN_DAY_COUNT - 1 }).is_err());
    }
}
