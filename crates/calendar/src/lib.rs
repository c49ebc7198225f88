//! # daycount-calendar
//!
//! Proleptic Gregorian date arithmetic on a linear day count
//! (days since 1970-01-01).
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"days_from_civil()"| B["day count (i64)"]
//!     B -->|"civil_from_days()"| A
//!     B -->|"weekday_of()"| C["weekday 0..=6"]
//!     A -->|"CivilDate::new()"| D["CivilDate"]
//!     D -->|".next() / .prev()"| D
//!     D -->|"civil_sequence()"| E["Vec of CivilDate"]
//!     F["SweepConfig"] -->|"sweep()"| G["SweepReport"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use daycount_calendar::{CivilDate, civil_from_days, days_from_civil, weekday_of};
//!
//! assert_eq!(days_from_civil(1970, 1, 1), 0);
//! assert_eq!(civil_from_days(-1), (1969, 12, 31));
//! assert_eq!(weekday_of(0), 4); // Thursday
//!
//! let date: CivilDate = "2024-02-29".parse().unwrap();
//! assert_eq!(date.day_count(), 19_782);
//! assert_eq!(date.next().to_string(), "2024-03-01");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `civil` | Date <-> day-count conversion |
//! | `leap` | Leap-year and month-length rules |
//! | `weekday` | Day of the week |
//! | `date` | Validated date type |
//! | `sequence` | Date sequence generation |
//! | `sweep` | Parallel verification sweep |
//! | `local` | `chrono` bridge and current local date |
//! | `error` | Error types |

mod civil;
mod date;
mod error;
mod leap;
mod local;
mod sequence;
mod sweep;
mod weekday;

pub use civil::{
    DAYS_PER_ERA, EPOCH_SHIFT, MAX_DAY_COUNT, MIN_DAY_COUNT, checked_civil_from_days,
    civil_from_days, days_from_civil,
};
pub use date::CivilDate;
pub use error::CalendarError;
pub use leap::{days_in_year, is_leap_year, last_day_of_month};
pub use local::{from_naive_date, to_naive_date, today, today_day_count};
pub use sequence::civil_sequence;
pub use sweep::{SweepConfig, SweepReport, sweep};
pub use weekday::{Weekday, weekday_of};
