//! Date sequence generation.

use crate::date::CivilDate;

/// Generates a contiguous sequence of dates.
///
/// Starting from `start`, produces `n_days` consecutive dates by repeatedly
/// advancing to the next day. Month, year and leap-day boundaries are handled
/// by [`CivilDate::checked_next`]. The sequence ends early, without repeating
/// a date, if it reaches `i32::MAX`-12-31.
pub fn civil_sequence(start: CivilDate, n_days: usize) -> Vec<CivilDate> {
    let mut dates = Vec::with_capacity(n_days);
    if n_days == 0 {
        return dates;
    }
    dates.push(start);
    let mut current = start;
    for _ in 1..n_days {
        let Some(next) = current.checked_next() else {
            break;
        };
        current = next;
        dates.push(current);
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let start = CivilDate::new(2000, 1, 1).unwrap();
        assert!(civil_sequence(start, 0).is_empty());
    }

    #[test]
    fn single() {
        let start = CivilDate::new(2000, 6, 15).unwrap();
        assert_eq!(civil_sequence(start, 1), vec![start]);
    }

    #[test]
    fn leap_year_length() {
        let start = CivilDate::new(2000, 1, 1).unwrap();
        let dates = civil_sequence(start, 367);
        assert_eq!(dates[365], CivilDate::new(2000, 12, 31).unwrap());
        assert_eq!(dates[366], CivilDate::new(2001, 1, 1).unwrap());
    }

    #[test]
    fn day_counts_are_consecutive() {
        let start = CivilDate::new(-2, 12, 1).unwrap();
        let dates = civil_sequence(start, 1000);
        for pair in dates.windows(2) {
            assert_eq!(
                pair[1].day_count(),
                pair[0].day_count() + 1,
                "gap between {} and {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn stops_at_last_representable_date() {
        let start = CivilDate::new(i32::MAX, 12, 30).unwrap();
        let dates = civil_sequence(start, 5);
        assert_eq!(
            dates,
            vec![start, CivilDate::new(i32::MAX, 12, 31).unwrap()]
        );
    }

    #[test]
    fn year_transition_through_zero() {
        let start = CivilDate::new(-1, 12, 30).unwrap();
        let dates = civil_sequence(start, 3);
        assert_eq!(dates[0], CivilDate::new(-1, 12, 30).unwrap());
        assert_eq!(dates[1], CivilDate::new(-1, 12, 31).unwrap());
        assert_eq!(dates[2], CivilDate::new(0, 1, 1).unwrap());
    }
}
