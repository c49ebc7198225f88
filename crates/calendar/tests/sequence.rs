use daycount_calendar::{CivilDate, civil_sequence, days_in_year};

#[test]
fn full_leap_year_month_boundaries() {
    let start = CivilDate::new(2024, 1, 1).unwrap();
    let dates = civil_sequence(start, 366);
    assert_eq!(dates.len(), 366);

    // Index 30: Jan 31
    assert_eq!(dates[30], CivilDate::new(2024, 1, 31).unwrap());
    // Index 59: Feb 29
    assert_eq!(dates[59], CivilDate::new(2024, 2, 29).unwrap());
    // Index 60: Mar 1
    assert_eq!(dates[60], CivilDate::new(2024, 3, 1).unwrap());
    // Index 365: Dec 31
    assert_eq!(dates[365], CivilDate::new(2024, 12, 31).unwrap());
}

#[test]
fn century_years_skip_leap_day() {
    let start = CivilDate::new(1900, 2, 28).unwrap();
    let dates = civil_sequence(start, 2);
    assert_eq!(dates[1], CivilDate::new(1900, 3, 1).unwrap());

    let start = CivilDate::new(2000, 2, 28).unwrap();
    let dates = civil_sequence(start, 2);
    assert_eq!(dates[1], CivilDate::new(2000, 2, 29).unwrap());
}

#[test]
fn era_length_matches_day_counts() {
    let start = CivilDate::new(-400, 1, 1).unwrap();
    let total: usize = (-400..0).map(|y| usize::from(days_in_year(y))).sum();
    let dates = civil_sequence(start, total + 1);
    assert_eq!(*dates.last().unwrap(), CivilDate::new(0, 1, 1).unwrap());
    assert_eq!(
        dates.last().unwrap().day_count() - start.day_count(),
        146_097
    );
}

#[test]
fn length_always_matches() {
    let start = CivilDate::new(2000, 1, 1).unwrap();
    for n_days in [0, 1, 100, 366, 1000] {
        let dates = civil_sequence(start, n_days);
        assert_eq!(
            dates.len(),
            n_days,
            "expected length {n_days}, got {}",
            dates.len()
        );
    }
}
