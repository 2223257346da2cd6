use chrono::{Duration, NaiveDate, Weekday};
use siteplan::calendar::{CalendarError, WorkCalendar};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn six_working_days_from_new_year_skip_sunday() {
    // Default calendar works Mon-Sat. 2025-01-01 is a Wednesday; six working
    // days later is Wednesday 2025-01-08, with Sunday 1/5 skipped.
    let cal = WorkCalendar::default();
    assert_eq!(cal.advance(d(2025, 1, 1), 6.0).unwrap(), d(2025, 1, 8));
}

#[test]
fn advance_skips_holidays_on_working_weekdays() {
    let mut cal = WorkCalendar::default();
    cal.add_holiday(d(2025, 1, 2));
    assert_eq!(cal.advance(d(2025, 1, 1), 1.0).unwrap(), d(2025, 1, 3));
}

#[test]
fn advance_zero_still_moves_one_calendar_day() {
    // The loop advances before checking, so a zero-day advance lands on the
    // next calendar day even when that day is not a working day.
    let cal = WorkCalendar::default();
    assert_eq!(cal.advance(d(2025, 1, 1), 0.0).unwrap(), d(2025, 1, 2));
    // Saturday -> Sunday, despite Sunday being non-working.
    assert_eq!(cal.advance(d(2025, 1, 4), 0.0).unwrap(), d(2025, 1, 5));
}

#[test]
fn advance_result_is_always_after_input() {
    let cal = WorkCalendar::default();
    for n in 0..10 {
        let from = d(2025, 1, 1) + Duration::days(n);
        let to = cal.advance(from, 0.0).unwrap();
        assert!(to >= from + Duration::days(1));
    }
}

#[test]
fn advance_counts_exactly_n_working_days() {
    let mut cal = WorkCalendar::custom(
        [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri],
        [d(2025, 1, 14)],
    );
    cal.add_holiday(d(2025, 1, 20));

    let from = d(2025, 1, 6);
    let n = 7;
    let to = cal.advance(from, n as f64).unwrap();

    let mut qualifying = 0;
    let mut cursor = from + Duration::days(1);
    while cursor <= to {
        if cal.is_working_day(cursor) {
            qualifying += 1;
        }
        cursor += Duration::days(1);
    }
    assert_eq!(qualifying, n);
    assert!(cal.is_working_day(to));
}

#[test]
fn fractional_duration_consumes_a_whole_final_day() {
    let cal = WorkCalendar::default();
    // 2.5 working days from Wednesday 1/1: Thu, Fri, and all of Saturday.
    assert_eq!(cal.advance(d(2025, 1, 1), 2.5).unwrap(), d(2025, 1, 4));
}

#[test]
fn negative_duration_clamps_to_zero() {
    let cal = WorkCalendar::default();
    assert_eq!(cal.advance(d(2025, 1, 1), -4.0).unwrap(), d(2025, 1, 2));
}

#[test]
fn empty_working_week_is_rejected_not_looped() {
    let cal = WorkCalendar::custom([], []);
    assert_eq!(
        cal.advance(d(2025, 1, 1), 5.0),
        Err(CalendarError::NoWorkingDays)
    );
}

#[test]
fn set_working_weekdays_replaces_the_set() {
    let mut cal = WorkCalendar::default();
    cal.set_working_weekdays(&[Weekday::Mon, Weekday::Tue]);
    assert!(cal.is_working_day(d(2025, 1, 6))); // Monday
    assert!(!cal.is_working_day(d(2025, 1, 8))); // Wednesday
}

#[test]
fn calendar_serde_round_trips() {
    let mut cal = WorkCalendar::custom(
        [Weekday::Mon, Weekday::Wed, Weekday::Sat],
        [d(2025, 3, 14), d(2025, 8, 15)],
    );
    cal.add_holiday(d(2025, 10, 2));

    let json = serde_json::to_string(&cal).unwrap();
    let back: WorkCalendar = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cal);
}
