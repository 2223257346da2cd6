use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Working-day policy for a schedule: which weekdays count as working days,
/// ad-hoc holiday dates excluded even on working weekdays, and the daily
/// shift window used for exported timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkCalendar {
    working_weekdays: HashSet<Weekday>,
    holidays: HashSet<NaiveDate>,
    shift_start: NaiveTime,
    shift_end: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The working-weekday set is empty, so no working-day count can ever be
    /// satisfied.
    NoWorkingDays,
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::NoWorkingDays => {
                write!(f, "calendar has no working weekdays configured")
            }
        }
    }
}

impl std::error::Error for CalendarError {}

impl Default for WorkCalendar {
    /// Six-day week (Mon-Sat), no holidays, 08:00-20:00 shift.
    fn default() -> Self {
        Self::custom(
            [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
            ],
            [],
        )
    }
}

impl WorkCalendar {
    const ALL_WEEKDAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn custom<I, J>(working_weekdays: I, holidays: J) -> Self
    where
        I: IntoIterator<Item = Weekday>,
        J: IntoIterator<Item = NaiveDate>,
    {
        Self {
            working_weekdays: working_weekdays.into_iter().collect(),
            holidays: holidays.into_iter().collect(),
            shift_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            shift_end: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        }
    }

    /// Replace the working weekdays with the given set.
    pub fn set_working_weekdays(&mut self, days: &[Weekday]) {
        self.working_weekdays.clear();
        for day in Self::ALL_WEEKDAYS {
            if days.contains(&day) {
                self.working_weekdays.insert(day);
            }
        }
    }

    pub fn add_holiday(&mut self, date: NaiveDate) {
        self.holidays.insert(date);
    }

    pub fn add_holidays(&mut self, dates: &[NaiveDate]) {
        self.holidays.extend(dates);
    }

    pub fn remove_holiday(&mut self, date: NaiveDate) -> bool {
        self.holidays.remove(&date)
    }

    pub fn set_shift(&mut self, start: NaiveTime, end: NaiveTime) {
        self.shift_start = start;
        self.shift_end = end;
    }

    pub fn shift_start(&self) -> NaiveTime {
        self.shift_start
    }

    pub fn shift_end(&self) -> NaiveTime {
        self.shift_end
    }

    pub fn has_working_weekdays(&self) -> bool {
        !self.working_weekdays.is_empty()
    }

    /// A date counts as a working day iff its weekday is in the working set
    /// and the date is not listed as a holiday.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        self.working_weekdays.contains(&date.weekday()) && !self.holidays.contains(&date)
    }

    /// Date on which the `working_days`-th working day after `from` is
    /// reached. The loop advances one calendar day before checking, so a
    /// count of zero still lands on the day after `from`; downstream
    /// schedule semantics depend on that and it is kept as-is. Fractional
    /// counts terminate once the tally reaches the requested amount, i.e.
    /// they consume a whole final day. Negative or non-finite counts clamp
    /// to zero.
    pub fn advance(&self, from: NaiveDate, working_days: f64) -> Result<NaiveDate, CalendarError> {
        if !self.has_working_weekdays() {
            return Err(CalendarError::NoWorkingDays);
        }

        let target = if working_days.is_finite() {
            working_days.max(0.0)
        } else {
            0.0
        };

        let mut current = from;
        let mut counted = 0.0;
        loop {
            current = current + Duration::days(1);
            if self.is_working_day(current) {
                counted += 1.0;
            }
            if counted >= target {
                return Ok(current);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn default_calendar_works_saturdays_not_sundays() {
        let cal = WorkCalendar::default();
        assert!(cal.is_working_day(d(2025, 1, 4))); // Saturday
        assert!(!cal.is_working_day(d(2025, 1, 5))); // Sunday
    }

    #[test]
    fn holidays_override_working_weekdays() {
        let mut cal = WorkCalendar::default();
        cal.add_holiday(d(2025, 1, 2));
        assert!(!cal.is_working_day(d(2025, 1, 2)));
        assert!(cal.remove_holiday(d(2025, 1, 2)));
        assert!(cal.is_working_day(d(2025, 1, 2)));
    }

    #[test]
    fn advance_with_empty_working_set_errors() {
        let cal = WorkCalendar::custom([], []);
        assert_eq!(
            cal.advance(d(2025, 1, 1), 3.0),
            Err(CalendarError::NoWorkingDays)
        );
    }
}
