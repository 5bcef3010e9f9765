//! Mainland China statutory holiday calendar.
//!
//! Answers point and range queries against an [`Arrangement`]. Dates whose
//! year lies outside the years covered by the tables are "unsupported":
//! point queries answer `false` / `None` for them, range queries fail with
//! [`Error::UnsupportedDate`].

use std::sync::{Arc, LazyLock};

use cc_arrangement::{Arrangement, Holiday};
use cc_core::errors::{Error, Result};
use cc_time::Date;
use tracing::debug;

use crate::calendar::{Calendar, WeekendsOnly};

/// Why a date is a day off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestDay {
    /// Statutory rest day of a named holiday.
    Named(Holiday),
    /// Ordinary Saturday or Sunday.
    Weekend,
}

impl RestDay {
    /// The named holiday, if any.
    pub fn holiday(&self) -> Option<Holiday> {
        match self {
            RestDay::Named(holiday) => Some(*holiday),
            RestDay::Weekend => None,
        }
    }
}

/// Holiday calendar backed by expanded decree tables.
///
/// Cloning is cheap; clones share the same tables.
#[derive(Debug, Clone)]
pub struct ChineseCalendar {
    arrangement: Arc<Arrangement>,
}

static BUILTIN: LazyLock<ChineseCalendar> = LazyLock::new(|| {
    let arrangement = Arrangement::builtin()
        .unwrap_or_else(|err| panic!("bundled holiday decrees are invalid: {err}"));
    ChineseCalendar::new(Arc::new(arrangement))
});

impl ChineseCalendar {
    /// Serve queries from `arrangement`.
    pub fn new(arrangement: Arc<Arrangement>) -> Self {
        Self { arrangement }
    }

    /// The calendar for the bundled 2004–2023 decrees, built on first use.
    ///
    /// # Panics
    /// Panics on first use if the bundled decrees fail to expand.
    pub fn builtin() -> &'static ChineseCalendar {
        &BUILTIN
    }

    /// The underlying tables.
    pub fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }

    /// Earliest and latest date present in the tables.
    pub fn supported_range(&self) -> (Date, Date) {
        (self.arrangement.min_date(), self.arrangement.max_date())
    }

    /// The error range queries return for unsupported dates.
    pub fn unsupported_date_error(&self) -> Error {
        Error::UnsupportedDate {
            min: self.arrangement.min_date().to_string(),
            max: self.arrangement.max_date().to_string(),
        }
    }

    /// Return `Some(date)` if its year is covered by the tables.
    ///
    /// Only the year is compared: a date in the first or last covered year
    /// is supported even if it precedes the earliest or follows the latest
    /// table entry, and is then classified by the weekday rule.
    pub fn validate_range(&self, date: Date) -> Option<Date> {
        let years = self.arrangement.min_date().year()..=self.arrangement.max_date().year();
        years.contains(&date.year()).then_some(date)
    }

    /// Return `true` if `date` is a working day.
    ///
    /// A make-up workday is always a working day and a statutory rest day
    /// never is; any other date is a working day from Monday to Friday.
    /// Unsupported dates are never working days.
    pub fn is_workday(&self, date: Date) -> bool {
        self.validate_range(date)
            .is_some_and(|date| self.classify_workday(date))
    }

    /// Return `true` if `date` is a day off (statutory rest day or
    /// ordinary weekend). Within the supported range this is exactly the
    /// negation of [`is_workday`](Self::is_workday); unsupported dates are
    /// never days off either.
    pub fn is_holiday(&self, date: Date) -> bool {
        self.validate_range(date)
            .is_some_and(|date| !self.classify_workday(date))
    }

    /// Return `true` if `date` is an in-lieu day.
    pub fn is_in_lieu(&self, date: Date) -> bool {
        self.in_lieu_detail(date).is_some()
    }

    /// The holiday `date` is granted in lieu of, if it is an in-lieu day.
    pub fn in_lieu_detail(&self, date: Date) -> Option<Holiday> {
        self.validate_range(date)
            .and_then(|date| self.arrangement.in_lieu(date))
    }

    /// Describe why `date` is a day off.
    ///
    /// Returns `None` for working days (including make-up workdays that
    /// fall on a weekend) and for unsupported dates.
    pub fn holiday_detail(&self, date: Date) -> Option<RestDay> {
        let date = self.validate_range(date)?;
        if self.arrangement.workday(date).is_some() {
            return None;
        }
        if let Some(holiday) = self.arrangement.holiday(date) {
            return Some(RestDay::Named(holiday));
        }
        date.is_weekend().then_some(RestDay::Weekend)
    }

    /// Days off between `start` and `end`, both inclusive, ascending.
    ///
    /// With `include_weekends` every day for which
    /// [`is_holiday`](Self::is_holiday) holds is listed; without it only
    /// statutory rest days of named holidays are.
    ///
    /// # Errors
    /// [`Error::UnsupportedDate`] if either bound is unsupported.
    pub fn holidays(&self, start: Date, end: Date, include_weekends: bool) -> Result<Vec<Date>> {
        let (start, end) = self.validate_bounds(start, end)?;
        let days = start.iter_to(end);
        Ok(if include_weekends {
            days.filter(|d| !self.classify_workday(*d)).collect()
        } else {
            days.filter(|d| self.arrangement.holiday(*d).is_some())
                .collect()
        })
    }

    /// Working days between `start` and `end`, both inclusive, ascending.
    ///
    /// # Errors
    /// [`Error::UnsupportedDate`] if either bound is unsupported.
    pub fn workdays(&self, start: Date, end: Date) -> Result<Vec<Date>> {
        let (start, end) = self.validate_bounds(start, end)?;
        Ok(start
            .iter_to(end)
            .filter(|d| self.classify_workday(*d))
            .collect())
    }

    fn validate_bounds(&self, start: Date, end: Date) -> Result<(Date, Date)> {
        match (self.validate_range(start), self.validate_range(end)) {
            (Some(start), Some(end)) => Ok((start, end)),
            _ => {
                debug!(%start, %end, "range query outside the supported years");
                Err(self.unsupported_date_error())
            }
        }
    }

    /// Workday rule for a date already known to be supported.
    fn classify_workday(&self, date: Date) -> bool {
        if self.arrangement.workday(date).is_some() {
            return true;
        }
        if self.arrangement.holiday(date).is_some() {
            return false;
        }
        WeekendsOnly.is_business_day(date)
    }
}

impl Calendar for ChineseCalendar {
    fn name(&self) -> &str {
        "China (statutory holidays)"
    }

    fn is_business_day(&self, date: Date) -> bool {
        self.is_workday(date)
    }

    fn is_holiday(&self, date: Date) -> bool {
        ChineseCalendar::is_holiday(self, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cc_arrangement::{ArrangementBuilder, DecreeBook};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    /// Tiny 2022-only calendar: Tomb-sweeping Day 2022.
    fn calendar() -> ChineseCalendar {
        let book = DecreeBook::new()
            .year(2022)
            .mark(Holiday::TombSweepingDay)
            .rest(4, 3)
            .to(4, 5)
            .work(4, 2)
            .in_lieu(4, 4)
            .done();
        let arrangement = ArrangementBuilder::default().build(book.records()).unwrap();
        ChineseCalendar::new(Arc::new(arrangement))
    }

    #[test]
    fn override_workday_on_saturday() {
        let cal = calendar();
        let saturday = date(2022, 4, 2);
        assert!(saturday.is_weekend());
        assert!(cal.is_workday(saturday));
        assert!(!cal.is_holiday(saturday));
        assert_eq!(cal.holiday_detail(saturday), None);
    }

    #[test]
    fn named_holiday_on_weekday() {
        let cal = calendar();
        let monday = date(2022, 4, 4);
        assert!(!cal.is_workday(monday));
        assert!(cal.is_holiday(monday));
        assert!(cal.is_in_lieu(monday));
        assert_eq!(cal.in_lieu_detail(monday), Some(Holiday::TombSweepingDay));
        assert_eq!(
            cal.holiday_detail(monday),
            Some(RestDay::Named(Holiday::TombSweepingDay))
        );
    }

    #[test]
    fn boundary_year_uses_weekday_rule() {
        let cal = calendar();
        // Before the first table entry but in the same year
        let sunday = date(2022, 1, 2);
        let monday = date(2022, 1, 3);
        assert_eq!(cal.validate_range(sunday), Some(sunday));
        assert!(cal.is_holiday(sunday));
        assert_eq!(cal.holiday_detail(sunday), Some(RestDay::Weekend));
        assert!(cal.is_workday(monday));
        // After the last table entry but in the same year
        assert!(cal.is_workday(date(2022, 12, 30)));
        assert!(cal.workdays(date(2022, 12, 26), date(2022, 12, 31)).is_ok());
    }

    #[test]
    fn unsupported_years() {
        let cal = calendar();
        let d = date(2021, 12, 31);
        assert_eq!(cal.validate_range(d), None);
        assert!(!cal.is_workday(d));
        assert!(!cal.is_holiday(d));
        assert!(!cal.is_in_lieu(d));
        assert_eq!(cal.holiday_detail(d), None);

        let err = cal.holidays(d, date(2022, 1, 5), true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported date, supported date range is 2022-04-02 - 2022-04-05"
        );
        assert_eq!(
            cal.workdays(date(2022, 1, 5), date(2023, 1, 1)),
            Err(cal.unsupported_date_error())
        );
    }

    #[test]
    fn range_queries() {
        let cal = calendar();
        let start = date(2022, 4, 1);
        let end = date(2022, 4, 6);
        assert_eq!(
            cal.holidays(start, end, true).unwrap(),
            vec![date(2022, 4, 3), date(2022, 4, 4), date(2022, 4, 5)]
        );
        assert_eq!(
            cal.holidays(start, end, false).unwrap(),
            vec![date(2022, 4, 3), date(2022, 4, 4), date(2022, 4, 5)]
        );
        assert_eq!(
            cal.workdays(start, end).unwrap(),
            vec![date(2022, 4, 1), date(2022, 4, 2), date(2022, 4, 6)]
        );
        assert!(cal.workdays(end, start).unwrap().is_empty());
    }

    #[test]
    fn calendar_trait_matches_queries() {
        let cal = calendar();
        let dyn_cal: &dyn Calendar = &cal;
        for d in date(2022, 3, 28).iter_to(date(2022, 4, 10)) {
            assert_eq!(dyn_cal.is_business_day(d), cal.is_workday(d), "{d}");
            assert_eq!(dyn_cal.is_holiday(d), cal.is_holiday(d), "{d}");
        }
        assert!(!dyn_cal.is_holiday(date(2001, 1, 6)));
        // Mon 4/4 and Tue 4/5 off, Sat 4/2 worked
        assert_eq!(dyn_cal.business_days_between(date(2022, 4, 1), date(2022, 4, 8)), 4);
    }
}
