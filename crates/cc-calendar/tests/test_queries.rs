//! Queries against the bundled calendar, using the published 2022 schedule.

use cc_arrangement::Holiday;
use cc_calendar::{Calendar, ChineseCalendar, RestDay, WeekendsOnly};
use cc_core::Error;
use cc_time::Date;
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn cal() -> &'static ChineseCalendar {
    ChineseCalendar::builtin()
}

// ─── Point queries ────────────────────────────────────────────────────────────

#[test]
fn ordinary_friday() {
    let d = date(2022, 2, 25);
    assert!(!cal().is_holiday(d));
    assert!(cal().is_workday(d));
}

#[test]
fn ordinary_saturday() {
    let d = date(2022, 2, 26);
    assert!(cal().is_holiday(d));
    assert!(!cal().is_workday(d));
    assert_eq!(cal().holiday_detail(d), Some(RestDay::Weekend));
    assert_eq!(cal().holiday_detail(d).and_then(|r| r.holiday()), None);
}

#[test]
fn new_years_day_detail() {
    assert_eq!(
        cal().holiday_detail(date(2022, 1, 1)),
        Some(RestDay::Named(Holiday::NewYearsDay))
    );
}

#[test]
fn spring_festival_in_lieu() {
    let d = date(2022, 2, 3);
    assert!(cal().is_in_lieu(d));
    assert!(cal().is_holiday(d));
    assert_eq!(cal().in_lieu_detail(d), Some(Holiday::SpringFestival));
}

#[test]
fn make_up_workday_on_weekend() {
    // Saturday 2022-01-29 was worked for the Spring Festival break
    let d = date(2022, 1, 29);
    assert!(d.is_weekend());
    assert!(cal().is_workday(d));
    assert!(!cal().is_holiday(d));
    assert_eq!(cal().holiday_detail(d), None);
}

#[test]
fn ordinary_weekday_detail() {
    assert_eq!(cal().holiday_detail(date(2022, 2, 25)), None);
}

#[test]
fn before_supported_range() {
    let d = date(2001, 1, 5);
    assert!(!cal().is_workday(d));
    assert!(!cal().is_holiday(d));
    assert!(!cal().is_in_lieu(d));
    assert_eq!(cal().holiday_detail(d), None);
}

#[test]
fn after_supported_range() {
    let d = date(2024, 10, 1);
    assert!(!cal().is_workday(d));
    assert!(!cal().is_holiday(d));
    assert_eq!(cal().holiday_detail(d), None);
}

#[test]
fn last_boundary_year_after_max_date() {
    // 2023-10-08 is the latest table entry; the rest of 2023 is still
    // answered by the weekday rule.
    assert_eq!(cal().supported_range().1, date(2023, 10, 8));
    assert!(cal().is_workday(date(2023, 12, 29))); // Friday
    assert!(cal().is_holiday(date(2023, 12, 30))); // Saturday
    assert_eq!(cal().holiday_detail(date(2023, 12, 31)), Some(RestDay::Weekend));
    assert_eq!(cal().validate_range(date(2023, 12, 31)), Some(date(2023, 12, 31)));
}

// ─── Range queries ────────────────────────────────────────────────────────────

#[test]
fn national_day_week_2022() {
    let start = date(2022, 9, 30);
    let end = date(2022, 10, 10);
    let expected: Vec<Date> = date(2022, 10, 1).iter_to(date(2022, 10, 7)).collect();
    assert_eq!(cal().holidays(start, end, false).unwrap(), expected);
    assert_eq!(cal().holidays(start, end, true).unwrap(), expected);
    assert_eq!(
        cal().workdays(start, end).unwrap(),
        vec![date(2022, 9, 30), date(2022, 10, 8), date(2022, 10, 9), date(2022, 10, 10)]
    );
}

#[test]
fn weekends_only_with_flag() {
    // A plain February week: Sat 26 and Sun 27 are days off, none named
    let start = date(2022, 2, 21);
    let end = date(2022, 2, 27);
    assert_eq!(
        cal().holidays(start, end, true).unwrap(),
        vec![date(2022, 2, 26), date(2022, 2, 27)]
    );
    assert!(cal().holidays(start, end, false).unwrap().is_empty());
    assert_eq!(cal().workdays(start, end).unwrap().len(), 5);
}

#[test]
fn single_day_range_is_inclusive() {
    let d = date(2022, 10, 3);
    assert_eq!(cal().holidays(d, d, true).unwrap(), vec![d]);
    assert_eq!(cal().holidays(d, d, false).unwrap(), vec![d]);
    assert!(cal().workdays(d, d).unwrap().is_empty());
}

#[test]
fn range_errors_name_the_supported_range() {
    let err = cal().holidays(date(2003, 12, 1), date(2004, 1, 31), true).unwrap_err();
    assert_eq!(
        err,
        Error::UnsupportedDate {
            min: "2004-01-01".into(),
            max: "2023-10-08".into()
        }
    );
    assert_eq!(
        err.to_string(),
        "unsupported date, supported date range is 2004-01-01 - 2023-10-08"
    );
    assert!(cal().workdays(date(2023, 1, 1), date(2024, 1, 1)).is_err());
}

#[test]
fn whole_year_2022_partitions() {
    let start = date(2022, 1, 1);
    let end = date(2022, 12, 31);
    let off = cal().holidays(start, end, true).unwrap();
    let on = cal().workdays(start, end).unwrap();
    assert_eq!(off.len() + on.len(), 365);
    assert_eq!(on.len(), 249);
}

#[test]
fn calendar_trait_object() {
    let calendars: Vec<Box<dyn Calendar>> = vec![Box::new(cal().clone()), Box::new(WeekendsOnly)];
    let may_day = date(2022, 5, 2); // Monday
    assert!(calendars[0].is_holiday(may_day));
    assert!(!calendars[1].is_holiday(may_day));
}

// ─── Properties ───────────────────────────────────────────────────────────────

fn any_date(years: std::ops::RangeInclusive<u16>) -> impl Strategy<Value = Date> {
    (years, 1u8..=12, 1u8..=28).prop_map(|(y, m, d)| date(y, m, d))
}

proptest! {
    #[test]
    fn workday_and_holiday_are_complementary(d in any_date(2004..=2023)) {
        prop_assert_ne!(cal().is_workday(d), cal().is_holiday(d));
    }

    #[test]
    fn unsupported_years_default_to_false(
        d in prop_oneof![any_date(1950..=2003), any_date(2024..=2150)]
    ) {
        prop_assert!(!cal().is_workday(d));
        prop_assert!(!cal().is_holiday(d));
        prop_assert!(!cal().is_in_lieu(d));
        prop_assert_eq!(cal().holiday_detail(d), None);
    }

    #[test]
    fn overrides_win(d in any_date(2004..=2023)) {
        let arrangement = cal().arrangement();
        if arrangement.workday(d).is_some() {
            prop_assert!(cal().is_workday(d));
        } else if let Some(holiday) = arrangement.holiday(d) {
            prop_assert_eq!(cal().holiday_detail(d), Some(RestDay::Named(holiday)));
        } else if arrangement.in_lieu(d).is_none() {
            prop_assert_eq!(cal().is_holiday(d), d.is_weekend());
        }
    }
}
