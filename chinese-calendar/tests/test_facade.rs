//! End-to-end use of the free-function surface.

use chinese_calendar::{
    holiday_detail, holidays, is_holiday, is_in_lieu, is_workday, workdays, Date, Error, Holiday,
    RestDay,
};
use chrono::{FixedOffset, TimeZone, Utc};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn published_2022_scenarios() {
    assert!(!is_holiday(date(2022, 2, 25)));
    assert!(is_workday(date(2022, 2, 25)));
    assert!(is_holiday(date(2022, 2, 26)));
    assert!(!is_workday(date(2022, 2, 26)));
    assert_eq!(holiday_detail(date(2022, 1, 1)), Some(RestDay::Named(Holiday::NewYearsDay)));
    assert!(is_in_lieu(date(2022, 2, 3)));
}

#[test]
fn unsupported_year() {
    let d = date(2001, 1, 5);
    assert!(!is_workday(d));
    assert!(!is_holiday(d));
    assert!(!is_in_lieu(d));
    assert!(matches!(workdays(d, d), Err(Error::UnsupportedDate { .. })));
}

#[test]
fn timestamps_are_normalized_to_the_reference_day() {
    // 2022-09-30 16:30 UTC is 2022-10-01 00:30 in Beijing
    let utc = Utc.with_ymd_and_hms(2022, 9, 30, 16, 30, 0).unwrap();
    let d = Date::from_datetime(&utc).unwrap();
    assert_eq!(d, date(2022, 10, 1));
    assert_eq!(holiday_detail(d), Some(RestDay::Named(Holiday::NationalDay)));

    let late = FixedOffset::east_opt(8 * 3600)
        .unwrap()
        .with_ymd_and_hms(2022, 10, 1, 23, 59, 59)
        .unwrap();
    assert_eq!(Date::from_datetime(&late).unwrap(), d);
}

#[test]
fn labour_day_2022_lists() {
    let start = date(2022, 4, 24);
    let end = date(2022, 5, 7);
    assert_eq!(
        holidays(start, end, false).unwrap(),
        date(2022, 4, 30).iter_to(date(2022, 5, 4)).collect::<Vec<_>>()
    );
    let worked = workdays(start, end).unwrap();
    assert_eq!(worked.first(), Some(&date(2022, 4, 24)));
    assert_eq!(worked.last(), Some(&date(2022, 5, 7)));
    assert_eq!(worked.len(), 9);
}
