//! # chinese-calendar
//!
//! Workday, holiday and in-lieu day classification for the statutory
//! public holiday schedule of mainland China, 2004–2023.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates and offers the common queries as free
//! functions against the bundled calendar.
//!
//! ## Quick start
//!
//! ```rust
//! use chinese_calendar::{holiday_detail, is_in_lieu, is_workday, Date, Holiday, RestDay};
//!
//! let d = Date::from_ymd(2022, 2, 3).unwrap();
//! assert!(!is_workday(d));
//! assert!(is_in_lieu(d));
//! assert_eq!(holiday_detail(d), Some(RestDay::Named(Holiday::SpringFestival)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions.
pub use cc_core as core;

/// Date and weekday types.
pub use cc_time as time;

/// Holidays, decrees and their expansion.
pub use cc_arrangement as arrangement;

/// The query engine.
pub use cc_calendar as calendar;

pub use cc_arrangement::{Arrangement, ArrangementBuilder, BuilderConfig, DecreeBook, Holiday};
pub use cc_calendar::{Calendar, ChineseCalendar, RestDay};
pub use cc_core::{Error, Result};
pub use cc_time::{Date, Weekday};

/// Return `true` if `date` is a working day. See [`ChineseCalendar::is_workday`].
pub fn is_workday(date: Date) -> bool {
    ChineseCalendar::builtin().is_workday(date)
}

/// Return `true` if `date` is a day off. See [`ChineseCalendar::is_holiday`].
pub fn is_holiday(date: Date) -> bool {
    ChineseCalendar::builtin().is_holiday(date)
}

/// Return `true` if `date` is an in-lieu day. See [`ChineseCalendar::is_in_lieu`].
pub fn is_in_lieu(date: Date) -> bool {
    ChineseCalendar::builtin().is_in_lieu(date)
}

/// Describe why `date` is a day off. See [`ChineseCalendar::holiday_detail`].
pub fn holiday_detail(date: Date) -> Option<RestDay> {
    ChineseCalendar::builtin().holiday_detail(date)
}

/// Days off in `[start, end]`. See [`ChineseCalendar::holidays`].
pub fn holidays(start: Date, end: Date, include_weekends: bool) -> Result<Vec<Date>> {
    ChineseCalendar::builtin().holidays(start, end, include_weekends)
}

/// Working days in `[start, end]`. See [`ChineseCalendar::workdays`].
pub fn workdays(start: Date, end: Date) -> Result<Vec<Date>> {
    ChineseCalendar::builtin().workdays(start, end)
}
