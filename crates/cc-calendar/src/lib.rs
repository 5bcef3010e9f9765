//! # cc-calendar
//!
//! The query engine: is a given day a workday, a day off, or an in-lieu
//! day, and which days in a span are days off or workdays.
//!
//! ```
//! use cc_calendar::{ChineseCalendar, RestDay};
//! use cc_arrangement::Holiday;
//! use cc_time::Date;
//!
//! let cal = ChineseCalendar::builtin();
//! let national_day = Date::from_ymd(2022, 10, 1).unwrap();
//! assert!(cal.is_holiday(national_day));
//! assert_eq!(cal.holiday_detail(national_day), Some(RestDay::Named(Holiday::NationalDay)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and the weekend-only rule.
pub mod calendar;

/// Mainland China statutory holiday calendar.
pub mod chinese;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, WeekendsOnly};
pub use chinese::{ChineseCalendar, RestDay};
