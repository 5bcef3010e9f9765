//! `Calendar` trait.
//!
//! A calendar knows which dates are business days. The default methods
//! describe an ordinary Saturday/Sunday week with no holidays; concrete
//! calendars override them from their own tables.

use cc_time::Date;

/// A working-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is a weekend according to this calendar.
    fn is_weekend(&self, date: Date) -> bool {
        date.is_weekend()
    }

    /// Count the business days between `d1` (exclusive) and `d2`
    /// (inclusive). Negative if `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        let (start, end, sign) = if d2 >= d1 { (d1, d2, 1) } else { (d2, d1, -1) };
        let count = start
            .iter_to(end)
            .skip(1)
            .filter(|d| self.is_business_day(*d))
            .count();
        sign * count as i32
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days.
///
/// The fallback rule of every calendar in this workspace.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}
