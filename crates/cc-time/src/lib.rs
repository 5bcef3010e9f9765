//! # cc-time
//!
//! Calendar-day and day-of-week types. A [`Date`] has no time-of-day
//! component, so every table key and every query argument is normalized
//! by construction.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `Weekday` type.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{Date, DateIter, REFERENCE_OFFSET_SECS};
pub use weekday::Weekday;
