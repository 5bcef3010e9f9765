//! Error types for chinese-calendar.
//!
//! A single `thiserror`-derived enum covers both error tiers: the
//! construction-time failures raised while expanding holiday decrees, and
//! the query-time "unsupported date" condition surfaced by range queries.

use thiserror::Error;

/// The top-level error type used throughout chinese-calendar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Postcondition violated (see [`ensure_post!`](crate::ensure_post)).
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),

    /// A date could not be constructed, parsed or converted.
    #[error("date error: {0}")]
    Date(String),

    /// A query date lies outside the years covered by the holiday tables.
    ///
    /// `min` and `max` are the table boundaries formatted as `YYYY-MM-DD`.
    #[error("unsupported date, supported date range is {min} - {max}")]
    UnsupportedDate {
        /// Earliest date present in the tables.
        min: String,
        /// Latest date present in the tables.
        max: String,
    },
}

/// Shorthand `Result` type used throughout chinese-calendar.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cc_core::{ensure, errors::Error};
/// fn month(m: u8) -> cc_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range");
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Postcondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cc_core::{ensure_post, errors::Error};
/// fn non_empty(v: Vec<u8>) -> cc_core::errors::Result<Vec<u8>> {
///     ensure_post!(!v.is_empty(), "result must not be empty");
///     Ok(v)
/// }
/// assert!(non_empty(vec![1]).is_ok());
/// assert!(non_empty(vec![]).is_err());
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(
                format!($($msg)*)
            ));
        }
    };
}
