//! # cc-arrangement
//!
//! Holiday decrees and their expansion into the classified date tables
//! served by the query engine.
//!
//! A decree describes one year's schedule tersely: which dates are rest
//! days of which holiday, which weekend days become make-up workdays, and
//! which days are granted in lieu. [`ArrangementBuilder`] expands decree
//! records into an [`Arrangement`] holding three date-keyed tables and the
//! supported date range.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The expanded tables.
pub mod arrangement;

/// Decree expansion.
pub mod builder;

/// Builder configuration.
pub mod config;

/// Bundled decrees.
pub mod data;

/// Decree records and the typed authoring chain.
pub mod decree;

/// The `Holiday` enumeration.
pub mod holiday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use arrangement::Arrangement;
pub use builder::ArrangementBuilder;
pub use config::{BuilderConfig, OverlapPolicy};
pub use data::{builtin_decrees, YEARLY_DECREES};
pub use decree::{DayKind, DecreeBook, DecreeRecord, HolidayDecree, MarkedDecree, YearDecree};
pub use holiday::Holiday;
