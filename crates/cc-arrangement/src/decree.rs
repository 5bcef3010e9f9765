//! Holiday decrees: the compact, per-year description of a schedule.
//!
//! A decree is recorded as a flat list of [`DecreeRecord`]s. Records are
//! usually authored through the typed chain rooted at [`DecreeBook`]:
//!
//! ```
//! use cc_arrangement::{DayKind, DecreeBook, Holiday};
//!
//! let book = DecreeBook::new()
//!     .year(2022)
//!     .mark(Holiday::NewYearsDay).rest(1, 1).to(1, 3)
//!     .mark(Holiday::SpringFestival).rest(1, 31).to(2, 6).work(1, 29).work(1, 30)
//!     .done();
//!
//! assert_eq!(book.records().len(), 4);
//! assert_eq!(book.records()[1].kind, DayKind::Rest);
//! assert_eq!(book.records()[1].end, Some((2, 6)));
//! ```
//!
//! Each state of the chain only offers the calls that are legal in it: a
//! holiday can only be marked once a year is selected, a date only once a
//! holiday is marked, and `to` only directly after a single-date call.

use crate::holiday::Holiday;

/// How a decree classifies a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayKind {
    /// Statutory rest day.
    Rest,
    /// Weekend day turned into a make-up workday.
    Work,
    /// Substitute rest day granted in lieu of a holiday.
    InLieu,
}

/// One classified date, or inclusive span of dates, within a single year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecreeRecord {
    /// Year the month/day pairs refer to.
    pub year: u16,
    /// Holiday the dates belong to (or were rescheduled for).
    pub holiday: Holiday,
    /// Classification applied to every date of the span.
    pub kind: DayKind,
    /// First `(month, day)` of the span.
    pub start: (u8, u8),
    /// Last `(month, day)` of the span, inclusive; `None` for a single date.
    pub end: Option<(u8, u8)>,
}

/// An ordered collection of decree records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecreeBook {
    records: Vec<DecreeRecord>,
}

impl DecreeBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start recording the decree for `year`.
    pub fn year(self, year: u16) -> YearDecree {
        YearDecree { book: self, year }
    }

    /// Append an already-built record.
    pub fn push(&mut self, record: DecreeRecord) {
        self.records.push(record);
    }

    /// All records, in authoring order.
    pub fn records(&self) -> &[DecreeRecord] {
        &self.records
    }

    /// Consume the book, returning its records.
    pub fn into_records(self) -> Vec<DecreeRecord> {
        self.records
    }
}

impl FromIterator<DecreeRecord> for DecreeBook {
    fn from_iter<I: IntoIterator<Item = DecreeRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// A decree with its year selected.
#[derive(Debug)]
#[must_use = "call `done()` to get the decree book back"]
pub struct YearDecree {
    book: DecreeBook,
    year: u16,
}

impl YearDecree {
    /// Make `holiday` the subject of the following dates.
    pub fn mark(self, holiday: Holiday) -> HolidayDecree {
        HolidayDecree {
            decree: self,
            holiday,
        }
    }

    /// Finish the year.
    pub fn done(self) -> DecreeBook {
        self.book
    }
}

/// A decree with both year and holiday selected.
#[derive(Debug)]
#[must_use = "call `done()` to get the decree book back"]
pub struct HolidayDecree {
    decree: YearDecree,
    holiday: Holiday,
}

impl HolidayDecree {
    /// Mark `month`/`day` as a rest day of the current holiday.
    pub fn rest(self, month: u8, day: u8) -> MarkedDecree {
        self.save(DayKind::Rest, month, day)
    }

    /// Mark `month`/`day` as a make-up workday for the current holiday.
    pub fn work(self, month: u8, day: u8) -> MarkedDecree {
        self.save(DayKind::Work, month, day)
    }

    /// Mark `month`/`day` as an in-lieu day of the current holiday.
    pub fn in_lieu(self, month: u8, day: u8) -> MarkedDecree {
        self.save(DayKind::InLieu, month, day)
    }

    /// Switch to another holiday within the same year.
    pub fn mark(self, holiday: Holiday) -> HolidayDecree {
        self.decree.mark(holiday)
    }

    /// Finish the year.
    pub fn done(self) -> DecreeBook {
        self.decree.done()
    }

    fn save(mut self, kind: DayKind, month: u8, day: u8) -> MarkedDecree {
        self.decree.book.push(DecreeRecord {
            year: self.decree.year,
            holiday: self.holiday,
            kind,
            start: (month, day),
            end: None,
        });
        MarkedDecree { decree: self }
    }
}

/// A decree right after a single-date call; the only state that accepts
/// [`to`](MarkedDecree::to).
#[derive(Debug)]
#[must_use = "call `done()` to get the decree book back"]
pub struct MarkedDecree {
    decree: HolidayDecree,
}

impl MarkedDecree {
    /// Extend the date just marked into the inclusive span ending at
    /// `month`/`day`, with the same classification and holiday.
    pub fn to(mut self, month: u8, day: u8) -> HolidayDecree {
        if let Some(last) = self.decree.decree.book.records.last_mut() {
            last.end = Some((month, day));
        }
        self.decree
    }

    /// See [`HolidayDecree::rest`].
    pub fn rest(self, month: u8, day: u8) -> MarkedDecree {
        self.decree.rest(month, day)
    }

    /// See [`HolidayDecree::work`].
    pub fn work(self, month: u8, day: u8) -> MarkedDecree {
        self.decree.work(month, day)
    }

    /// See [`HolidayDecree::in_lieu`].
    pub fn in_lieu(self, month: u8, day: u8) -> MarkedDecree {
        self.decree.in_lieu(month, day)
    }

    /// See [`HolidayDecree::mark`].
    pub fn mark(self, holiday: Holiday) -> HolidayDecree {
        self.decree.mark(holiday)
    }

    /// Finish the year.
    pub fn done(self) -> DecreeBook {
        self.decree.done()
    }
}
