//! The expanded, queryable holiday tables.

use std::collections::BTreeMap;

use cc_core::errors::Result;
use cc_time::Date;

use crate::builder::ArrangementBuilder;
use crate::config::BuilderConfig;
use crate::data::builtin_decrees;
use crate::holiday::Holiday;

/// Classified dates produced by expanding a set of decrees.
///
/// Every key of every table is annotated with the holiday that caused it.
/// The rest-day and workday tables never share a key. An `Arrangement` is
/// only produced by [`ArrangementBuilder::build`] and is immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrangement {
    pub(crate) holidays: BTreeMap<Date, Holiday>,
    pub(crate) workdays: BTreeMap<Date, Holiday>,
    pub(crate) in_lieu_days: BTreeMap<Date, Holiday>,
    pub(crate) min_date: Date,
    pub(crate) max_date: Date,
}

impl Arrangement {
    /// Build the tables for the bundled 2004–2023 decrees with the default
    /// configuration.
    pub fn builtin() -> Result<Self> {
        ArrangementBuilder::new(BuilderConfig::default()).build(builtin_decrees().records())
    }

    /// Holiday `date` is a statutory rest day of, if any.
    pub fn holiday(&self, date: Date) -> Option<Holiday> {
        self.holidays.get(&date).copied()
    }

    /// Holiday `date` was turned into a make-up workday for, if any.
    pub fn workday(&self, date: Date) -> Option<Holiday> {
        self.workdays.get(&date).copied()
    }

    /// Holiday `date` is an in-lieu day of, if any.
    pub fn in_lieu(&self, date: Date) -> Option<Holiday> {
        self.in_lieu_days.get(&date).copied()
    }

    /// Statutory rest days, ascending.
    pub fn holidays(&self) -> impl Iterator<Item = (Date, Holiday)> + '_ {
        self.holidays.iter().map(|(d, h)| (*d, *h))
    }

    /// Make-up workdays, ascending.
    pub fn workdays(&self) -> impl Iterator<Item = (Date, Holiday)> + '_ {
        self.workdays.iter().map(|(d, h)| (*d, *h))
    }

    /// In-lieu days, ascending.
    pub fn in_lieu_days(&self) -> impl Iterator<Item = (Date, Holiday)> + '_ {
        self.in_lieu_days.iter().map(|(d, h)| (*d, *h))
    }

    /// Earliest date present in any table.
    pub fn min_date(&self) -> Date {
        self.min_date
    }

    /// Latest date present in any table.
    pub fn max_date(&self) -> Date {
        self.max_date
    }

    /// Number of statutory rest days.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Number of make-up workdays.
    pub fn workday_count(&self) -> usize {
        self.workdays.len()
    }

    /// Number of in-lieu days.
    pub fn in_lieu_count(&self) -> usize {
        self.in_lieu_days.len()
    }
}
