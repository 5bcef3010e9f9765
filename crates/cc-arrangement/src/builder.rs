//! Expansion of decree records into an [`Arrangement`].

use std::collections::BTreeMap;

use cc_core::errors::{Error, Result};
use cc_core::{ensure, ensure_post};
use cc_time::{Date, DateIter};
use tracing::{debug_span, info, trace, warn};

use crate::arrangement::Arrangement;
use crate::config::{BuilderConfig, OverlapPolicy};
use crate::decree::{DayKind, DecreeRecord};
use crate::holiday::Holiday;

/// Turns decree records into the three classified date tables.
///
/// Records are applied in order. Any malformed record (impossible date,
/// span ending before it starts) aborts the whole build; no partially
/// expanded tables are ever returned.
#[derive(Debug, Clone, Default)]
pub struct ArrangementBuilder {
    config: BuilderConfig,
}

#[derive(Default)]
struct Tables {
    holidays: BTreeMap<Date, Holiday>,
    workdays: BTreeMap<Date, Holiday>,
    in_lieu_days: BTreeMap<Date, Holiday>,
}

impl ArrangementBuilder {
    /// Create a builder with the given configuration.
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Expand `records` and compute the supported date range.
    ///
    /// # Errors
    /// * [`Error::Date`] if a record names an impossible date.
    /// * [`Error::Precondition`] if a span ends before it starts, or if a
    ///   date is both a rest day and a make-up workday under
    ///   [`OverlapPolicy::Reject`].
    /// * [`Error::Postcondition`] if the records classify no date at all.
    pub fn build(&self, records: &[DecreeRecord]) -> Result<Arrangement> {
        let _span = debug_span!("build_arrangement", records = records.len()).entered();

        let mut tables = Tables::default();
        for record in records {
            trace!(?record, "expanding decree record");
            for date in expand(record)? {
                self.insert(&mut tables, record.kind, date, record.holiday)?;
            }
        }

        ensure_post!(
            tables.holidays.keys().all(|d| !tables.workdays.contains_key(d)),
            "rest-day and workday tables overlap"
        );

        let bounds = [&tables.holidays, &tables.workdays, &tables.in_lieu_days]
            .into_iter()
            .filter_map(|t| Some((*t.first_key_value()?.0, *t.last_key_value()?.0)))
            .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)));
        let Some((min_date, max_date)) = bounds else {
            return Err(Error::Postcondition(
                "decrees classify no date, the supported range is empty".into(),
            ));
        };

        info!(
            holidays = tables.holidays.len(),
            workdays = tables.workdays.len(),
            in_lieu_days = tables.in_lieu_days.len(),
            %min_date,
            %max_date,
            "holiday arrangement built"
        );

        Ok(Arrangement {
            holidays: tables.holidays,
            workdays: tables.workdays,
            in_lieu_days: tables.in_lieu_days,
            min_date,
            max_date,
        })
    }

    fn insert(&self, tables: &mut Tables, kind: DayKind, date: Date, holiday: Holiday) -> Result<()> {
        let (target, opposite) = match kind {
            DayKind::Rest => (&mut tables.holidays, &mut tables.workdays),
            DayKind::Work => (&mut tables.workdays, &mut tables.holidays),
            DayKind::InLieu => {
                tables.in_lieu_days.insert(date, holiday);
                return Ok(());
            }
        };
        if let Some(previous) = opposite.remove(&date) {
            ensure!(
                self.config.overlap_policy == OverlapPolicy::LastWriteWins,
                "{date} is both a rest day and a make-up workday ({previous} / {holiday})"
            );
            warn!(%date, %previous, %holiday, ?kind, "conflicting decree, keeping the later record");
        }
        target.insert(date, holiday);
        Ok(())
    }
}

/// Resolve a record into the inclusive span of dates it covers.
fn expand(record: &DecreeRecord) -> Result<DateIter> {
    let (month, day) = record.start;
    let start = Date::from_ymd(record.year, month, day)?;
    let end = match record.end {
        Some((month, day)) => Date::from_ymd(record.year, month, day)?,
        None => start,
    };
    ensure!(
        end >= start,
        "{} decree for {}: span {start} .. {end} ends before it starts",
        record.year,
        record.holiday
    );
    Ok(start.iter_to(end))
}
