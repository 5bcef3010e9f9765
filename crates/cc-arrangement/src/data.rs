//! Bundled decrees, 2004–2023.
//!
//! One function per year, transcribed from the State Council notices on
//! public holiday arrangements. A decree may reach into the last days of
//! its own year for the next New Year's break (e.g. 2018-12-30).

use crate::decree::{DecreeBook, YearDecree};
use crate::holiday::Holiday::*;

/// Per-year decree, applied to a [`YearDecree`] already set to its year.
pub type YearlyDecree = fn(YearDecree) -> DecreeBook;

/// Bundled decrees in ascending year order.
pub const YEARLY_DECREES: &[(u16, YearlyDecree)] = &[
    (2004, y2004),
    (2005, y2005),
    (2006, y2006),
    (2007, y2007),
    (2008, y2008),
    (2009, y2009),
    (2010, y2010),
    (2011, y2011),
    (2012, y2012),
    (2013, y2013),
    (2014, y2014),
    (2015, y2015),
    (2016, y2016),
    (2017, y2017),
    (2018, y2018),
    (2019, y2019),
    (2020, y2020),
    (2021, y2021),
    (2022, y2022),
    (2023, y2023),
];

/// Record every bundled decree into one [`DecreeBook`].
pub fn builtin_decrees() -> DecreeBook {
    YEARLY_DECREES
        .iter()
        .fold(DecreeBook::new(), |book, (year, decree)| decree(book.year(*year)))
}

#[rustfmt::skip]
fn y2004(decree: YearDecree) -> DecreeBook {
    decree
        .mark(NewYearsDay).rest(1, 1)
        .mark(SpringFestival).rest(1, 22).to(1, 28).work(1, 17).to(1, 18).in_lieu(1, 27).to(1, 28)
        .mark(LabourDay).rest(5, 1).to(5, 7).work(5, 8).to(5, 9).in_lieu(5, 6).to(5, 7)
        .mark(NationalDay).rest(10, 1).to(10, 7).work(10, 9).to(10, 10).in_lieu(10, 6).to(10, 7)
        .done()
}

#[rustfmt::skip]
fn y2005(decree: YearDecree) -> DecreeBook {
    decree
        .mark(NewYearsDay).rest(1, 1).to(1, 3)
        .mark(SpringFestival).rest(2, 9).to(2, 15).work(2, 5).to(2, 6).in_lieu(2, 14).to(2, 15)
        .mark(LabourDay).rest(5, 1).to(5, 7).work(4, 30).work(5, 8).in_lieu(5, 5).to(5, 6)
        .mark(NationalDay).rest(10, 1).to(10, 7).work(10, 8).to(10, 9).in_lieu(10, 6).to(10, 7)
        .done()
}

#[rustfmt::skip]
fn y2006(decree: YearDecree) -> DecreeBook {
    decree
        .mark(NewYearsDay).rest(1, 1).to(1, 3)
        .mark(SpringFestival).rest(1, 29).to(2, 4).work(1, 28).work(2, 5).in_lieu(2, 2).to(2, 3)
        .mark(LabourDay).rest(5, 1).to(5, 7).work(4, 29).to(4, 30).in_lieu(5, 4).to(5, 5)
        .mark(NationalDay).rest(10, 1).to(10, 7).work(9, 30).work(10, 8).in_lieu(10, 5).to(10, 6)
        .mark(NewYearsDay).work(12, 30).to(12, 31)
        .done()
}

#[rustfmt::skip]
fn y2007(decree: YearDecree) -> DecreeBook {
    decree
        .mark(NewYearsDay).rest(1, 1).to(1, 3).in_lieu(1, 2).to(1, 3)
        .mark(SpringFestival).rest(2, 18).to(2, 24).work(2, 17).work(2, 25).in_lieu(2, 22).to(2, 23)
        .mark(LabourDay).rest(5, 1).to(5, 7).work(4, 28).to(4, 29).in_lieu(5, 4).in_lieu(5, 7)
        .mark(NationalDay).rest(10, 1).to(10, 7).work(9, 29).to(9, 30).in_lieu(10, 4).to(10, 5)
        .mark(NewYearsDay).rest(12, 30).to(12, 31).work(12, 29).in_lieu(12, 31)
        .done()
}

#[rustfmt::skip]
fn y2008(decree: YearDecree) -> DecreeBook {
    decree
        .mark(NewYearsDay).rest(1, 1)
        .mark(SpringFestival).rest(2, 6).to(2, 12).work(2, 2).to(2, 3).in_lieu(2, 11).to(2, 12)
        .mark(TombSweepingDay).rest(4, 4).to(4, 6)
        .mark(LabourDay).rest(5, 1).to(5, 3).work(5, 4).in_lieu(5, 2)
        .mark(DragonBoatFestival).rest(6, 7).to(6, 9)
        .mark(MidAutumnFestival).rest(9, 13).to(9, 15)
        .mark(NationalDay).rest(9, 29).to(10, 5).work(9, 27).to(9, 28).in_lieu(9, 29).to(9, 30)
        .done()
}

#[rustfmt::skip]
fn y2009(decree: YearDecree) -> DecreeBook {
    decree
        .mark(NewYearsDay).rest(1, 1).to(1, 3).work(1, 4).in_lieu(1, 2)
        .mark(SpringFestival).rest(1, 25).to(1, 31).work(1, 24).work(2, 1).in_lieu(1, 29).to(1, 30)
        .mark(TombSweepingDay).rest(4, 4).to(4, 6)
        .mark(LabourDay).rest(5, 1).to(5, 3)
        .mark(DragonBoatFestival).rest(5, 28).to(5, 30).work(5, 31).in_lieu(5, 29)
        .mark(NationalDay).rest(10, 1).to(10, 8).work(9, 27).work(10, 10).in_lieu(10, 7).to(10, 8)
        .mark(MidAutumnFestival).rest(10, 3)
        .done()
}

#[rustfmt::skip]
fn y2010(decree: YearDecree) -> DecreeBook {
    decree
        .mark(NewYearsDay).rest(1, 1).to(1, 3)
        .mark(SpringFestival).rest(2, 13).to(2, 19).work(2, 20).to(2, 21).in_lieu(2, 18).to(2, 19)
        .mark(TombSweepingDay).rest(4, 3).to(4, 5)
        .mark(LabourDay).rest(5, 1).to(5, 3)
        .mark(DragonBoatFestival).rest(6, 14).to(6, 16).work(6, 12).to(6, 13).in_lieu(6, 14).to(6, 15)
        .mark(MidAutumnFestival).rest(9, 22).to(9, 24).work(9, 19).work(9, 25).in_lieu(9, 23).to(9, 24)
        .mark(NationalDay).rest(10, 1).to(10, 7).work(9, 26).work(10, 9).in_lieu(10, 6).to(10, 7)
        .done()
}

#[rustfmt::skip]
fn y2011(decree: YearDecree) -> DecreeBook {
    decree
        .mark(NewYearsDay).rest(1, 1).to(1, 3)
        .mark(SpringFestival).rest(2, 2).to(2, 8).work(1, 30).work(2, 12).in_lieu(2, 7).to(2, 8)
        .mark(TombSweepingDay).rest(4, 3).to(4, 5).work(4, 2).in_lieu(4, 4)
        .mark(LabourDay).rest(4, 30).to(5, 2)
        .mark(DragonBoatFestival).rest(6, 4).rest(6, 6)
        .mark(MidAutumnFestival).rest(9, 10).to(9, 12)
        .mark(NationalDay).rest(10, 1).to(10, 7).work(10, 8).to(10, 9).in_lieu(10, 6).to(10, 7)
        .mark(NewYearsDay).work(12, 31)
        .done()
}

#[rustfmt::skip]
fn y2012(decree: YearDecree) -> DecreeBook {
    decree
        .mark(NewYearsDay).rest(1, 1).to(1, 3).in_lieu(1, 3)
        .mark(SpringFestival).rest(1, 22).to(1, 28).work(1, 21).work(1, 29).in_lieu(1, 26).to(1, 27)
        .mark(TombSweepingDay).rest(4, 2).to(4, 4).work(3, 31).work(4, 1).in_lieu(4, 2).to(4, 3)
        .mark(LabourDay).rest(4, 29).to(5, 1).work(4, 28).in_lieu(4, 30)
        .mark(DragonBoatFestival).rest(6, 22).rest(6, 24)
        .mark(MidAutumnFestival).rest(9, 30)
        .mark(NationalDay).rest(10, 1).to(10, 7).work(9, 29).in_lieu(10, 5)
        .done()
}

#[rustfmt::skip]
fn y2013(decree: YearDecree) -> DecreeBook {
    decree
        .mark(NewYearsDay).rest(1, 1).to(1, 3).work(1, 5).to(1, 6).in_lieu(1, 2).to(1, 3)
        .mark(SpringFestival).rest(2, 9).to(2, 15).work(2, 16).to(2, 17).in_lieu(2, 14).to(2, 15)
        .mark(TombSweepingDay).rest(4, 4).to(4, 6).work(4, 7).in_lieu(4, 5)
        .mark(LabourDay).rest(4, 29).to(5, 1).work(4, 27).to(4, 28).in_lieu(4, 29).to(4, 30)
        .mark(DragonBoatFestival).rest(6, 10).to(6, 12).work(6, 8).to(6, 9).in_lieu(6, 10).to(6, 11)
        .mark(MidAutumnFestival).rest(9, 19).to(9, 21).work(9, 22).in_lieu(9, 20)
        .mark(NationalDay).rest(10, 1).to(10, 7).work(9, 29).work(10, 12).in_lieu(10, 4).in_lieu(10, 7)
        .done()
}

#[rustfmt::skip]
fn y2014(decree: YearDecree) -> DecreeBook {
    decree
        .mark(NewYearsDay).rest(1, 1)
        .mark(SpringFestival).rest(1, 31).to(2, 6).work(1, 26).work(2, 8).in_lieu(2, 5).to(2, 6)
        .mark(TombSweepingDay).rest(4, 5).to(4, 7)
        .mark(LabourDay).rest(5, 1).to(5, 3).work(5, 4).in_lieu(5, 2)
        .mark(DragonBoatFestival).rest(6, 2)
        .mark(MidAutumnFestival).rest(9, 8)
        .mark(NationalDay).rest(10, 1).to(10, 7).work(9, 28).work(10, 11).in_lieu(10, 6).to(10, 7)
        .done()
}

#[rustfmt::skip]
fn y2015(decree: YearDecree) -> DecreeBook {
    decree
        .mark(NewYearsDay).rest(1, 1).to(1, 3).work(1, 4).in_lieu(1, 2)
        .mark(SpringFestival).rest(2, 18).to(2, 24).work(2, 15).work(2, 28).in_lieu(2, 23).to(2, 24)
        .mark(TombSweepingDay).rest(4, 5).to(4, 6)
        .mark(LabourDay).rest(5, 1)
        .mark(DragonBoatFestival).rest(6, 20).rest(6, 22)
        .mark(MidAutumnFestival).rest(9, 27)
        .mark(NationalDay).rest(10, 1).to(10, 7).work(10, 10).in_lieu(10, 7)
        .mark(AntiFascist70thDay).rest(9, 3).to(9, 4).work(9, 6).in_lieu(9, 4)
        .done()
}

#[rustfmt::skip]
fn y2016(decree: YearDecree) -> DecreeBook {
    decree
        .mark(NewYearsDay).rest(1, 1)
        .mark(SpringFestival).rest(2, 7).to(2, 13).work(2, 6).work(2, 14).in_lieu(2, 11).to(2, 12)
        .mark(TombSweepingDay).rest(4, 4)
        .mark(LabourDay).rest(5, 1).to(5, 2)
        .mark(DragonBoatFestival).rest(6, 9).to(6, 11).work(6, 12).in_lieu(6, 10)
        .mark(MidAutumnFestival).rest(9, 15).to(9, 17).work(9, 18).in_lieu(9, 16)
        .mark(NationalDay).rest(10, 1).to(10, 7).work(10, 8).to(10, 9).in_lieu(10, 6).to(10, 7)
        .done()
}

#[rustfmt::skip]
fn y2017(decree: YearDecree) -> DecreeBook {
    decree
        .mark(NewYearsDay).rest(1, 1).to(1, 2)
        .mark(SpringFestival).rest(1, 27).to(2, 2).work(1, 22).work(2, 4).in_lieu(2, 1).to(2, 2)
        .mark(TombSweepingDay).rest(4, 2).to(4, 4).work(4, 1).in_lieu(4, 3)
        .mark(LabourDay).rest(5, 1)
        .mark(DragonBoatFestival).rest(5, 28).to(5, 30).work(5, 27).in_lieu(5, 29)
        .mark(NationalDay).rest(10, 1).to(10, 8).work(9, 30).in_lieu(10, 6)
        .mark(MidAutumnFestival).rest(10, 4)
        .done()
}

#[rustfmt::skip]
fn y2018(decree: YearDecree) -> DecreeBook {
    decree
        .mark(NewYearsDay).rest(1, 1)
        .mark(SpringFestival).rest(2, 15).to(2, 21).work(2, 11).work(2, 24).in_lieu(2, 19).to(2, 21)
        .mark(TombSweepingDay).rest(4, 5).to(4, 7).work(4, 8).in_lieu(4, 6)
        .mark(LabourDay).rest(4, 29).to(5, 1).work(4, 28).in_lieu(4, 30)
        .mark(DragonBoatFestival).rest(6, 18)
        .mark(NationalDay).rest(10, 1).to(10, 7).work(9, 29).to(9, 30).in_lieu(10, 4).to(10, 5)
        .mark(MidAutumnFestival).rest(9, 24)
        .mark(NewYearsDay).rest(12, 30).to(12, 31).work(12, 29).in_lieu(12, 31)
        .done()
}

#[rustfmt::skip]
fn y2019(decree: YearDecree) -> DecreeBook {
    decree
        .mark(NewYearsDay).rest(1, 1)
        .mark(SpringFestival).rest(2, 4).to(2, 10).work(2, 2).to(2, 3).in_lieu(2, 4).in_lieu(2, 8)
        .mark(TombSweepingDay).rest(4, 5).to(4, 7)
        .mark(LabourDay).rest(5, 1).to(5, 4).work(4, 28).work(5, 5).in_lieu(5, 2).in_lieu(5, 3)
        .mark(DragonBoatFestival).rest(6, 7).to(6, 9)
        .mark(MidAutumnFestival).rest(9, 13).to(9, 15)
        .mark(NationalDay).rest(10, 1).to(10, 7).work(9, 29).work(10, 12).in_lieu(10, 4).in_lieu(10, 7)
        .done()
}

#[rustfmt::skip]
fn y2020(decree: YearDecree) -> DecreeBook {
    decree
        .mark(NewYearsDay).rest(1, 1)
        .mark(SpringFestival).rest(1, 24).to(2, 2).work(1, 19).in_lieu(1, 29)
        .mark(TombSweepingDay).rest(4, 4).to(4, 6)
        .mark(LabourDay).rest(5, 1).to(5, 5).work(4, 26).work(5, 9).in_lieu(5, 4).to(5, 5)
        .mark(DragonBoatFestival).rest(6, 25).to(6, 27).work(6, 28).in_lieu(6, 26)
        .mark(NationalDay).rest(10, 1).to(10, 8).work(9, 27).work(10, 10).in_lieu(10, 7).to(10, 8)
        .done()
}

#[rustfmt::skip]
fn y2021(decree: YearDecree) -> DecreeBook {
    decree
        .mark(NewYearsDay).rest(1, 1).to(1, 3)
        .mark(SpringFestival).rest(2, 11).to(2, 17).work(2, 7).work(2, 20).in_lieu(2, 16).to(2, 17)
        .mark(TombSweepingDay).rest(4, 3).to(4, 5)
        .mark(LabourDay).rest(5, 1).to(5, 5).work(4, 25).work(5, 8).in_lieu(5, 4).to(5, 5)
        .mark(DragonBoatFestival).rest(6, 12).to(6, 14)
        .mark(MidAutumnFestival).rest(9, 19).to(9, 21).work(9, 18).in_lieu(9, 20)
        .mark(NationalDay).rest(10, 1).to(10, 7).work(9, 26).work(10, 9).in_lieu(10, 6).to(10, 7)
        .done()
}

#[rustfmt::skip]
fn y2022(decree: YearDecree) -> DecreeBook {
    decree
        .mark(NewYearsDay).rest(1, 1).to(1, 3)
        .mark(SpringFestival).rest(1, 31).to(2, 6).work(1, 29).work(1, 30).in_lieu(2, 3).to(2, 4)
        .mark(TombSweepingDay).rest(4, 3).to(4, 5).work(4, 2).in_lieu(4, 4)
        .mark(LabourDay).rest(4, 30).to(5, 4).work(4, 24).work(5, 7).in_lieu(5, 3).to(5, 4)
        .mark(DragonBoatFestival).rest(6, 3).to(6, 5)
        .mark(MidAutumnFestival).rest(9, 10).to(9, 12)
        .mark(NationalDay).rest(10, 1).to(10, 7).work(10, 8).work(10, 9).in_lieu(10, 6).to(10, 7)
        .mark(NewYearsDay).rest(12, 31)
        .done()
}

#[rustfmt::skip]
fn y2023(decree: YearDecree) -> DecreeBook {
    decree
        .mark(NewYearsDay).rest(1, 1).to(1, 2).in_lieu(1, 2)
        .mark(SpringFestival).rest(1, 21).to(1, 27).work(1, 28).to(1, 29).in_lieu(1, 26).to(1, 27)
        .mark(TombSweepingDay).rest(4, 5)
        .mark(LabourDay).rest(4, 29).to(5, 3).work(4, 23).work(5, 6).in_lieu(5, 2).to(5, 3)
        .mark(DragonBoatFestival).rest(6, 22).to(6, 24).work(6, 25).in_lieu(6, 23)
        .mark(MidAutumnFestival).rest(9, 29)
        .mark(NationalDay).rest(9, 30).to(10, 6).work(10, 7).to(10, 8).in_lieu(10, 5).to(10, 6)
        .done()
}
