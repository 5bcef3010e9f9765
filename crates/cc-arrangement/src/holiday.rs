//! Public holidays of mainland China.

/// A statutory public holiday.
///
/// Two values are the same holiday exactly when they are the same variant;
/// the display names are derived from the variant, never stored per date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Holiday {
    /// New Year's Day (元旦).
    NewYearsDay,
    /// Spring Festival (春节).
    SpringFestival,
    /// Tomb-sweeping Day (清明).
    TombSweepingDay,
    /// Labour Day (劳动节).
    LabourDay,
    /// Dragon Boat Festival (端午).
    DragonBoatFestival,
    /// National Day (国庆节).
    NationalDay,
    /// Mid-autumn Festival (中秋).
    MidAutumnFestival,
    /// One-off commemoration of the 70th anniversary of the victory in the
    /// War of Resistance and the World Anti-Fascist War (September 2015).
    AntiFascist70thDay,
}

impl Holiday {
    /// Every holiday.
    pub const ALL: [Holiday; 8] = [
        Holiday::NewYearsDay,
        Holiday::SpringFestival,
        Holiday::TombSweepingDay,
        Holiday::LabourDay,
        Holiday::DragonBoatFestival,
        Holiday::MidAutumnFestival,
        Holiday::AntiFascist70thDay,
        Holiday::NationalDay,
    ];

    /// Chinese display name.
    pub fn name(&self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "元旦",
            Holiday::SpringFestival => "春节",
            Holiday::TombSweepingDay => "清明",
            Holiday::LabourDay => "劳动节",
            Holiday::DragonBoatFestival => "端午",
            Holiday::NationalDay => "国庆节",
            Holiday::MidAutumnFestival => "中秋",
            Holiday::AntiFascist70thDay => {
                "中国人民抗日战争暨世界反法西斯战争胜利70周年纪念日"
            }
        }
    }

    /// English display name.
    pub fn english_name(&self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "New Year's Day",
            Holiday::SpringFestival => "Spring Festival",
            Holiday::TombSweepingDay => "Tomb-sweeping Day",
            Holiday::LabourDay => "Labour Day",
            Holiday::DragonBoatFestival => "Dragon Boat Festival",
            Holiday::NationalDay => "National Day",
            Holiday::MidAutumnFestival => "Mid-autumn Festival",
            Holiday::AntiFascist70thDay => "Anti-Fascist 70th Day",
        }
    }

    /// Statutory length in days, before any rescheduling.
    ///
    /// Informational only: the decree tables, not this number, decide which
    /// dates are rest days.
    pub fn days(&self) -> u8 {
        match self {
            Holiday::SpringFestival | Holiday::NationalDay => 3,
            _ => 1,
        }
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}
