//! Builder configuration.

/// What to do when decrees classify one date both as a rest day and as a
/// make-up workday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OverlapPolicy {
    /// Abort the build with an error naming the date.
    #[default]
    Reject,
    /// Keep the classification of the later record and drop the earlier one.
    LastWriteWins,
}

/// Options for [`ArrangementBuilder`](crate::ArrangementBuilder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuilderConfig {
    /// Rest/work conflict handling.
    pub overlap_policy: OverlapPolicy,
}

impl BuilderConfig {
    /// Configuration with the given overlap policy.
    pub fn with_overlap_policy(overlap_policy: OverlapPolicy) -> Self {
        Self { overlap_policy }
    }
}
