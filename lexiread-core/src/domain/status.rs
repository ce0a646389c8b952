//! Learning status of a recorded vocabulary entry

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Progress state of a vocabulary entry.
///
/// The numeric codes are stable and are what the external store persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TermStatus {
    /// Recorded but not yet studied
    #[default]
    Unknown,
    Learning1,
    Learning2,
    Learning3,
    Learning4,
    Learned,
    /// Excluded from study (names, noise)
    Ignored,
    /// Known before it was ever recorded
    WellKnown,
}

/// Status code that does not map to a [`TermStatus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid term status code: {0}")]
pub struct InvalidStatusCode(pub u8);

impl TermStatus {
    /// All statuses in ascending code order
    pub const ALL: [TermStatus; 8] = [
        TermStatus::Unknown,
        TermStatus::Learning1,
        TermStatus::Learning2,
        TermStatus::Learning3,
        TermStatus::Learning4,
        TermStatus::Learned,
        TermStatus::Ignored,
        TermStatus::WellKnown,
    ];

    /// Persisted numeric code
    pub fn code(self) -> u8 {
        match self {
            TermStatus::Unknown => 0,
            TermStatus::Learning1 => 1,
            TermStatus::Learning2 => 2,
            TermStatus::Learning3 => 3,
            TermStatus::Learning4 => 4,
            TermStatus::Learned => 5,
            TermStatus::Ignored => 98,
            TermStatus::WellKnown => 99,
        }
    }

    /// One step forward. Learned, Ignored and WellKnown are fixed points.
    pub fn advance(self) -> Self {
        match self {
            TermStatus::Unknown => TermStatus::Learning1,
            TermStatus::Learning1 => TermStatus::Learning2,
            TermStatus::Learning2 => TermStatus::Learning3,
            TermStatus::Learning3 => TermStatus::Learning4,
            TermStatus::Learning4 => TermStatus::Learned,
            TermStatus::Learned => TermStatus::Learned,
            TermStatus::Ignored => TermStatus::Ignored,
            TermStatus::WellKnown => TermStatus::WellKnown,
        }
    }

    /// One step back. Unknown, Learning1 and Ignored are fixed points;
    /// WellKnown drops back onto the learning scale at Learned.
    pub fn decrease(self) -> Self {
        match self {
            TermStatus::Unknown => TermStatus::Unknown,
            TermStatus::Learning1 => TermStatus::Learning1,
            TermStatus::Learning2 => TermStatus::Learning1,
            TermStatus::Learning3 => TermStatus::Learning2,
            TermStatus::Learning4 => TermStatus::Learning3,
            TermStatus::Learned => TermStatus::Learning4,
            TermStatus::Ignored => TermStatus::Ignored,
            TermStatus::WellKnown => TermStatus::Learned,
        }
    }

    /// Learning1 through Learning4
    pub fn is_learning(self) -> bool {
        matches!(
            self,
            TermStatus::Learning1
                | TermStatus::Learning2
                | TermStatus::Learning3
                | TermStatus::Learning4
        )
    }

    /// Learned or WellKnown
    pub fn is_known(self) -> bool {
        matches!(self, TermStatus::Learned | TermStatus::WellKnown)
    }

    /// Short label for previews
    pub fn label(self) -> &'static str {
        match self {
            TermStatus::Unknown => "unknown",
            TermStatus::Learning1 => "learning-1",
            TermStatus::Learning2 => "learning-2",
            TermStatus::Learning3 => "learning-3",
            TermStatus::Learning4 => "learning-4",
            TermStatus::Learned => "learned",
            TermStatus::Ignored => "ignored",
            TermStatus::WellKnown => "well-known",
        }
    }
}

impl TryFrom<u8> for TermStatus {
    type Error = InvalidStatusCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        TermStatus::ALL
            .into_iter()
            .find(|status| status.code() == code)
            .ok_or(InvalidStatusCode(code))
    }
}

impl From<TermStatus> for u8 {
    fn from(status: TermStatus) -> Self {
        status.code()
    }
}

impl fmt::Display for TermStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
