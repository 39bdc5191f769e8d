//! The record-type catalogue: the three seat groupings a user can filter by.

use std::fmt;
use std::str::FromStr;

use sm_core::{CoachCategory, SmError};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RecordType {
    Standard,
    MediumPriority,
    HighPriority,
}

impl RecordType {
    pub const ALL: [RecordType; 3] =
        [RecordType::Standard, RecordType::MediumPriority, RecordType::HighPriority];

    pub fn key(self) -> &'static str {
        match self {
            RecordType::Standard       => "standard",
            RecordType::MediumPriority => "medium_priority",
            RecordType::HighPriority   => "high_priority",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RecordType::Standard       => "Standard Seats",
            RecordType::MediumPriority => "6-Berth Cabins",
            RecordType::HighPriority   => "4-Berth Cabins",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RecordType::Standard       => "Regular seating with basic comfort",
            RecordType::MediumPriority => "Shared sleeper compartments (6 beds)",
            RecordType::HighPriority   => "Premium sleeper compartments (4 beds)",
        }
    }

    /// 1 (standard) to 3 (four-berth).
    pub fn priority_tier(self) -> u8 {
        match self {
            RecordType::Standard       => 1,
            RecordType::MediumPriority => 2,
            RecordType::HighPriority   => 3,
        }
    }

    pub fn category(self) -> CoachCategory {
        match self {
            RecordType::Standard       => CoachCategory::Seating,
            RecordType::MediumPriority => CoachCategory::SixBerth,
            RecordType::HighPriority   => CoachCategory::FourBerth,
        }
    }

    pub fn for_category(category: CoachCategory) -> RecordType {
        match category {
            CoachCategory::Seating   => RecordType::Standard,
            CoachCategory::SixBerth  => RecordType::MediumPriority,
            CoachCategory::FourBerth => RecordType::HighPriority,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for RecordType {
    type Err = SmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard"                                => Ok(RecordType::Standard),
            "medium_priority" | "six-berth-medium"    => Ok(RecordType::MediumPriority),
            "high_priority" | "four-berth-high"       => Ok(RecordType::HighPriority),
            other => Err(SmError::Parse(format!("unknown record type {other:?}"))),
        }
    }
}
