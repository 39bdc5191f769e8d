//! Coach category and passenger-ambience enums shared by every crate.
//!
//! The category is stored explicitly on each seat at build time so that
//! pricing, scoring and filtering never have to infer it from identifier
//! text or coach position.

use crate::Price;

// ── CoachCategory ─────────────────────────────────────────────────────────────

/// The physical configuration of a coach.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CoachCategory {
    /// Open soft-seat car, four seats across.
    Seating,
    /// Sleeper with compartments of three floors × two berths.
    SixBerth,
    /// Sleeper with compartments of two floors × two berths.
    FourBerth,
}

impl CoachCategory {
    pub const ALL: [CoachCategory; 3] =
        [CoachCategory::Seating, CoachCategory::SixBerth, CoachCategory::FourBerth];

    /// Label used in configuration and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            CoachCategory::Seating   => "seating",
            CoachCategory::SixBerth  => "six-berth",
            CoachCategory::FourBerth => "four-berth",
        }
    }

    /// Tag used inside fare keys (`"SE1-k4-6-1"`).
    pub fn fare_tag(self) -> &'static str {
        match self {
            CoachCategory::Seating   => "ngoi",
            CoachCategory::SixBerth  => "k6",
            CoachCategory::FourBerth => "k4",
        }
    }

    /// Price charged when no fare table covers a seat.
    pub fn default_price(self) -> Price {
        match self {
            CoachCategory::Seating   => Price(850_000),
            CoachCategory::SixBerth  => Price(850_000),
            CoachCategory::FourBerth => Price(1_200_000),
        }
    }

    /// Berths per compartment, or `None` for open seating.
    pub fn compartment_size(self) -> Option<usize> {
        match self {
            CoachCategory::Seating   => None,
            CoachCategory::SixBerth  => Some(6),
            CoachCategory::FourBerth => Some(4),
        }
    }

    /// Number of floors (tiers) per compartment.
    pub fn floors(self) -> u8 {
        match self {
            CoachCategory::Seating   => 1,
            CoachCategory::SixBerth  => 3,
            CoachCategory::FourBerth => 2,
        }
    }

    #[inline]
    pub fn is_sleeper(self) -> bool {
        !matches!(self, CoachCategory::Seating)
    }
}

impl std::fmt::Display for CoachCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CoachCategory {
    type Err = crate::SmError;

    /// Accepts the display labels and the fare tags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seating" | "ngoi" | "seat"                   => Ok(CoachCategory::Seating),
            "six-berth" | "k6" | "sleeper_6_berth"        => Ok(CoachCategory::SixBerth),
            "four-berth" | "k4" | "sleeper_4_berth"       => Ok(CoachCategory::FourBerth),
            other => Err(crate::SmError::Parse(format!(
                "unknown coach category {other:?}: expected seating, six-berth or four-berth"
            ))),
        }
    }
}

// ── Behavior ──────────────────────────────────────────────────────────────────

/// Ambience classification derived from a seat's noise value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Behavior {
    Quiet,
    /// Also the neutral fallback for out-of-range noise lookups.
    #[default]
    Social,
}

impl Behavior {
    pub fn as_str(self) -> &'static str {
        match self {
            Behavior::Quiet  => "quiet",
            Behavior::Social => "social",
        }
    }
}

impl std::fmt::Display for Behavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
