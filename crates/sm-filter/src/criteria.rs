//! User-chosen filter settings.

use std::collections::BTreeSet;

use sm_core::{Behavior, CoachCategory, Price, ScreenConfig};

use crate::RecordType;

/// Ranking mode.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PriorityPreference {
    #[default]
    All,
    /// Keep only seats scoring at least the configured threshold.
    HighOnly,
}

/// Legacy ambience filter.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NoisePreference {
    Quiet,
    Noise,
}

impl NoisePreference {
    pub fn accepts(self, behavior: Behavior) -> bool {
        match self {
            NoisePreference::Quiet => behavior == Behavior::Quiet,
            NoisePreference::Noise => behavior == Behavior::Social,
        }
    }
}

/// Legacy per-category checkboxes.  All on by default.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatTypeToggles {
    pub seating:    bool,
    pub six_berth:  bool,
    pub four_berth: bool,
}

impl Default for SeatTypeToggles {
    fn default() -> Self {
        Self { seating: true, six_berth: true, four_berth: true }
    }
}

impl SeatTypeToggles {
    pub fn allows(self, category: CoachCategory) -> bool {
        match category {
            CoachCategory::Seating   => self.seating,
            CoachCategory::SixBerth  => self.six_berth,
            CoachCategory::FourBerth => self.four_berth,
        }
    }

    pub fn all_on(self) -> bool {
        self.seating && self.six_berth && self.four_berth
    }
}

/// Inclusive price bounds with `min <= max`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceRange {
    min: Price,
    max: Price,
}

impl PriceRange {
    /// `None` when `min > max`.
    pub fn new(min: Price, max: Price) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    pub fn min(self) -> Price {
        self.min
    }

    pub fn max(self) -> Price {
        self.max
    }

    #[inline]
    pub fn contains(self, price: Price) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Everything the filter engine narrows by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Empty means no restriction.
    pub record_types: BTreeSet<RecordType>,
    pub price:        PriceRange,
    pub noise:        Option<NoisePreference>,
    pub priority:     PriorityPreference,
    pub seat_types:   SeatTypeToggles,
}

impl FilterCriteria {
    /// All record types, no legacy filters, the given bounds.
    pub fn new(price: PriceRange) -> Self {
        Self {
            record_types: RecordType::ALL.into_iter().collect(),
            price,
            noise:        None,
            priority:     PriorityPreference::All,
            seat_types:   SeatTypeToggles::default(),
        }
    }

    /// Reset state using the configured default price bounds.  An inverted
    /// configured range collapses to its minimum.
    pub fn from_config(config: &ScreenConfig) -> Self {
        let price = PriceRange::new(config.default_min_price, config.default_max_price)
            .unwrap_or(PriceRange { min: config.default_min_price, max: config.default_min_price });
        Self::new(price)
    }

    pub fn allows_record(&self, category: CoachCategory) -> bool {
        self.record_types.is_empty() || self.record_types.contains(&RecordType::for_category(category))
    }
}
