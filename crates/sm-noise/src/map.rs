//! Flattened per-group noise tables and their colour/behavior mapping.
//!
//! # Groups
//!
//! | Coaches | Layout        | Values per coach                         |
//! |---------|---------------|------------------------------------------|
//! | 1–2     | `Flat`        | 28, one per seat, row-major              |
//! | 3–5     | `Flat`        | 42, one per berth, compartment-major     |
//! | 6–10    | `FloorPairs`  | 14, one per (compartment, floor)         |
//!
//! `FloorPairs` stores floor 2 before floor 1 inside each compartment, and
//! each value is the mean of the floor's two berths:
//!
//! ```text
//! index = (coach - 6) * 14 + compartment * 2 + (1 - tier)
//! compartment = seat_index / 4,  tier = (seat_index % 4) / 2
//! ```
//!
//! Values are normalised with the group-wide minimum and maximum.  A level
//! above 0.5 is `Quiet`.

use std::sync::OnceLock;

use sm_core::{Behavior, CoachId, Rgb};

use crate::tables::{FOUR_BERTH, SEATING, SIX_BERTH};

/// Normalised level above which a seat is quiet.
pub const QUIET_THRESHOLD: f64 = 0.5;

// ── Layout ────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GroupLayout {
    /// One value per seat; `per_coach` values for each coach.
    Flat { per_coach: usize },
    /// Two values per compartment (floor 2, then floor 1).
    FloorPairs { compartments: usize },
}

impl GroupLayout {
    fn per_coach(self) -> usize {
        match self {
            GroupLayout::Flat { per_coach }         => per_coach,
            GroupLayout::FloorPairs { compartments } => compartments * 2,
        }
    }

    /// Offset of `seat_index` within one coach's slice, if in range.
    fn offset(self, seat_index: usize) -> Option<usize> {
        match self {
            GroupLayout::Flat { per_coach } => (seat_index < per_coach).then_some(seat_index),
            GroupLayout::FloorPairs { compartments } => {
                let compartment = seat_index / 4;
                let tier = (seat_index % 4) / 2;
                (compartment < compartments).then_some(compartment * 2 + (1 - tier))
            }
        }
    }
}

// ── NoiseGroup ────────────────────────────────────────────────────────────────

/// A contiguous run of coaches sharing one colour ramp.
#[derive(Clone, Debug)]
pub struct NoiseGroup {
    first:  CoachId,
    last:   CoachId,
    layout: GroupLayout,
    values: Vec<f64>,
    min:    f64,
    max:    f64,
}

impl NoiseGroup {
    /// Build a group from its flattened values.  `values.len()` must equal
    /// the coach count times the layout's per-coach size.
    pub fn new(first: CoachId, last: CoachId, layout: GroupLayout, values: Vec<f64>) -> Self {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        debug_assert_eq!(
            values.len(),
            (last.index() - first.index() + 1) * layout.per_coach(),
        );
        Self { first, last, layout, values, min, max }
    }

    #[inline]
    pub fn contains(&self, coach: CoachId) -> bool {
        (self.first..=self.last).contains(&coach)
    }

    pub fn coaches(&self) -> impl Iterator<Item = CoachId> + '_ {
        (self.first.0..=self.last.0).map(CoachId)
    }

    pub fn layout(&self) -> GroupLayout {
        self.layout
    }

    /// `(min, max)` over every value of the group.
    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Raw noise value of a seat, or `None` when the index falls outside its
    /// coach's slice of the table.
    pub fn value(&self, coach: CoachId, seat_index: usize) -> Option<f64> {
        if !self.contains(coach) {
            return None;
        }
        let offset = self.layout.offset(seat_index)?;
        let base = (coach.index() - self.first.index()) * self.layout.per_coach();
        self.values.get(base + offset).copied()
    }

    /// Position of `value` within the group range, in [0, 1].
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

// ── NoiseLookup ───────────────────────────────────────────────────────────────

/// Result of looking a seat up in the [`NoiseMap`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NoiseLookup {
    /// The coach belongs to no group.
    Ungrouped,
    /// The coach has a group but the seat index lies past its table.
    OutOfRange,
    Level { raw: f64, level: f64 },
}

impl NoiseLookup {
    /// Behavior for grouped coaches; out-of-range seats count as `Social`.
    pub fn behavior(self) -> Option<Behavior> {
        match self {
            NoiseLookup::Ungrouped  => None,
            NoiseLookup::OutOfRange => Some(Behavior::Social),
            NoiseLookup::Level { level, .. } if level > QUIET_THRESHOLD => Some(Behavior::Quiet),
            NoiseLookup::Level { .. } => Some(Behavior::Social),
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            NoiseLookup::Level { level, .. } => Rgb::ORANGE.lerp(Rgb::GREEN, level as f32),
            _ => Rgb::NEUTRAL,
        }
    }
}

// ── NoiseMap ──────────────────────────────────────────────────────────────────

/// All noise groups of a train.
#[derive(Clone, Debug, Default)]
pub struct NoiseMap {
    groups: Vec<NoiseGroup>,
}

impl NoiseMap {
    pub fn new(groups: Vec<NoiseGroup>) -> Self {
        Self { groups }
    }

    /// The authored tables for the standard ten-coach fleet, built once.
    pub fn standard() -> &'static NoiseMap {
        static STANDARD: OnceLock<NoiseMap> = OnceLock::new();
        STANDARD.get_or_init(build_standard)
    }

    pub fn groups(&self) -> &[NoiseGroup] {
        &self.groups
    }

    pub fn group(&self, coach: CoachId) -> Option<&NoiseGroup> {
        self.groups.iter().find(|g| g.contains(coach))
    }

    pub fn lookup(&self, coach: CoachId, seat_index: usize) -> NoiseLookup {
        let Some(group) = self.group(coach) else {
            return NoiseLookup::Ungrouped;
        };
        match group.value(coach, seat_index) {
            Some(raw) => NoiseLookup::Level { raw, level: group.normalize(raw) },
            None => NoiseLookup::OutOfRange,
        }
    }

    #[inline]
    pub fn behavior(&self, coach: CoachId, seat_index: usize) -> Option<Behavior> {
        self.lookup(coach, seat_index).behavior()
    }

    #[inline]
    pub fn color(&self, coach: CoachId, seat_index: usize) -> Rgb {
        self.lookup(coach, seat_index).color()
    }
}

fn build_standard() -> NoiseMap {
    let seating = SEATING.iter().flatten().flatten().map(|&v| f64::from(v)).collect();
    let six_berth = SIX_BERTH.iter().flatten().flatten().map(|&v| f64::from(v)).collect();
    let four_berth = FOUR_BERTH
        .iter()
        .flatten()
        .flat_map(|berths| {
            [1usize, 0].map(|tier| (f64::from(berths[tier * 2]) + f64::from(berths[tier * 2 + 1])) / 2.0)
        })
        .collect();

    NoiseMap::new(vec![
        NoiseGroup::new(CoachId(1), CoachId(2), GroupLayout::Flat { per_coach: 28 }, seating),
        NoiseGroup::new(CoachId(3), CoachId(5), GroupLayout::Flat { per_coach: 42 }, six_berth),
        NoiseGroup::new(
            CoachId(6),
            CoachId(10),
            GroupLayout::FloorPairs { compartments: 7 },
            four_berth,
        ),
    ])
}
