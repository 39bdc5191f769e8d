//! Behavior classification for lattice builds.

use sm_core::{Behavior, CoachId, Rgb, SeatRng};
use tracing::{trace, warn};

use crate::NoiseMap;

/// Behavior of a seat from the standard tables.  `None` for coaches that
/// belong to no noise group.
pub fn classify_behavior(coach: CoachId, seat_index: usize) -> Option<Behavior> {
    NoiseMap::standard().behavior(coach, seat_index)
}

/// Display colour of a seat from the standard tables.
pub fn seat_color(coach: CoachId, seat_index: usize) -> Rgb {
    NoiseMap::standard().color(coach, seat_index)
}

/// Pluggable behavior source used by the lattice builder.
///
/// Receives the build's [`SeatRng`] so that any random draw is reproducible
/// under a fixed seed.
pub trait BehaviorClassifier {
    fn classify(&self, coach: CoachId, seat_index: usize, rng: &mut SeatRng) -> Behavior;
}

/// Table lookup with a coin-flip for coaches outside every group.
#[derive(Copy, Clone, Debug)]
pub struct NoiseTableClassifier<'a> {
    map: &'a NoiseMap,
}

impl<'a> NoiseTableClassifier<'a> {
    pub fn new(map: &'a NoiseMap) -> Self {
        Self { map }
    }

    pub fn map(&self) -> &'a NoiseMap {
        self.map
    }
}

impl Default for NoiseTableClassifier<'static> {
    fn default() -> Self {
        Self::new(NoiseMap::standard())
    }
}

impl BehaviorClassifier for NoiseTableClassifier<'_> {
    fn classify(&self, coach: CoachId, seat_index: usize, rng: &mut SeatRng) -> Behavior {
        if let Some(behavior) = self.map.behavior(coach, seat_index) {
            return behavior;
        }
        if seat_index == 0 {
            warn!(coach = coach.0, "coach has no noise table; behavior drawn at random");
        }
        let behavior = if rng.gen_bool(0.5) { Behavior::Quiet } else { Behavior::Social };
        trace!(coach = coach.0, seat_index, %behavior, "random behavior");
        behavior
    }
}

/// Every seat gets the same behavior.  Handy in tests.
#[derive(Copy, Clone, Debug, Default)]
pub struct FixedBehavior(pub Behavior);

impl BehaviorClassifier for FixedBehavior {
    fn classify(&self, _coach: CoachId, _seat_index: usize, _rng: &mut SeatRng) -> Behavior {
        self.0
    }
}
