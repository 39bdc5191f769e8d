//! Coach definitions and the fleet they form.

use std::collections::HashSet;

use sm_core::{CoachCategory, CoachId, Price};

use crate::{LatticeError, LatticeResult};

/// Static definition of one car.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coach {
    pub id:         CoachId,
    pub category:   CoachCategory,
    pub capacity:   u16,
    /// Advertised price of the car.  Seat prices come from the fare book.
    pub base_price: Price,
}

impl Coach {
    pub const fn new(id: CoachId, category: CoachCategory, capacity: u16, base_price: Price) -> Self {
        Self { id, category, capacity, base_price }
    }

    /// Number of whole compartments; 0 for open seating.
    pub fn compartment_count(&self) -> usize {
        self.category
            .compartment_size()
            .map_or(0, |size| self.capacity as usize / size)
    }
}

const STANDARD_COACHES: [Coach; 10] = [
    Coach::new(CoachId(1), CoachCategory::Seating, 28, Price(990_000)),
    Coach::new(CoachId(2), CoachCategory::Seating, 28, Price(990_000)),
    Coach::new(CoachId(3), CoachCategory::SixBerth, 42, Price(1_200_000)),
    Coach::new(CoachId(4), CoachCategory::SixBerth, 42, Price(1_200_000)),
    Coach::new(CoachId(5), CoachCategory::SixBerth, 42, Price(1_200_000)),
    Coach::new(CoachId(6), CoachCategory::FourBerth, 28, Price(1_500_000)),
    Coach::new(CoachId(7), CoachCategory::FourBerth, 28, Price(1_500_000)),
    Coach::new(CoachId(8), CoachCategory::FourBerth, 28, Price(1_500_000)),
    Coach::new(CoachId(9), CoachCategory::FourBerth, 28, Price(1_500_000)),
    Coach::new(CoachId(10), CoachCategory::FourBerth, 28, Price(1_500_000)),
];

/// The ordered list of coaches in one train.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fleet {
    coaches: Vec<Coach>,
}

impl Fleet {
    /// Validate and wrap a coach list.  Declared order is kept; it drives
    /// every "first coach that…" search.
    pub fn new(coaches: Vec<Coach>) -> LatticeResult<Self> {
        if coaches.is_empty() {
            return Err(LatticeError::Config("fleet has no coaches".into()));
        }
        let mut seen = HashSet::with_capacity(coaches.len());
        for coach in &coaches {
            if !seen.insert(coach.id) {
                return Err(LatticeError::DuplicateCoach(coach.id));
            }
            if coach.capacity == 0 {
                return Err(LatticeError::EmptyCoach(coach.id));
            }
        }
        Ok(Self { coaches })
    }

    /// Two seating, three six-berth and five four-berth coaches.
    pub fn standard() -> Self {
        Self { coaches: STANDARD_COACHES.to_vec() }
    }

    pub fn coaches(&self) -> &[Coach] {
        &self.coaches
    }

    pub fn get(&self, id: CoachId) -> Option<&Coach> {
        self.coaches.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.coaches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coaches.is_empty()
    }

    pub fn total_capacity(&self) -> usize {
        self.coaches.iter().map(|c| c.capacity as usize).sum()
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::standard()
    }
}
