//! Seat synthesis for one coach.
//!
//! Seats are numbered 1..=capacity in physical order.  For sleepers the
//! number encodes the position:
//!
//! ```text
//! number = compartment * size + (floor - 1) * 2 + position + 1
//! ```
//!
//! so a plain loop over numbers visits compartment → floor → position.

use sm_core::{CoachCategory, SeatId, SeatNo, SeatRng};
use sm_fare::RoutePricing;
use sm_noise::BehaviorClassifier;

use crate::seat::{SEATING_ROW_WIDTH, Seat, SeatStatus, toilet_distance};
use crate::Coach;

/// Toilet distance up to which a seating-coach seat counts as near it.
const NEAR_TOILET_DISTANCE: f64 = 1.0;

/// Synthesize every seat of `coach`.
///
/// Each seat is independently `Occupied` with probability `occupancy`,
/// priced through `pricing` and classified by `classifier`.  The result
/// always holds exactly `coach.capacity` seats.
pub fn build_seats(
    coach:      &Coach,
    pricing:    &RoutePricing<'_>,
    classifier: &dyn BehaviorClassifier,
    rng:        &mut SeatRng,
    occupancy:  f64,
) -> Vec<Seat> {
    let mut seats: Vec<Seat> = (1..=coach.capacity)
        .map(|n| {
            let number = SeatNo(n);
            let index = number.zero_based();
            let (compartment, floor) = position(coach.category, index);
            let status = if rng.gen_bool(occupancy) {
                SeatStatus::Occupied
            } else {
                SeatStatus::Available
            };
            Seat {
                id: SeatId::new(coach.id, number),
                index,
                compartment,
                floor,
                category: coach.category,
                price: pricing.price(coach.category, coach.id, number),
                status,
                behavior: classifier.classify(coach.id, index, rng),
                near_toilet: false,
                near_similar_behavior: false,
                passengers_nearby: 0,
            }
        })
        .collect();

    annotate(&mut seats);
    seats
}

/// `(compartment or row, floor)` of a zero-based seat index.
pub fn position(category: CoachCategory, index: usize) -> (u16, u8) {
    match category.compartment_size() {
        None => ((index / SEATING_ROW_WIDTH) as u16, 1),
        Some(size) => ((index / size) as u16, ((index % size) / 2 + 1) as u8),
    }
}

/// Fill the proximity fields from the synthesized layout.
fn annotate(seats: &mut [Seat]) {
    let snapshot: Vec<(u16, bool, sm_core::Behavior)> = seats
        .iter()
        .map(|s| (s.compartment, s.status == SeatStatus::Occupied, s.behavior))
        .collect();

    for seat in seats.iter_mut() {
        seat.near_toilet = match seat.category {
            CoachCategory::Seating => toilet_distance(seat.category, seat.index) <= NEAR_TOILET_DISTANCE,
            _ => seat.compartment == 0,
        };

        let neighbours = snapshot
            .iter()
            .enumerate()
            .filter(|&(i, &(group, _, _))| i != seat.index && group == seat.compartment);

        let mut occupied = 0u8;
        let mut similar = false;
        for (i, &(_, is_occupied, behavior)) in neighbours {
            if is_occupied {
                occupied = occupied.saturating_add(1);
            }
            let adjacent = match seat.category {
                CoachCategory::Seating => i.abs_diff(seat.index) == 1,
                _ => true,
            };
            if adjacent && behavior == seat.behavior {
                similar = true;
            }
        }
        seat.passengers_nearby = occupied;
        seat.near_similar_behavior = similar;
    }
}
