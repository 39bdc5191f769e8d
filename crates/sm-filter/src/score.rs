//! Priority scoring.
//!
//! ```text
//! ambience   quiet: max(0, 11 - coach)     social: max(0, coach - 1)
//! category   four-berth 30 · six-berth 20 · seating 10
//! comfort    +5 not near the toilet · +3 near similar behavior
//! ```

use sm_core::{Behavior, CoachCategory};
use sm_lattice::Seat;

const NOT_NEAR_TOILET_BONUS: u32 = 5;
const SIMILAR_NEIGHBOURS_BONUS: u32 = 3;

fn category_bonus(category: CoachCategory) -> u32 {
    match category {
        CoachCategory::FourBerth => 30,
        CoachCategory::SixBerth  => 20,
        CoachCategory::Seating   => 10,
    }
}

/// Score a seat using its own coach and category.
pub fn priority_score(seat: &Seat) -> u32 {
    let coach = u32::from(seat.id.coach.0);
    let ambience = match seat.behavior {
        Behavior::Quiet  => 11u32.saturating_sub(coach),
        Behavior::Social => coach.saturating_sub(1),
    };
    let mut score = ambience + category_bonus(seat.category);
    if !seat.near_toilet {
        score += NOT_NEAR_TOILET_BONUS;
    }
    if seat.near_similar_behavior {
        score += SIMILAR_NEIGHBOURS_BONUS;
    }
    score
}
