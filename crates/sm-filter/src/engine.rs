//! Pooled filtering across every coach of a lattice.

use sm_core::{CoachId, ScreenConfig, SeatId};
use sm_lattice::{Seat, TrainLattice};
use tracing::debug;

use crate::{FilterCriteria, PriorityPreference, priority_score};

/// Matches found in one coach.
#[derive(Clone, Debug, PartialEq)]
pub struct CoachMatches {
    pub coach:         CoachId,
    /// Seat-number order.
    pub seats:         Vec<SeatId>,
    pub average_score: f64,
}

impl CoachMatches {
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }
}

/// Result of one [`apply_filters`] pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterOutcome {
    /// Every match, highest score first.
    pub seat_ids:   Vec<SeatId>,
    /// Coach with the most matches; `None` when nothing matched.
    pub best_coach: Option<CoachId>,
    /// Only coaches with at least one match, in declared order.
    pub per_coach:  Vec<CoachMatches>,
}

impl FilterOutcome {
    pub fn len(&self) -> usize {
        self.seat_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seat_ids.is_empty()
    }

    pub fn message(&self) -> String {
        if self.is_empty() {
            "No records found. Try adjusting Record Types or Priority Preferences.".to_owned()
        } else {
            format!("Found {} records matching criteria across all coaches", self.len())
        }
    }
}

/// `true` when `seat` passes every criterion.  Checks run in a fixed order:
/// record type, priority, price, noise, seat-type toggles, availability.
pub fn seat_matches(seat: &Seat, criteria: &FilterCriteria, high_priority_threshold: u32) -> bool {
    if !criteria.allows_record(seat.category) {
        return false;
    }
    if criteria.priority == PriorityPreference::HighOnly
        && priority_score(seat) < high_priority_threshold
    {
        return false;
    }
    if !criteria.price.contains(seat.price) {
        return false;
    }
    if criteria.noise.is_some_and(|n| !n.accepts(seat.behavior)) {
        return false;
    }
    if !criteria.seat_types.allows(seat.category) {
        return false;
    }
    seat.is_available()
}

/// Filter every coach and pool the results.
pub fn apply_filters(
    lattice:  &TrainLattice,
    criteria: &FilterCriteria,
    config:   &ScreenConfig,
) -> FilterOutcome {
    let threshold = config.high_priority_threshold;
    let mut pooled: Vec<(u32, SeatId)> = Vec::new();
    let mut per_coach = Vec::new();

    for coach in lattice.coaches() {
        let scored: Vec<(u32, SeatId)> = coach
            .seats
            .iter()
            .filter(|s| seat_matches(s, criteria, threshold))
            .map(|s| (priority_score(s), s.id))
            .collect();
        if scored.is_empty() {
            continue;
        }
        let total: u32 = scored.iter().map(|(score, _)| score).sum();
        per_coach.push(CoachMatches {
            coach:         coach.id(),
            seats:         scored.iter().map(|(_, id)| *id).collect(),
            average_score: f64::from(total) / scored.len() as f64,
        });
        pooled.extend(scored);
    }

    pooled.sort_by(|a, b| b.0.cmp(&a.0));

    let mut best: Option<&CoachMatches> = None;
    for m in &per_coach {
        let better = best.is_none_or(|b| {
            m.len() > b.len() || (m.len() == b.len() && m.average_score > b.average_score)
        });
        if better {
            best = Some(m);
        }
    }
    let best_coach = best.map(|m| m.coach);

    debug!(
        matches = pooled.len(),
        coaches = per_coach.len(),
        best_coach = ?best_coach.map(|c| c.0),
        "filters applied"
    );

    FilterOutcome {
        seat_ids: pooled.into_iter().map(|(_, id)| id).collect(),
        best_coach,
        per_coach,
    }
}
