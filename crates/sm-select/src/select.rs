//! `auto_select`: run the decision table against a lattice.
//!
//! Selection is read-only; the caller applies the returned seat ids.  Every
//! "first coach" search walks coaches in declared order.

use sm_core::{CoachCategory, CoachId, Party, SeatId};
use sm_lattice::{CoachSeats, Seat, TrainLattice};
use tracing::debug;

use crate::strategy::{MANUAL_SELECTION_ADVISORY, Strategy, fallback_advisory};

/// How an auto-selection ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Exactly one seat per passenger.
    Complete,
    /// Fewer seats than passengers (a party of 7 with no seat left beside
    /// the compartment).
    Partial,
    /// Nothing suitable; the user has to pick by hand.
    ManualSelectionRequired,
    /// The party has no passengers.
    EmptyParty,
}

/// Result of [`auto_select`].
#[derive(Clone, Debug, PartialEq)]
pub struct AutoSelection {
    pub seats:    Vec<SeatId>,
    /// Coach holding the result; becomes the active coach.
    pub coach:    Option<CoachId>,
    pub strategy: Option<Strategy>,
    /// A compartment strategy found no empty compartment and used the
    /// same-coach rule instead.
    pub fell_back: bool,
    pub outcome:  Outcome,
}

impl AutoSelection {
    fn empty(strategy: Option<Strategy>, outcome: Outcome) -> Self {
        Self { seats: Vec::new(), coach: None, strategy, fell_back: false, outcome }
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// User-facing message, or `None` for an empty party.
    pub fn advisory(&self) -> Option<String> {
        match (self.outcome, self.strategy) {
            (Outcome::EmptyParty, _) => None,
            (Outcome::ManualSelectionRequired, _) | (_, None) => {
                Some(MANUAL_SELECTION_ADVISORY.to_owned())
            }
            _ if self.fell_back => Some(fallback_advisory(self.seats.len())),
            (_, Some(strategy)) => Some(strategy.advisory(self.seats.len())),
        }
    }
}

/// Pick seats for `party` from the currently available seats of `lattice`.
pub fn auto_select(lattice: &TrainLattice, party: &Party) -> AutoSelection {
    let Some(strategy) = Strategy::for_party(party) else {
        return AutoSelection::empty(None, Outcome::EmptyParty);
    };
    let wanted = party.total();

    let (found, fell_back) = match strategy {
        Strategy::NearToilet => (near_toilet(lattice, wanted), false),
        Strategy::FourBerthCompartment { take } => {
            compartment_or_same_coach(lattice, CoachCategory::FourBerth, take)
        }
        Strategy::SixBerthCompartment { take } => {
            compartment_or_same_coach(lattice, CoachCategory::SixBerth, take)
        }
        Strategy::SixBerthPlusOne => {
            let (base, fell_back) = compartment_or_same_coach(lattice, CoachCategory::SixBerth, 6);
            (base.map(|pick| plus_nearest(lattice, pick)), fell_back)
        }
        Strategy::SameCoach => (same_coach(lattice, wanted), false),
    };

    let Some((coach, seats)) = found else {
        debug!(%strategy, wanted, "auto-select found no seats");
        return AutoSelection::empty(Some(strategy), Outcome::ManualSelectionRequired);
    };

    let outcome = if seats.len() == wanted { Outcome::Complete } else { Outcome::Partial };
    debug!(%strategy, coach = coach.0, picked = seats.len(), wanted, fell_back, "auto-select");
    AutoSelection { seats, coach: Some(coach), strategy: Some(strategy), fell_back, outcome }
}

type Pick = (CoachId, Vec<SeatId>);

fn ids<'a>(seats: impl IntoIterator<Item = &'a Seat>) -> Vec<SeatId> {
    seats.into_iter().map(|s| s.id).collect()
}

/// `n` seats nearest the toilet in the first coach with `n` free seats.
/// The sort is stable so equal distances keep seat order.
pub fn near_toilet(lattice: &TrainLattice, n: usize) -> Option<Pick> {
    lattice.coaches().iter().find_map(|c| {
        let mut free: Vec<&Seat> = c.available().collect();
        if free.len() < n {
            return None;
        }
        free.sort_by(|a, b| a.toilet_distance().total_cmp(&b.toilet_distance()));
        Some((c.id(), ids(free.into_iter().take(n))))
    })
}

/// First `take` berths of the first empty compartment among coaches of
/// `category`.
pub fn empty_compartment(lattice: &TrainLattice, category: CoachCategory, take: usize) -> Option<Pick> {
    lattice
        .coaches()
        .iter()
        .filter(|c| c.coach.category == category)
        .find_map(|c| {
            let index = c.first_empty_compartment()?;
            Some((c.id(), ids(c.compartment(index).iter().take(take))))
        })
}

/// First `n` free seats of the first coach with `n` free seats.
pub fn same_coach(lattice: &TrainLattice, n: usize) -> Option<Pick> {
    lattice
        .coaches()
        .iter()
        .find(|c| c.available_count() >= n)
        .map(|c| (c.id(), ids(c.available().take(n))))
}

fn compartment_or_same_coach(
    lattice:  &TrainLattice,
    category: CoachCategory,
    take:     usize,
) -> (Option<Pick>, bool) {
    match empty_compartment(lattice, category, take) {
        Some(pick) => (Some(pick), false),
        None => (same_coach(lattice, take), true),
    }
}

/// Add the free seat of the same coach nearest (by index) to the centre of
/// the picked seats.  Ties keep the lower index.  The pick is returned
/// unchanged when the coach has no other free seat.
fn plus_nearest(lattice: &TrainLattice, (coach, mut seats): Pick) -> Pick {
    let Some(coach_seats) = lattice.coach(coach) else {
        return (coach, seats);
    };
    if let Some(extra) = nearest_to_centre(coach_seats, &seats) {
        seats.push(extra);
    }
    (coach, seats)
}

fn nearest_to_centre(coach: &CoachSeats, picked: &[SeatId]) -> Option<SeatId> {
    let lo = picked.iter().map(|s| s.seat_index()).min()?;
    let hi = picked.iter().map(|s| s.seat_index()).max()?;
    let centre = (lo + hi) as f64 / 2.0;

    let mut best: Option<(f64, SeatId)> = None;
    for seat in coach.available().filter(|s| !picked.contains(&s.id)) {
        let distance = (seat.index as f64 - centre).abs();
        if best.is_none_or(|(d, _)| distance < d) {
            best = Some((distance, seat.id));
        }
    }
    best.map(|(_, id)| id)
}
