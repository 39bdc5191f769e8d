//! The user's current seat picks.

use sm_core::{Price, SeatId};
use sm_lattice::{SeatStatus, TrainLattice};

/// Result of [`Selection::toggle`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    /// Already as many seats as passengers; nothing changed.
    LimitReached,
    /// Occupied or reserved.
    Unavailable,
    UnknownSeat,
}

/// Ordered seat ids, at most `limit` of them.  Every held seat is marked
/// `Selected` in the lattice it was taken from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    seats: Vec<SeatId>,
    limit: usize,
}

impl Selection {
    pub fn new(limit: usize) -> Self {
        Self { seats: Vec::new(), limit }
    }

    pub fn seats(&self) -> &[SeatId] {
        &self.seats
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.seats.len() >= self.limit
    }

    pub fn contains(&self, id: SeatId) -> bool {
        self.seats.contains(&id)
    }

    /// Deselect `id` if held, otherwise select it when available and below
    /// the limit.
    pub fn toggle(&mut self, lattice: &mut TrainLattice, id: SeatId) -> ToggleOutcome {
        let Some(seat) = lattice.seat_mut(id) else {
            return ToggleOutcome::UnknownSeat;
        };
        if let Some(pos) = self.seats.iter().position(|&s| s == id) {
            self.seats.remove(pos);
            seat.status = SeatStatus::Available;
            return ToggleOutcome::Deselected;
        }
        if !seat.is_available() {
            return ToggleOutcome::Unavailable;
        }
        if self.is_full() {
            return ToggleOutcome::LimitReached;
        }
        seat.status = SeatStatus::Selected;
        self.seats.push(id);
        ToggleOutcome::Selected
    }

    /// Hold `ids` in order, skipping seats that are not available and
    /// stopping at the limit.  Returns how many were taken.
    pub fn extend(&mut self, lattice: &mut TrainLattice, ids: &[SeatId]) -> usize {
        let before = self.seats.len();
        for &id in ids {
            if self.is_full() {
                break;
            }
            if let Some(seat) = lattice.seat_mut(id).filter(|s| s.is_available()) {
                seat.status = SeatStatus::Selected;
                self.seats.push(id);
            }
        }
        self.seats.len() - before
    }

    /// Release every held seat back to `Available`.
    pub fn clear(&mut self, lattice: &mut TrainLattice) {
        for id in self.seats.drain(..) {
            if let Some(seat) = lattice.seat_mut(id) {
                if seat.status == SeatStatus::Selected {
                    seat.status = SeatStatus::Available;
                }
            }
        }
    }

    /// Forget the held ids without touching any lattice.  Used after the
    /// lattice has been replaced.
    pub fn forget(&mut self) {
        self.seats.clear();
    }

    pub fn total_price(&self, lattice: &TrainLattice) -> Price {
        self.seats.iter().filter_map(|&id| lattice.seat(id)).map(|s| s.price).sum()
    }

    /// `"6-5,6-6,6-7"`.
    pub fn joined(&self) -> String {
        self.seats.iter().map(SeatId::to_string).collect::<Vec<_>>().join(",")
    }
}
