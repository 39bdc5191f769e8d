//! The seat store for one train on one route.

use sm_core::{CoachId, Price, SeatId, SmError};

use crate::{Coach, LatticeResult, Seat, SeatStatus};

/// One coach and its synthesized seats, in seat-number order.
#[derive(Clone, Debug)]
pub struct CoachSeats {
    pub coach: Coach,
    pub seats: Vec<Seat>,
}

impl CoachSeats {
    #[inline]
    pub fn id(&self) -> CoachId {
        self.coach.id
    }

    pub fn available(&self) -> impl Iterator<Item = &Seat> + '_ {
        self.seats.iter().filter(|s| s.is_available())
    }

    pub fn available_count(&self) -> usize {
        self.available().count()
    }

    /// Seats of compartment `index`; empty for seating coaches or an index
    /// past the last whole compartment.
    pub fn compartment(&self, index: usize) -> &[Seat] {
        let Some(size) = self.coach.category.compartment_size() else {
            return &[];
        };
        if index >= self.coach.compartment_count() {
            return &[];
        }
        let start = index * size;
        self.seats.get(start..start + size).unwrap_or(&[])
    }

    /// `true` when every seat of the compartment is available.
    pub fn is_compartment_empty(&self, index: usize) -> bool {
        let seats = self.compartment(index);
        !seats.is_empty() && seats.iter().all(Seat::is_available)
    }

    /// Lowest-numbered fully available compartment.
    pub fn first_empty_compartment(&self) -> Option<usize> {
        (0..self.coach.compartment_count()).find(|&i| self.is_compartment_empty(i))
    }
}

/// Every coach of a train with its seats.  Replaced wholesale on rebuild.
#[derive(Clone, Debug, Default)]
pub struct TrainLattice {
    train_id: String,
    coaches:  Vec<CoachSeats>,
}

impl TrainLattice {
    pub fn new(train_id: impl Into<String>, coaches: Vec<CoachSeats>) -> Self {
        Self { train_id: train_id.into(), coaches }
    }

    pub fn train_id(&self) -> &str {
        &self.train_id
    }

    /// Coaches in declared order.
    pub fn coaches(&self) -> &[CoachSeats] {
        &self.coaches
    }

    pub fn coach(&self, id: CoachId) -> Option<&CoachSeats> {
        self.coaches.iter().find(|c| c.id() == id)
    }

    /// Declared position of a coach.
    pub fn coach_position(&self, id: CoachId) -> Option<usize> {
        self.coaches.iter().position(|c| c.id() == id)
    }

    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.coach(id.coach)?.seats.get(id.seat_index()).filter(|s| s.id == id)
    }

    pub fn seat_mut(&mut self, id: SeatId) -> Option<&mut Seat> {
        self.coaches
            .iter_mut()
            .find(|c| c.id() == id.coach)?
            .seats
            .get_mut(id.seat_index())
            .filter(|s| s.id == id)
    }

    pub fn seats(&self) -> impl Iterator<Item = &Seat> + '_ {
        self.coaches.iter().flat_map(|c| c.seats.iter())
    }

    pub fn seat_count(&self) -> usize {
        self.coaches.iter().map(|c| c.seats.len()).sum()
    }

    /// Available seats of one coach; 0 for an unknown coach.
    pub fn available_count(&self, coach: CoachId) -> usize {
        self.coach(coach).map_or(0, CoachSeats::available_count)
    }

    pub fn prices(&self) -> impl Iterator<Item = Price> + '_ {
        self.seats().map(|s| s.price)
    }

    /// Lowest and highest seat price, or `None` for an empty lattice.
    pub fn price_bounds(&self) -> Option<(Price, Price)> {
        let min = self.prices().min()?;
        let max = self.prices().max()?;
        Some((min, max))
    }

    pub fn compartment_seats(&self, coach: CoachId, index: usize) -> &[Seat] {
        self.coach(coach).map(|c| c.compartment(index)).unwrap_or(&[])
    }

    pub fn is_compartment_empty(&self, coach: CoachId, index: usize) -> bool {
        self.coach(coach).is_some_and(|c| c.is_compartment_empty(index))
    }

    pub fn first_empty_compartment(&self, coach: CoachId) -> Option<usize> {
        self.coach(coach)?.first_empty_compartment()
    }

    /// Overwrite one seat's status.
    pub fn set_status(&mut self, id: SeatId, status: SeatStatus) -> LatticeResult<()> {
        let seat = self.seat_mut(id).ok_or(SmError::SeatNotFound(id))?;
        seat.status = status;
        Ok(())
    }

    /// Return every `Selected` seat to `Available`; yields how many changed.
    pub fn release_selected(&mut self) -> usize {
        let mut released = 0;
        for seat in self.coaches.iter_mut().flat_map(|c| c.seats.iter_mut()) {
            if seat.status == SeatStatus::Selected {
                seat.status = SeatStatus::Available;
                released += 1;
            }
        }
        released
    }
}
