//! One seat or berth and its derived attributes.

use sm_core::{Behavior, CoachCategory, Price, Rgb, SeatId};

/// Booking state of a seat.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SeatStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
    /// Held by the current selection.
    Selected,
}

impl SeatStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SeatStatus::Available => "available",
            SeatStatus::Occupied  => "occupied",
            SeatStatus::Reserved  => "reserved",
            SeatStatus::Selected  => "selected",
        }
    }
}

impl std::fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seats in one row of an open-seating coach.
pub const SEATING_ROW_WIDTH: usize = 4;

/// Grid column of the toilet in a seating coach (row 0).
const TOILET_COLUMN: f64 = 3.0;

/// Distance of a seat from the toilet end of its coach.
///
/// Seating coaches are a 4-across grid with the toilet at row 0, column 3,
/// and the distance is Euclidean over grid cells.  In sleeper coaches it is
/// the compartment index.
pub fn toilet_distance(category: CoachCategory, seat_index: usize) -> f64 {
    match category.compartment_size() {
        None => {
            let row = (seat_index / SEATING_ROW_WIDTH) as f64;
            let col = (seat_index % SEATING_ROW_WIDTH) as f64;
            (row * row + (col - TOILET_COLUMN).powi(2)).sqrt()
        }
        Some(size) => (seat_index / size) as f64,
    }
}

/// A synthesized seat.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat {
    pub id:       SeatId,
    /// Zero-based position in the coach.
    pub index:    usize,
    /// Compartment for sleepers, grid row for seating.
    pub compartment: u16,
    /// 1 = lower.
    pub floor:    u8,
    pub category: CoachCategory,
    pub price:    Price,
    pub status:   SeatStatus,
    pub behavior: Behavior,
    pub near_toilet:           bool,
    pub near_similar_behavior: bool,
    /// Occupied seats sharing this seat's compartment or row.
    pub passengers_nearby:     u8,
}

impl Seat {
    #[inline]
    pub fn is_available(&self) -> bool {
        self.status == SeatStatus::Available
    }

    #[inline]
    pub fn toilet_distance(&self) -> f64 {
        toilet_distance(self.category, self.index)
    }

    /// Noise-ramp colour from the standard tables.
    pub fn color(&self) -> Rgb {
        sm_noise::seat_color(self.id.coach, self.index)
    }
}
