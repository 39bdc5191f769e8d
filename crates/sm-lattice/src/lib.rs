//! `sm-lattice`: the synthesized seat layout of one train.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`coach`]     | `Coach`, `Fleet` (standard ten-coach train)               |
//! | [`seat`]      | `Seat`, `SeatStatus`, `toilet_distance`                   |
//! | [`build`]     | `build_seats` and the proximity annotation pass           |
//! | [`lattice`]   | `TrainLattice`, `CoachSeats`                              |
//! | [`builder`]   | `LatticeBuilder`                                          |
//! | [`error`]     | `LatticeError`, `LatticeResult<T>`                        |
//!
//! # Standard fleet
//!
//! | Coaches | Category   | Capacity | Layout                          |
//! |---------|------------|----------|---------------------------------|
//! | 1–2     | seating    | 28       | 7 rows × 4 across               |
//! | 3–5     | six-berth  | 42       | 7 compartments × 3 floors × 2   |
//! | 6–10    | four-berth | 28       | 7 compartments × 2 floors × 2   |

pub mod build;
pub mod builder;
pub mod coach;
pub mod error;
pub mod lattice;
pub mod seat;

#[cfg(test)]
mod tests;

pub use build::{build_seats, position};
pub use builder::LatticeBuilder;
pub use coach::{Coach, Fleet};
pub use error::{LatticeError, LatticeResult};
pub use lattice::{CoachSeats, TrainLattice};
pub use seat::{Seat, SeatStatus, toilet_distance};
