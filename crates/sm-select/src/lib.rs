//! `sm-select`: automatic seat selection for a passenger party.
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`strategy`]  | `Strategy` decision table and advisory texts              |
//! | [`select`]    | `auto_select`, `AutoSelection`, `Outcome`                 |
//!
//! Compartment strategies fall back to the same-coach rule when no empty
//! compartment of the wanted kind exists.  A party of 7 whose compartment
//! has no free neighbour yields 6 seats and `Outcome::Partial`.

pub mod select;
pub mod strategy;


pub use select::{AutoSelection, Outcome, auto_select, empty_compartment, near_toilet, same_coach};
pub use strategy::{MANUAL_SELECTION_ADVISORY, Strategy};
