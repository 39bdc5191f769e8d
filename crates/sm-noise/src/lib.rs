//! `sm-noise`: seat "noise" values, colour ramp, and behavior classes.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | `tables`      | authored per-coach noise constants                        |
//! | [`map`]       | `NoiseMap`, `NoiseGroup`, `GroupLayout`, `NoiseLookup`    |
//! | [`classify`]  | `classify_behavior`, `seat_color`, `BehaviorClassifier`   |
//!
//! Lookups never fail: an out-of-range seat in a known group is neutral grey
//! and `Social`; a coach with no group has no table behavior and the
//! [`NoiseTableClassifier`] draws one from the build RNG.

pub mod classify;
pub mod map;
mod tables;


pub use classify::{
    BehaviorClassifier, FixedBehavior, NoiseTableClassifier, classify_behavior, seat_color,
};
pub use map::{GroupLayout, NoiseGroup, NoiseLookup, NoiseMap, QUIET_THRESHOLD};
