//! `sm-fare`: per-route seat fares and price resolution.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`normalize`] | `normalize_station`                                       |
//! | [`book`]      | `FareBook`, `TrainFares`, `RouteFares`, `RoutePricing`    |
//! | [`loader`]    | `load_fares_csv`, `load_fares_reader`                     |
//! | `generated`   | nested JSON dataset loader (feature `json`)               |
//! | [`error`]     | `FareError`, `FareResult<T>`                              |
//!
//! # Resolution (summary)
//!
//! ```text
//! train has table?  ── no ──▶ category default
//!   │ yes
//! route (normalised origin, destination) found?  ── no ──▶ category default
//!   │ yes
//! "<train>-<tag>-<car>-<seat>" present and > 0?  ── no ──▶ category default
//!   │ yes
//! stored fare
//! ```

pub mod book;
pub mod error;
pub mod loader;
pub mod normalize;

#[cfg(feature = "json")]
pub mod generated;


pub use book::{
    FareBook, FareEntry, RouteFares, RoutePricing, TrainFares, fare_key, fare_row, resolve_price,
};
pub use error::{FareError, FareResult};
pub use loader::{load_fares_csv, load_fares_reader};
pub use normalize::normalize_station;

#[cfg(feature = "json")]
pub use generated::{GeneratedTrainPricing, load_generated_json, load_generated_json_reader};
