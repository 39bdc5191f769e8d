//! `sm-core`: foundational types for the `rust_seatmap` seat-selection core.
//!
//! This crate is a dependency of every other `sm-*` crate.  It has no `sm-*`
//! dependencies and minimal external ones (`rand`, `thiserror`, optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`ids`]       | `CoachId`, `SeatNo`, `SeatId`                          |
//! | [`category`]  | `CoachCategory`, `Behavior`                            |
//! | [`price`]     | `Price`                                                |
//! | [`color`]     | `Rgb` and interpolation                                |
//! | [`party`]     | `Party` passenger composition                          |
//! | [`rng`]       | `SeatRng` (injectable, seedable)                       |
//! | [`config`]    | `ScreenConfig`                                         |
//! | [`error`]     | `SmError`, `SmResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod category;
pub mod color;
pub mod config;
pub mod error;
pub mod ids;
pub mod party;
pub mod price;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use category::{Behavior, CoachCategory};
pub use color::Rgb;
pub use config::ScreenConfig;
pub use error::{SmError, SmResult};
pub use ids::{CoachId, SeatId, SeatNo};
pub use party::Party;
pub use price::Price;
pub use rng::SeatRng;
