//! `sm-filter`: filter criteria, priority scoring, and the price histogram.
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`record`]      | `RecordType` catalogue                                |
//! | [`criteria`]    | `FilterCriteria`, `PriceRange`, preferences, toggles  |
//! | [`score`]       | `priority_score`                                      |
//! | [`engine`]      | `apply_filters`, `FilterOutcome`                      |
//! | [`histogram`]   | `PriceHistogram`                                      |
//!
//! Filtering never fails: zero matches is an ordinary outcome and the
//! caller decides how to report it.

pub mod criteria;
pub mod engine;
pub mod histogram;
pub mod record;
pub mod score;


pub use criteria::{
    FilterCriteria, NoisePreference, PriceRange, PriorityPreference, SeatTypeToggles,
};
pub use engine::{CoachMatches, FilterOutcome, apply_filters, seat_matches};
pub use histogram::PriceHistogram;
pub use record::RecordType;
pub use score::priority_score;
