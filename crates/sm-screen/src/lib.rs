//! `sm-screen`: one seat-selection session, from route parameters to the
//! checkout hand-off.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`params`]      | `RouteParams` (query-string input)                    |
//! | [`selection`]   | `Selection`, `ToggleOutcome`                          |
//! | [`debounce`]    | `Debouncer<T>`                                        |
//! | [`notice`]      | `Notice`, `ScreenObserver`, `NoopObserver`, `NoticeLog` |
//! | [`screen`]      | `SeatScreen`                                          |
//! | [`builder`]     | `ScreenBuilder`                                       |
//! | [`checkout`]    | `CheckoutRecord`                                      |
//! | [`writer`]      | `CheckoutWriter`, `JsonSessionWriter`, `CsvCheckoutLog` |
//! | [`error`]       | `ScreenError`, `ScreenResult<T>`                      |
//!
//! # Time
//!
//! The screen never reads the clock.  Methods that start or fire the price
//! debounce take an `Instant` from the caller.

pub mod builder;
pub mod checkout;
pub mod debounce;
pub mod error;
pub mod notice;
pub mod params;
pub mod screen;
pub mod selection;
pub mod writer;

#[cfg(test)]
mod tests;

pub use builder::ScreenBuilder;
pub use checkout::CheckoutRecord;
pub use debounce::Debouncer;
pub use error::{ScreenError, ScreenResult};
pub use notice::{NoopObserver, Notice, NoticeLog, ScreenObserver};
pub use params::{RouteParams, UNKNOWN_TRAIN_NAME};
pub use screen::SeatScreen;
pub use selection::{Selection, ToggleOutcome};
pub use writer::{CheckoutWriter, CsvCheckoutLog, JsonSessionWriter};
