//! User-facing advisories and the observer that receives them.

use std::fmt;

use sm_core::{CoachId, Price, SeatId};
use sm_filter::FilterOutcome;
use sm_lattice::TrainLattice;
use sm_select::Outcome;

/// A non-blocking message for the user.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    /// A seat click was refused because the party is already seated.
    SelectionLimit { limit: usize },
    /// Slider bounds with `min > max` were ignored.
    InvalidPriceRange { min: Price, max: Price },
    /// The filter was run with no record type ticked.
    NoRecordTypes,
    /// Result of an auto-selection.
    AutoSelect { outcome: Outcome, message: String },
    /// Result of a filter pass.
    FilterResult { matches: usize, best_coach: Option<CoachId> },
    FiltersReset,
    /// The fare table could not be loaded; category defaults are in use.
    FaresUnavailable { reason: String },
    /// The party includes children or elderly passengers.
    ToiletSuggestion,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::SelectionLimit { limit } => write!(
                f,
                "You have already selected {limit} seat{}. Please unselect a seat first if you want to choose a different one.",
                if *limit == 1 { "" } else { "s" }
            ),
            Notice::InvalidPriceRange { min, max } => {
                write!(f, "Minimum price {min} is above maximum {max}; range unchanged.")
            }
            Notice::NoRecordTypes => f.write_str("Please select at least one Record Type"),
            Notice::AutoSelect { message, .. } => f.write_str(message),
            Notice::FilterResult { matches: 0, .. } => {
                f.write_str("No records found. Try adjusting Record Types or Priority Preferences.")
            }
            Notice::FilterResult { matches, .. } => {
                write!(f, "Found {matches} records matching criteria across all coaches")
            }
            Notice::FiltersReset => f.write_str("All Record Types and Preferences reset successfully"),
            Notice::FaresUnavailable { reason } => {
                write!(f, "Fare table unavailable ({reason}); showing standard prices.")
            }
            Notice::ToiletSuggestion => f.write_str(
                "Travelling with children or elderly passengers? Seats near the toilet may be more convenient.",
            ),
        }
    }
}

/// Callbacks invoked by [`SeatScreen`][crate::SeatScreen] as its state
/// changes.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait ScreenObserver {
    fn on_notice(&mut self, _notice: &Notice) {}

    /// Called after every lattice (re)build.
    fn on_lattice_built(&mut self, _lattice: &TrainLattice) {}

    fn on_selection_changed(&mut self, _seats: &[SeatId]) {}

    fn on_filter_applied(&mut self, _outcome: &FilterOutcome) {}
}

/// A [`ScreenObserver`] that does nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl ScreenObserver for NoopObserver {}

/// Keeps every notice, in order.
#[derive(Clone, Debug, Default)]
pub struct NoticeLog {
    pub notices: Vec<Notice>,
}

impl NoticeLog {
    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }

    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl ScreenObserver for NoticeLog {
    fn on_notice(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}
