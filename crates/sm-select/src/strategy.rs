//! The auto-selection decision table.
//!
//! | Party                          | Strategy                          |
//! |--------------------------------|-----------------------------------|
//! | any child or elderly           | `NearToilet`                      |
//! | 3                              | `FourBerthCompartment { take: 3 }`|
//! | 4                              | `FourBerthCompartment { take: 4 }`|
//! | 5                              | `SixBerthCompartment { take: 5 }` |
//! | 6                              | `SixBerthCompartment { take: 6 }` |
//! | 7                              | `SixBerthPlusOne`                 |
//! | anything else                  | `SameCoach`                       |
//!
//! Rows are tried top to bottom; the first match wins.

use sm_core::Party;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Seats closest to the toilet in the first coach with room.
    NearToilet,
    /// First `take` berths of an empty four-berth compartment.
    FourBerthCompartment { take: usize },
    /// First `take` berths of an empty six-berth compartment.
    SixBerthCompartment { take: usize },
    /// A whole six-berth compartment plus the nearest free seat.
    SixBerthPlusOne,
    /// First free seats of the first coach with room.
    SameCoach,
}

impl Strategy {
    /// Pick the strategy for a party.  `None` for an empty party.
    pub fn for_party(party: &Party) -> Option<Strategy> {
        let strategy = match party.total() {
            0 => return None,
            _ if party.has_children_or_elderly() => Strategy::NearToilet,
            n @ (3 | 4) => Strategy::FourBerthCompartment { take: n },
            n @ (5 | 6) => Strategy::SixBerthCompartment { take: n },
            7 => Strategy::SixBerthPlusOne,
            _ => Strategy::SameCoach,
        };
        Some(strategy)
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::NearToilet                  => "near-toilet",
            Strategy::FourBerthCompartment { .. } => "four-berth-compartment",
            Strategy::SixBerthCompartment { .. }  => "six-berth-compartment",
            Strategy::SixBerthPlusOne             => "six-berth-plus-one",
            Strategy::SameCoach                   => "same-coach",
        }
    }

    /// Message shown after a successful selection of `count` seats.
    pub fn advisory(self, count: usize) -> String {
        match self {
            Strategy::NearToilet => {
                format!("Auto-selected {count} seats near toilet for children/elderly comfort.")
            }
            Strategy::FourBerthCompartment { take: 4 } => {
                "Auto-selected 4-bed compartment for your group.".to_owned()
            }
            Strategy::FourBerthCompartment { take } => {
                format!("Auto-selected 4-bed compartment for your group of {take}.")
            }
            Strategy::SixBerthCompartment { take: 6 } => {
                "Auto-selected 6-bed compartment for your group.".to_owned()
            }
            Strategy::SixBerthCompartment { take } => {
                format!("Auto-selected 6-bed compartment for your group of {take}.")
            }
            Strategy::SixBerthPlusOne => {
                "Auto-selected 6-bed compartment + 1 adjacent seat for your group of 7.".to_owned()
            }
            Strategy::SameCoach => {
                format!("Auto-selected {count} seats with optimal arrangement.")
            }
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Shown when no strategy finds enough seats.
pub const MANUAL_SELECTION_ADVISORY: &str =
    "Unable to find optimal seat arrangement. Please select seats manually.";

/// Shown when a compartment strategy had to settle for plain same-coach seats.
pub fn fallback_advisory(count: usize) -> String {
    format!("No empty compartment was free; auto-selected {count} seats in one coach instead.")
}
