//! Strongly typed identifier wrappers.
//!
//! `CoachId` and `SeatNo` are thin integer newtypes generated by
//! [`typed_id!`].  A seat's full identity is the pair [`SeatId`], displayed
//! as `"<coach>-<number>"`, the form handed to checkout.

use std::fmt;
use std::str::FromStr;

use crate::SmError;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for arithmetic and indexing.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Coach number as painted on the car (1-based, declared order).
    pub struct CoachId(u8);
}

typed_id! {
    /// 1-based seat or berth number within a coach.
    pub struct SeatNo(u16);
}

impl SeatNo {
    /// Zero-based position of this seat inside its coach.
    #[inline]
    pub fn zero_based(self) -> usize {
        self.index().saturating_sub(1)
    }
}

// ── SeatId ────────────────────────────────────────────────────────────────────

/// Identity of one seat: the coach it belongs to and its number there.
///
/// Unique across a train and stable across lattice rebuilds for the same
/// fleet.  Ordering is coach-major, then seat number.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatId {
    pub coach:  CoachId,
    pub number: SeatNo,
}

impl SeatId {
    #[inline]
    pub fn new(coach: CoachId, number: SeatNo) -> Self {
        Self { coach, number }
    }

    /// Zero-based index of the seat inside its coach's seat vector.
    #[inline]
    pub fn seat_index(self) -> usize {
        self.number.zero_based()
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.coach.0, self.number.0)
    }
}

impl FromStr for SeatId {
    type Err = SmError;

    /// Parse the `"<coach>-<number>"` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (coach, number) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| SmError::Parse(format!("seat id {s:?}: expected \"<coach>-<number>\"")))?;
        let coach = coach
            .parse::<u8>()
            .map_err(|e| SmError::Parse(format!("seat id {s:?}: coach: {e}")))?;
        let number = number
            .parse::<u16>()
            .map_err(|e| SmError::Parse(format!("seat id {s:?}: number: {e}")))?;
        if number == 0 {
            return Err(SmError::Parse(format!("seat id {s:?}: seat numbers start at 1")));
        }
        Ok(SeatId::new(CoachId(coach), SeatNo(number)))
    }
}
