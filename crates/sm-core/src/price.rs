//! Fare amounts in base currency units (VND, no minor unit).

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A seat fare.  Integer arithmetic only; fares never go negative.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Price(pub u64);

impl Price {
    pub const ZERO: Price = Price(0);

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Compact thousands label shown under each seat: `990000` → `"990K"`.
    pub fn short_label(self) -> String {
        format!("{}K", (self.0 + 500) / 1000)
    }
}

impl Add for Price {
    type Output = Price;
    #[inline]
    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl From<u64> for Price {
    fn from(v: u64) -> Self {
        Price(v)
    }
}

impl fmt::Display for Price {
    /// Thousands-grouped with `.` as the separator (`1.200.000`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push('.');
            }
            out.push(ch);
        }
        f.write_str(&out)
    }
}
