//! Passenger composition of one booking.

/// Head counts per fare class.  Supplied by the navigation layer and never
/// mutated by the seat-selection core.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Party {
    pub adult:   u32,
    pub child:   u32,
    pub elderly: u32,
    pub student: u32,
    pub union:   u32,
}

impl Party {
    /// A party of `n` adults.
    pub fn adults(n: u32) -> Self {
        Party { adult: n, ..Party::default() }
    }

    /// Total passengers; the upper bound on selection size.  Saturates
    /// instead of overflowing on absurd counts.
    #[inline]
    pub fn total(&self) -> usize {
        [self.adult, self.child, self.elderly, self.student, self.union]
            .into_iter()
            .fold(0usize, |acc, n| acc.saturating_add(n as usize))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// `true` when the party should be seated near the toilet.
    #[inline]
    pub fn has_children_or_elderly(&self) -> bool {
        self.child > 0 || self.elderly > 0
    }

    /// Human-readable summary, e.g. `"2 adults, 1 child"`.  Zero counts are
    /// omitted.
    pub fn description(&self) -> String {
        let parts = [
            (self.adult, "adult", "adults"),
            (self.child, "child", "children"),
            (self.elderly, "elderly", "elderly"),
            (self.student, "student", "students"),
            (self.union, "union member", "union members"),
        ];
        parts
            .iter()
            .filter(|(n, _, _)| *n > 0)
            .map(|(n, one, many)| format!("{n} {}", if *n == 1 { one } else { many }))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
