//! Injectable random source for seat synthesis.
//!
//! Occupancy and the fallback behavior draw are the only random inputs in
//! the whole core.  Both go through [`SeatRng`], which the caller owns and
//! passes down, so a fixed seed reproduces an identical train layout.
//!
//! Production screens use [`SeatRng::from_entropy`]; tests use
//! [`SeatRng::new`] with a literal seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Screen-level RNG.  Single-threaded use only.
pub struct SeatRng(SmallRng);

impl SeatRng {
    pub fn new(seed: u64) -> Self {
        SeatRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from the operating system; layouts are not reproducible.
    pub fn from_entropy() -> Self {
        SeatRng(SmallRng::from_entropy())
    }

    /// Derive a child `SeatRng` with a different seed offset.  The lattice
    /// builder gives each coach its own child stream.
    pub fn child(&mut self, offset: u64) -> SeatRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SeatRng(SmallRng::seed_from_u64(child_seed))
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
