//! Price distribution for the range slider.

use sm_core::{Price, ScreenConfig};
use sm_lattice::TrainLattice;

use crate::PriceRange;

/// Equal-width bins spanning the lowest to the highest seat price.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceHistogram {
    min:    Price,
    max:    Price,
    counts: Vec<usize>,
}

impl PriceHistogram {
    /// Bin `prices` into `bin_count` buckets (at least one).  With no prices
    /// the span is `empty_bounds` and every bin is zero.
    pub fn new(
        prices:       impl IntoIterator<Item = Price>,
        bin_count:    usize,
        empty_bounds: (Price, Price),
    ) -> Self {
        let prices: Vec<Price> = prices.into_iter().collect();
        let (min, max) = match (prices.iter().min(), prices.iter().max()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => empty_bounds,
        };
        let mut hist = Self { min, max, counts: vec![0; bin_count.max(1)] };
        let width = hist.bin_width();
        let last = hist.counts.len() - 1;
        for p in prices {
            let offset = p.0.saturating_sub(min.0) as f64;
            let idx = ((offset / width).floor() as usize).min(last);
            hist.counts[idx] += 1;
        }
        hist
    }

    /// Histogram of every seat price in the lattice, regardless of status.
    pub fn from_lattice(lattice: &TrainLattice, config: &ScreenConfig) -> Self {
        Self::new(
            lattice.prices(),
            config.histogram_bins,
            (config.default_min_price, config.default_max_price),
        )
    }

    pub fn min(&self) -> Price {
        self.min
    }

    pub fn max(&self) -> Price {
        self.max
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// 1 when every price is equal.
    pub fn bin_width(&self) -> f64 {
        if self.max > self.min {
            (self.max.0 - self.min.0) as f64 / self.counts.len() as f64
        } else {
            1.0
        }
    }

    /// `[start, end)` of bin `index` in currency units.
    pub fn bin_bounds(&self, index: usize) -> (f64, f64) {
        let width = self.bin_width();
        let start = self.min.0 as f64 + index as f64 * width;
        (start, start + width)
    }

    /// Tallest bin, for scaling bar heights.
    pub fn peak(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// A bin is active when it overlaps the open interval of `range`.
    pub fn is_active(&self, index: usize, range: PriceRange) -> bool {
        let (start, end) = self.bin_bounds(index);
        end > range.min().0 as f64 && start < range.max().0 as f64
    }
}
