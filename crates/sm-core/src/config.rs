//! Tunables for one seat-selection screen.

use std::time::Duration;

use crate::{Price, SmError, SmResult};

/// Screen configuration.
///
/// Typically built with `ScreenConfig::default()` and adjusted field by
/// field; applications that keep settings in a file enable the `serde`
/// feature and deserialise it directly.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScreenConfig {
    /// Probability that a freshly built seat is already occupied.
    pub occupancy_probability: f64,

    /// Delay between the last price-slider movement and the filter re-run.
    pub filter_debounce_ms: u64,

    /// Minimum priority score kept by the "high only" preference.
    pub high_priority_threshold: u32,

    /// Number of bars in the price-density histogram.
    pub histogram_bins: usize,

    /// Price bounds used before any seat prices are known.
    pub default_min_price: Price,
    pub default_max_price: Price,

    /// Fixed RNG seed.  `None` seeds from OS entropy, so occupancy differs
    /// on every rebuild.
    pub seed: Option<u64>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            occupancy_probability:   0.15,
            filter_debounce_ms:      300,
            high_priority_threshold: 25,
            histogram_bins:          20,
            default_min_price:       Price(100_000),
            default_max_price:       Price(2_000_000),
            seed:                    None,
        }
    }
}

impl ScreenConfig {
    #[inline]
    pub fn filter_debounce(&self) -> Duration {
        Duration::from_millis(self.filter_debounce_ms)
    }

    /// Reject settings that would make the screen misbehave.
    pub fn validate(&self) -> SmResult<()> {
        if !(0.0..=1.0).contains(&self.occupancy_probability) {
            return Err(SmError::Config(format!(
                "occupancy_probability {} outside [0, 1]",
                self.occupancy_probability
            )));
        }
        if self.histogram_bins == 0 {
            return Err(SmError::Config("histogram_bins must be at least 1".into()));
        }
        if self.default_min_price > self.default_max_price {
            return Err(SmError::Config(format!(
                "default price range inverted: {} > {}",
                self.default_min_price, self.default_max_price
            )));
        }
        Ok(())
    }
}
