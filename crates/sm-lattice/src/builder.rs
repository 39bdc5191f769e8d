//! Fluent builder for a [`TrainLattice`].
//!
//! # Usage
//!
//! ```rust,ignore
//! let book = load_fares_csv(path)?;
//! let pricing = book.route_pricing("SE1", "Hà Nội", "Sài Gòn");
//! let mut rng = SeatRng::new(42);
//! let lattice = LatticeBuilder::new("SE1")
//!     .pricing(pricing)
//!     .occupancy_probability(0.15)
//!     .build(&mut rng)?;
//! ```

use sm_core::SeatRng;
use sm_fare::RoutePricing;
use sm_noise::{BehaviorClassifier, NoiseTableClassifier};
use tracing::debug;

use crate::{CoachSeats, Fleet, LatticeError, LatticeResult, TrainLattice, build_seats};

/// Fluent builder for [`TrainLattice`].
///
/// # Optional inputs (have defaults)
///
/// | Method                       | Default                          |
/// |------------------------------|----------------------------------|
/// | `.fleet(f)`                  | `Fleet::standard()`              |
/// | `.pricing(p)`                | category defaults for every seat |
/// | `.classifier(c)`             | `NoiseTableClassifier::default()`|
/// | `.occupancy_probability(p)`  | `0.15`                           |
pub struct LatticeBuilder<'a> {
    train_id:   String,
    fleet:      Fleet,
    pricing:    Option<RoutePricing<'a>>,
    classifier: Option<&'a dyn BehaviorClassifier>,
    occupancy:  f64,
}

impl<'a> LatticeBuilder<'a> {
    pub fn new(train_id: impl Into<String>) -> Self {
        Self {
            train_id:   train_id.into(),
            fleet:      Fleet::standard(),
            pricing:    None,
            classifier: None,
            occupancy:  0.15,
        }
    }

    pub fn fleet(mut self, fleet: Fleet) -> Self {
        self.fleet = fleet;
        self
    }

    pub fn pricing(mut self, pricing: RoutePricing<'a>) -> Self {
        self.pricing = Some(pricing);
        self
    }

    pub fn classifier(mut self, classifier: &'a dyn BehaviorClassifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn occupancy_probability(mut self, p: f64) -> Self {
        self.occupancy = p;
        self
    }

    /// Synthesize every coach.  Each coach draws from its own child stream
    /// of `rng`, so a fixed seed gives an identical lattice.
    pub fn build(self, rng: &mut SeatRng) -> LatticeResult<TrainLattice> {
        if !(0.0..=1.0).contains(&self.occupancy) {
            return Err(LatticeError::Config(format!(
                "occupancy probability {} outside [0, 1]",
                self.occupancy
            )));
        }

        let pricing = self
            .pricing
            .unwrap_or_else(|| RoutePricing::defaults(&self.train_id));
        let fallback = NoiseTableClassifier::default();
        let classifier: &dyn BehaviorClassifier = match self.classifier {
            Some(c) => c,
            None => &fallback,
        };

        let coaches: Vec<CoachSeats> = self
            .fleet
            .coaches()
            .iter()
            .map(|coach| {
                let mut coach_rng = rng.child(u64::from(coach.id.0));
                let seats = build_seats(coach, &pricing, classifier, &mut coach_rng, self.occupancy);
                CoachSeats { coach: *coach, seats }
            })
            .collect();

        let lattice = TrainLattice::new(self.train_id, coaches);
        debug!(
            train_id = lattice.train_id(),
            coaches = lattice.coaches().len(),
            seats = lattice.seat_count(),
            priced_from_table = pricing.has_route(),
            "lattice built"
        );
        Ok(lattice)
    }
}
