//! The fare book and per-seat price resolution.
//!
//! # Shape
//!
//! ```text
//! FareBook
//!   └─ TrainFares   (one per train id, e.g. "SE1")
//!        └─ RouteFares  (origin → destination)
//!             └─ fare key → FareEntry { car, row, price }
//! ```
//!
//! Fare keys follow the generated dataset: `"<train>-<tag>-<car>-<seat>"`
//! with tag `ngoi`, `k6` or `k4` (see [`fare_key`]).
//!
//! # Failure model
//!
//! Resolution never fails.  Any miss yields the category default from
//! [`CoachCategory::default_price`]: unknown train, unknown route, a seat
//! absent from the route, or a non-positive stored fare.

use std::collections::HashMap;

use sm_core::{CoachCategory, CoachId, Price, SeatNo};
use tracing::{debug, trace, warn};

use crate::normalize::normalize_station;

// ── Keys ──────────────────────────────────────────────────────────────────────

/// Lookup key of one seat inside a route's flat fare map.
pub fn fare_key(train_id: &str, category: CoachCategory, coach: CoachId, seat: SeatNo) -> String {
    format!("{train_id}-{}-{}-{}", category.fare_tag(), coach.0, seat.0)
}

/// Row (seating) or compartment (sleepers) a seat number falls in, 1-based.
pub fn fare_row(category: CoachCategory, seat: SeatNo) -> u16 {
    let per_row = category.compartment_size().unwrap_or(2) as u16;
    seat.0.div_ceil(per_row)
}

// ── Entries ───────────────────────────────────────────────────────────────────

/// One priced seat in a route table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FareEntry {
    pub car:   u8,
    pub row:   u16,
    pub price: Price,
}

/// All seat fares for one origin → destination pair of one train.
#[derive(Clone, Debug, Default)]
pub struct RouteFares {
    /// Station names as written in the source data.
    pub origin:      String,
    pub destination: String,
    origin_key:      String,
    destination_key: String,
    seats:           HashMap<String, FareEntry>,
}

impl RouteFares {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        let origin = origin.into();
        let destination = destination.into();
        Self {
            origin_key: normalize_station(&origin),
            destination_key: normalize_station(&destination),
            origin,
            destination,
            seats: HashMap::new(),
        }
    }

    /// Insert or replace the fare stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, entry: FareEntry) {
        self.seats.insert(key.into(), entry);
    }

    pub fn get(&self, key: &str) -> Option<&FareEntry> {
        self.seats.get(key)
    }

    /// Exact match on normalised station names.
    pub fn matches(&self, origin_key: &str, destination_key: &str) -> bool {
        self.origin_key == origin_key && self.destination_key == destination_key
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Count of entries per fare tag (`ngoi`, `k6`, `k4`).
    pub fn breakdown(&self) -> [(CoachCategory, usize); 3] {
        CoachCategory::ALL.map(|cat| {
            let needle = format!("-{}-", cat.fare_tag());
            (cat, self.seats.keys().filter(|k| k.contains(&needle)).count())
        })
    }
}

/// Every published route of one train.
#[derive(Clone, Debug, Default)]
pub struct TrainFares {
    pub train_id: String,
    pub routes:   Vec<RouteFares>,
}

impl TrainFares {
    pub fn new(train_id: impl Into<String>) -> Self {
        Self { train_id: train_id.into(), routes: Vec::new() }
    }

    /// First route whose normalised stations equal the normalised inputs.
    pub fn route(&self, origin: &str, destination: &str) -> Option<&RouteFares> {
        let from = normalize_station(origin);
        let to = normalize_station(destination);
        self.routes.iter().find(|r| r.matches(&from, &to))
    }

    /// Mutable access to the route for `origin → destination`, created if
    /// absent.
    pub fn route_mut(&mut self, origin: &str, destination: &str) -> &mut RouteFares {
        let from = normalize_station(origin);
        let to = normalize_station(destination);
        match self.routes.iter().position(|r| r.matches(&from, &to)) {
            Some(i) => &mut self.routes[i],
            None => {
                self.routes.push(RouteFares::new(origin, destination));
                let last = self.routes.len() - 1;
                &mut self.routes[last]
            }
        }
    }
}

// ── FareBook ──────────────────────────────────────────────────────────────────

/// Read-only fare data for every train that publishes a per-route table.
#[derive(Clone, Debug, Default)]
pub struct FareBook {
    trains: HashMap<String, TrainFares>,
}

impl FareBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable access to a train's fares, created if absent.
    pub fn train_mut(&mut self, train_id: &str) -> &mut TrainFares {
        self.trains
            .entry(train_id.to_owned())
            .or_insert_with(|| TrainFares::new(train_id))
    }

    /// Add (or replace) a whole train's table.
    pub fn insert_train(&mut self, fares: TrainFares) {
        self.trains.insert(fares.train_id.clone(), fares);
    }

    pub fn train(&self, train_id: &str) -> Option<&TrainFares> {
        self.trains.get(train_id)
    }

    pub fn has_train(&self, train_id: &str) -> bool {
        self.trains.contains_key(train_id)
    }

    /// Ids of all trains with a table, sorted.
    pub fn train_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.trains.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn train_count(&self) -> usize {
        self.trains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }

    /// Resolve a route once so that every seat of a lattice build can be
    /// priced against it.
    pub fn route_pricing(&self, train_id: &str, origin: &str, destination: &str) -> RoutePricing<'_> {
        let Some(train) = self.train(train_id) else {
            debug!(train_id, "no fare table for train; using category defaults");
            return RoutePricing::defaults(train_id);
        };
        let route = train.route(origin, destination);
        match route {
            Some(r) => debug!(
                train_id,
                origin = %r.origin,
                destination = %r.destination,
                entries = r.len(),
                "fare route resolved"
            ),
            None => warn!(
                train_id,
                origin = %normalize_station(origin),
                destination = %normalize_station(destination),
                available = train.routes.len(),
                "route not found in fare table; using category defaults"
            ),
        }
        RoutePricing { train_id: train_id.to_owned(), route }
    }
}

// ── RoutePricing ──────────────────────────────────────────────────────────────

/// The fare table of one train on one route, or nothing (defaults only).
#[derive(Clone, Debug)]
pub struct RoutePricing<'a> {
    train_id: String,
    route:    Option<&'a RouteFares>,
}

impl<'a> RoutePricing<'a> {
    /// Pricing with no table: every seat gets its category default.
    pub fn defaults(train_id: &str) -> Self {
        Self { train_id: train_id.to_owned(), route: None }
    }

    pub fn train_id(&self) -> &str {
        &self.train_id
    }

    pub fn route(&self) -> Option<&'a RouteFares> {
        self.route
    }

    /// `true` when a route table was found.
    pub fn has_route(&self) -> bool {
        self.route.is_some()
    }

    /// Price of one seat.  Falls back to the category default per seat.
    pub fn price(&self, category: CoachCategory, coach: CoachId, seat: SeatNo) -> Price {
        let Some(route) = self.route else {
            return category.default_price();
        };
        let key = fare_key(&self.train_id, category, coach, seat);
        match route.get(&key) {
            Some(entry) if !entry.price.is_zero() => entry.price,
            Some(_) => {
                warn!(%key, "zero fare in table; using category default");
                category.default_price()
            }
            None => {
                trace!(%key, "seat absent from fare table; using category default");
                category.default_price()
            }
        }
    }
}

/// One-shot form of [`RoutePricing::price`] for callers pricing a single
/// seat.  A missing book behaves like a book without the train.
pub fn resolve_price(
    book:        Option<&FareBook>,
    train_id:    &str,
    origin:      &str,
    destination: &str,
    category:    CoachCategory,
    coach:       CoachId,
    seat:        SeatNo,
) -> Price {
    match book {
        Some(b) => b.route_pricing(train_id, origin, destination).price(category, coach, seat),
        None => category.default_price(),
    }
}
