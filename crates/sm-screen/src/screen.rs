//! The `SeatScreen` session: one train, one route, one party.

use std::fmt::Display;
use std::time::Instant;

use sm_core::{CoachId, Party, Price, ScreenConfig, SeatId, SeatRng, SmError};
use sm_fare::{FareBook, FareResult, RoutePricing};
use sm_filter::{
    FilterCriteria, FilterOutcome, NoisePreference, PriceHistogram, PriceRange,
    PriorityPreference, RecordType, SeatTypeToggles, apply_filters,
};
use sm_lattice::{Fleet, LatticeBuilder, TrainLattice};
use sm_select::AutoSelection;
use tracing::{debug, warn};

use crate::{
    CheckoutRecord, CheckoutWriter, Debouncer, Notice, NoopObserver, RouteParams, ScreenError,
    ScreenObserver, ScreenResult, Selection, ToggleOutcome,
};

/// Synthesize the lattice for `params` on `fleet`, priced from `fares` when
/// the book has the train.
pub(crate) fn build_lattice(
    config: &ScreenConfig,
    params: &RouteParams,
    fleet:  &Fleet,
    fares:  Option<&FareBook>,
) -> ScreenResult<TrainLattice> {
    let mut rng = match config.seed {
        Some(seed) => SeatRng::new(seed),
        None => SeatRng::from_entropy(),
    };
    let pricing = match fares {
        Some(book) => book.route_pricing(&params.train_id, &params.from, &params.to),
        None => RoutePricing::defaults(&params.train_id),
    };
    let lattice = LatticeBuilder::new(params.train_id.clone())
        .fleet(fleet.clone())
        .pricing(pricing)
        .occupancy_probability(config.occupancy_probability)
        .build(&mut rng)?;
    Ok(lattice)
}

/// Default criteria over the actual price span of `lattice`, or over the
/// configured defaults when it has no seats.
pub(crate) fn reset_criteria(lattice: &TrainLattice, config: &ScreenConfig) -> FilterCriteria {
    match lattice.price_bounds().and_then(|(lo, hi)| PriceRange::new(lo, hi)) {
        Some(range) => FilterCriteria::new(range),
        None => FilterCriteria::from_config(config),
    }
}

/// Seat-selection state for one train on one route.
///
/// Every user action is a method; none of them fail.  Refusals and empty
/// results are reported as [`Notice`]s through the observer `O`.  Only
/// construction, fare installation, coach switching and checkout return
/// `Result`.
///
/// Create via [`ScreenBuilder`][crate::ScreenBuilder].
pub struct SeatScreen<O: ScreenObserver = NoopObserver> {
    pub(crate) config:        ScreenConfig,
    pub(crate) params:        RouteParams,
    pub(crate) fleet:         Fleet,
    pub(crate) fares:         Option<FareBook>,
    pub(crate) lattice:       TrainLattice,
    pub(crate) selection:     Selection,
    pub(crate) active_coach:  CoachId,
    pub(crate) criteria:      FilterCriteria,
    pub(crate) filter_active: bool,
    pub(crate) filtered:      Option<FilterOutcome>,
    pub(crate) debounce:      Debouncer<PriceRange>,
    pub(crate) observer:      O,
}

impl<O: ScreenObserver> SeatScreen<O> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    pub fn party(&self) -> &Party {
        &self.params.party
    }

    pub fn train_name(&self) -> String {
        self.params.display_train_name()
    }

    pub fn lattice(&self) -> &TrainLattice {
        &self.lattice
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn active_coach(&self) -> CoachId {
        self.active_coach
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn is_filter_active(&self) -> bool {
        self.filter_active
    }

    /// Last filter result while the filter is active.
    pub fn filter_outcome(&self) -> Option<&FilterOutcome> {
        self.filtered.as_ref()
    }

    /// `true` when `id` is in the current filter result.
    pub fn is_highlighted(&self, id: SeatId) -> bool {
        self.filtered.as_ref().is_some_and(|f| f.seat_ids.contains(&id))
    }

    pub fn has_fares(&self) -> bool {
        self.fares.is_some()
    }

    pub fn pending_filter(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    fn notify(&mut self, notice: Notice) {
        debug!(%notice, "notice");
        self.observer.on_notice(&notice);
    }

    // ── Selection ─────────────────────────────────────────────────────────

    /// Select or deselect one seat.  Selecting past the party size is
    /// refused with [`Notice::SelectionLimit`].
    pub fn toggle_seat(&mut self, id: SeatId) -> ToggleOutcome {
        let outcome = self.selection.toggle(&mut self.lattice, id);
        match outcome {
            ToggleOutcome::Selected | ToggleOutcome::Deselected => {
                self.observer.on_selection_changed(self.selection.seats());
            }
            ToggleOutcome::LimitReached => {
                let limit = self.selection.limit();
                self.notify(Notice::SelectionLimit { limit });
            }
            ToggleOutcome::Unavailable | ToggleOutcome::UnknownSeat => {}
        }
        debug!(seat = %id, ?outcome, selected = self.selection.len(), "seat toggled");
        outcome
    }

    /// Replace the selection with the strategist's pick for the party.
    ///
    /// The current selection is released first so its seats count as free.
    pub fn auto_select(&mut self) -> AutoSelection {
        self.selection.clear(&mut self.lattice);
        let result = sm_select::auto_select(&self.lattice, &self.params.party);
        let taken = self.selection.extend(&mut self.lattice, &result.seats);
        if let Some(coach) = result.coach {
            self.active_coach = coach;
        }
        if let Some(message) = result.advisory() {
            self.notify(Notice::AutoSelect { outcome: result.outcome, message });
        }
        self.observer.on_selection_changed(self.selection.seats());
        debug!(
            strategy = ?result.strategy,
            outcome = ?result.outcome,
            taken,
            coach = ?result.coach.map(|c| c.0),
            "auto-selection applied"
        );
        result
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear(&mut self.lattice);
        self.observer.on_selection_changed(self.selection.seats());
    }

    pub fn total_price(&self) -> Price {
        self.selection.total_price(&self.lattice)
    }

    // ── Coaches ───────────────────────────────────────────────────────────

    pub fn set_active_coach(&mut self, id: CoachId) -> ScreenResult<()> {
        if self.lattice.coach(id).is_none() {
            return Err(SmError::CoachNotFound(id).into());
        }
        self.active_coach = id;
        Ok(())
    }

    // ── Filtering ─────────────────────────────────────────────────────────

    /// Move the price slider.  An inverted range is ignored with
    /// [`Notice::InvalidPriceRange`]; otherwise the bounds are stored and,
    /// while the filter is active, a re-run is scheduled after the debounce
    /// delay.  Returns whether the range was accepted.
    pub fn set_price_range(&mut self, min: Price, max: Price, now: Instant) -> bool {
        let Some(range) = PriceRange::new(min, max) else {
            self.notify(Notice::InvalidPriceRange { min, max });
            return false;
        };
        self.criteria.price = range;
        if self.filter_active {
            self.debounce.schedule(now, range);
        } else {
            self.debounce.cancel();
        }
        true
    }

    /// Run a debounced filter whose delay has elapsed.
    pub fn poll_timers(&mut self, now: Instant) -> Option<FilterOutcome> {
        let range = self.debounce.poll(now)?;
        if !self.filter_active {
            return None;
        }
        self.criteria.price = range;
        Some(self.run_filter())
    }

    pub fn set_record_types(&mut self, types: impl IntoIterator<Item = RecordType>) {
        self.criteria.record_types = types.into_iter().collect();
    }

    /// Tick or untick one record type; returns whether it is now ticked.
    pub fn toggle_record_type(&mut self, record: RecordType) -> bool {
        if self.criteria.record_types.remove(&record) {
            false
        } else {
            self.criteria.record_types.insert(record);
            true
        }
    }

    pub fn set_priority(&mut self, priority: PriorityPreference) {
        self.criteria.priority = priority;
    }

    pub fn set_noise_preference(&mut self, noise: Option<NoisePreference>) {
        self.criteria.noise = noise;
    }

    pub fn set_seat_types(&mut self, toggles: SeatTypeToggles) {
        self.criteria.seat_types = toggles;
    }

    /// Activate the filter and run it.  With no record type ticked nothing
    /// runs and [`Notice::NoRecordTypes`] is emitted.
    pub fn apply_filter(&mut self) -> Option<FilterOutcome> {
        if self.criteria.record_types.is_empty() {
            self.notify(Notice::NoRecordTypes);
            return None;
        }
        self.filter_active = true;
        Some(self.run_filter())
    }

    fn run_filter(&mut self) -> FilterOutcome {
        let outcome = apply_filters(&self.lattice, &self.criteria, &self.config);
        if let Some(best) = outcome.best_coach {
            self.active_coach = best;
        }
        self.notify(Notice::FilterResult {
            matches:    outcome.len(),
            best_coach: outcome.best_coach,
        });
        self.observer.on_filter_applied(&outcome);
        self.filtered = Some(outcome.clone());
        outcome
    }

    /// Restore every criterion, deactivate the filter and drop any pending
    /// re-run.  The price range returns to the train's actual span.
    pub fn reset_filter(&mut self) {
        self.criteria = reset_criteria(&self.lattice, &self.config);
        self.filter_active = false;
        self.filtered = None;
        self.debounce.cancel();
        self.notify(Notice::FiltersReset);
    }

    pub fn histogram(&self) -> PriceHistogram {
        PriceHistogram::from_lattice(&self.lattice, &self.config)
    }

    // ── Fares ─────────────────────────────────────────────────────────────

    /// Install a fare book that arrived after construction.  The lattice is
    /// rebuilt and the selection emptied.
    pub fn install_fares(&mut self, book: FareBook) -> ScreenResult<()> {
        self.fares = Some(book);
        self.rebuild()
    }

    /// Install the result of a fare load.  A failed load keeps default
    /// pricing and emits [`Notice::FaresUnavailable`].
    pub fn install_fare_result(&mut self, result: FareResult<FareBook>) -> ScreenResult<()> {
        match result {
            Ok(book) => self.install_fares(book),
            Err(e) => {
                self.report_fare_failure(&e);
                Ok(())
            }
        }
    }

    pub fn report_fare_failure(&mut self, reason: &dyn Display) {
        warn!(train_id = %self.params.train_id, %reason, "fare table unavailable; using default pricing");
        self.notify(Notice::FaresUnavailable { reason: reason.to_string() });
    }

    fn rebuild(&mut self) -> ScreenResult<()> {
        let lattice = build_lattice(&self.config, &self.params, &self.fleet, self.fares.as_ref())?;
        self.lattice = lattice;
        self.selection.forget();
        if self.lattice.coach(self.active_coach).is_none() {
            if let Some(first) = self.lattice.coaches().first() {
                self.active_coach = first.id();
            }
        }
        self.criteria.price = reset_criteria(&self.lattice, &self.config).price;
        self.debounce.cancel();
        self.observer.on_lattice_built(&self.lattice);
        self.observer.on_selection_changed(self.selection.seats());
        if self.filter_active {
            self.run_filter();
        }
        Ok(())
    }

    // ── Checkout ──────────────────────────────────────────────────────────

    /// Build the hand-off record.  Requires one seat per passenger.
    pub fn checkout(&self) -> ScreenResult<CheckoutRecord> {
        let required = self.params.party.total();
        let selected = self.selection.len();
        if selected == 0 || selected < required {
            return Err(ScreenError::IncompleteSelection { selected, required });
        }
        Ok(CheckoutRecord::new(&self.params, self.selection.joined(), self.total_price()))
    }

    /// [`checkout`](Self::checkout) and persist through `writer`.  The
    /// writer is not finished; callers flush it when the session ends.
    pub fn checkout_to(&self, writer: &mut dyn CheckoutWriter) -> ScreenResult<CheckoutRecord> {
        let record = self.checkout()?;
        writer.write(&record)?;
        debug!(seats = %record.selected_seats, total = %record.total_price, "checkout written");
        Ok(record)
    }
}
