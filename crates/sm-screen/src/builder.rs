//! Fluent builder for a [`SeatScreen`].

use sm_core::ScreenConfig;
use sm_fare::FareBook;
use sm_lattice::Fleet;
use tracing::debug;

use crate::screen::{build_lattice, reset_criteria};
use crate::{
    Debouncer, Notice, NoopObserver, RouteParams, ScreenError, ScreenObserver, ScreenResult,
    SeatScreen, Selection,
};

/// Fluent builder for [`SeatScreen<O>`].
///
/// # Required inputs
///
/// - [`RouteParams`]: route, train and party
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                          |
/// |-------------------|----------------------------------|
/// | `.config(c)`      | `ScreenConfig::default()`        |
/// | `.fares(book)`    | none; category default prices    |
/// | `.fleet(f)`       | `Fleet::standard()`              |
/// | `.observer(o)`    | `NoopObserver`                   |
///
/// # Example
///
/// ```rust,ignore
/// let params = RouteParams::from_query(query)?;
/// let mut screen = ScreenBuilder::new(params)
///     .fares(load_fares_csv(path)?)
///     .observer(NoticeLog::default())
///     .build()?;
/// screen.auto_select();
/// let record = screen.checkout()?;
/// ```
pub struct ScreenBuilder<O: ScreenObserver = NoopObserver> {
    params:   RouteParams,
    config:   ScreenConfig,
    fares:    Option<FareBook>,
    fleet:    Fleet,
    observer: O,
}

impl ScreenBuilder<NoopObserver> {
    pub fn new(params: RouteParams) -> Self {
        Self {
            params,
            config:   ScreenConfig::default(),
            fares:    None,
            fleet:    Fleet::standard(),
            observer: NoopObserver,
        }
    }
}

impl<O: ScreenObserver> ScreenBuilder<O> {
    pub fn config(mut self, config: ScreenConfig) -> Self {
        self.config = config;
        self
    }

    pub fn fares(mut self, book: FareBook) -> Self {
        self.fares = Some(book);
        self
    }

    pub fn fleet(mut self, fleet: Fleet) -> Self {
        self.fleet = fleet;
        self
    }

    pub fn observer<P: ScreenObserver>(self, observer: P) -> ScreenBuilder<P> {
        ScreenBuilder {
            params:   self.params,
            config:   self.config,
            fares:    self.fares,
            fleet:    self.fleet,
            observer,
        }
    }

    /// Validate the configuration, synthesize the lattice and return a
    /// ready screen with an empty selection.  A party larger than the
    /// fleet's seat count is a [`ScreenError::Params`].
    pub fn build(self) -> ScreenResult<SeatScreen<O>> {
        self.config.validate()?;

        let party = self.params.party.total();
        let capacity = self.fleet.total_capacity();
        if party > capacity {
            return Err(ScreenError::Params(format!(
                "party of {party} exceeds the train's {capacity} seats"
            )));
        }

        let lattice = build_lattice(&self.config, &self.params, &self.fleet, self.fares.as_ref())?;
        let active_coach = lattice
            .coaches()
            .first()
            .map(|c| c.id())
            .ok_or_else(|| ScreenError::Config("lattice has no coaches".into()))?;
        let criteria = reset_criteria(&lattice, &self.config);

        debug!(
            train_id = %self.params.train_id,
            party = %self.params.party.description(),
            seats = lattice.seat_count(),
            priced_from_table = self.fares.is_some(),
            "screen built"
        );

        let mut screen = SeatScreen {
            selection:     Selection::new(self.params.party.total()),
            debounce:      Debouncer::new(self.config.filter_debounce()),
            config:        self.config,
            params:        self.params,
            fleet:         self.fleet,
            fares:         self.fares,
            lattice,
            active_coach,
            criteria,
            filter_active: false,
            filtered:      None,
            observer:      self.observer,
        };
        screen.observer.on_lattice_built(&screen.lattice);
        if screen.params.party.has_children_or_elderly() {
            screen.observer.on_notice(&Notice::ToiletSuggestion);
        }
        Ok(screen)
    }
}
