//! walkthrough: one seat-selection session from route parameters to the
//! checkout hand-off.
//!
//! Opens SE1 Hà Nội → Sài Gòn for two adults and a child, auto-selects,
//! runs the filter with a debounced price change, and writes the session
//! record plus a checkout log under `output/walkthrough`.
//!
//! Set `RUST_LOG=debug` to see the library's events.

use std::io::Cursor;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use sm_core::{Price, ScreenConfig, SeatId};
use sm_fare::load_fares_reader;
use sm_filter::{PriorityPreference, RecordType};
use sm_lattice::TrainLattice;
use sm_screen::{
    CheckoutWriter, CsvCheckoutLog, JsonSessionWriter, Notice, RouteParams, ScreenBuilder,
    ScreenObserver,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const OUTPUT_DIR: &str = "output/walkthrough";

const QUERY: &str = "from=H%C3%A0+N%E1%BB%99i&to=S%C3%A0i+G%C3%B2n&departDate=2025-07-01\
&trainId=SE1&trainName=T%C3%A0u+SE1\
&passengers=%7B%22adult%22%3A2%2C%22child%22%3A1%7D&isRoundTrip=false";

// ── Fare table ────────────────────────────────────────────────────────────────

/// Coach 1 and coach 6 of SE1 carry published fares; everything else falls
/// back to category defaults.
fn fare_csv() -> String {
    let mut csv = String::from("train_id,origin,destination,category,car,seat,price\n");
    for seat in 1..=28u64 {
        let row = seat.div_ceil(2);
        csv.push_str(&format!("SE1,Hà Nội,Sài Gòn,ngoi,1,{seat},{}\n", 880_000 + row * 5_000));
        let compartment = seat.div_ceil(4);
        csv.push_str(&format!("SE1,Ga Hà Nội,Ga Sài Gòn,k4,6,{seat},{}\n", 1_350_000 + compartment * 20_000));
    }
    csv
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct PrintingObserver {
    notices: usize,
}

impl ScreenObserver for PrintingObserver {
    fn on_notice(&mut self, notice: &Notice) {
        self.notices += 1;
        println!("  [notice] {notice}");
    }

    fn on_lattice_built(&mut self, lattice: &TrainLattice) {
        println!("  [lattice] {} coaches, {} seats", lattice.coaches().len(), lattice.seat_count());
    }
}

fn seat_list(seats: &[SeatId]) -> String {
    seats.iter().map(SeatId::to_string).collect::<Vec<_>>().join(" ")
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("=== walkthrough: rust_seatmap ===");

    // 1. Route parameters.
    let params = RouteParams::from_query(QUERY)?;
    println!(
        "{} → {}  |  {}  |  train {}  |  {}",
        params.from,
        params.to,
        params.depart_date,
        params.display_train_name(),
        params.party.description()
    );
    println!();

    // 2. Screen, first on default prices.
    let config = ScreenConfig { seed: Some(SEED), ..ScreenConfig::default() };
    let mut screen = ScreenBuilder::new(params)
        .config(config)
        .observer(PrintingObserver::default())
        .build()?;

    // 3. The fare table arrives later and triggers a rebuild.
    let book = load_fares_reader(Cursor::new(fare_csv()))?;
    for train_id in book.train_ids() {
        let Some(train) = book.train(train_id) else { continue };
        for route in &train.routes {
            let counts: Vec<String> = route
                .breakdown()
                .iter()
                .map(|(cat, n)| format!("{}={n}", cat.fare_tag()))
                .collect();
            println!("Fares {train_id} {} → {}: {}", route.origin, route.destination, counts.join(" "));
        }
    }
    screen.install_fares(book)?;
    println!();

    println!("{:<6} {:<11} {:>7} {:>9} {:>14} {:>7}", "Coach", "Category", "Layout", "Free", "From", "Label");
    println!("{}", "-".repeat(60));
    for coach in screen.lattice().coaches() {
        let cheapest = coach.seats.iter().map(|s| s.price).min().unwrap_or(Price::ZERO);
        let category = coach.coach.category;
        let layout = if category.is_sleeper() {
            format!("{} tier", category.floors())
        } else {
            "rows".to_owned()
        };
        println!(
            "{:<6} {:<11} {:>7} {:>4} / {:<2} {:>14} {:>7}",
            coach.id().0,
            category.as_str(),
            layout,
            coach.available_count(),
            coach.seats.len(),
            cheapest.to_string(),
            cheapest.short_label(),
        );
    }
    println!();

    // 4. Auto-select for the party.
    let pick = screen.auto_select();
    println!(
        "Auto-select ({:?}): {}  →  coach {}, total {}",
        pick.outcome,
        seat_list(screen.selection().seats()),
        screen.active_coach().0,
        screen.total_price()
    );
    println!();

    // 5. Filter four-berth cabins, high priority only, then narrow the price.
    screen.set_record_types([RecordType::HighPriority]);
    screen.set_priority(PriorityPreference::HighOnly);
    if let Some(out) = screen.apply_filter() {
        println!("Filter: {} matches, best coach {:?}", out.len(), out.best_coach.map(|c| c.0));
    }
    let t0 = Instant::now();
    screen.set_price_range(Price(1_200_000), Price(1_400_000), t0);
    screen.set_price_range(Price(1_000_000), Price(900_000), t0);
    let delay = screen.config().filter_debounce();
    if let Some(out) = screen.poll_timers(t0 + delay + Duration::from_millis(1)) {
        let top: Vec<SeatId> = out.seat_ids.iter().take(6).copied().collect();
        println!("Debounced re-run: {} matches, top {}", out.len(), seat_list(&top));
    }
    println!();

    // 6. Price histogram with the active range marked.
    let hist = screen.histogram();
    let range = screen.criteria().price;
    let peak = hist.peak().max(1);
    println!("Prices {} – {}", hist.min(), hist.max());
    for (i, &count) in hist.counts().iter().enumerate() {
        let mark = if hist.is_active(i, range) { '#' } else { '.' };
        let bar: String = std::iter::repeat_n(mark, count * 30 / peak).collect();
        println!("  {i:>2} {count:>4} {bar}");
    }
    screen.reset_filter();
    println!();

    // 7. Checkout.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut session = JsonSessionWriter::in_dir(Path::new(OUTPUT_DIR));
    let mut log = CsvCheckoutLog::new(&Path::new(OUTPUT_DIR).join("checkouts.csv"))?;
    let record = screen.checkout_to(&mut session)?;
    log.write(&record)?;
    session.finish()?;
    log.finish()?;

    println!("Checkout: seats {} total {}", record.selected_seats, record.total_price);
    println!("  {}", session.path().display());
    println!("  /passenger-info?{}", record.to_query_string()?);
    println!("Notices shown: {}", screen.observer().notices);

    Ok(())
}
