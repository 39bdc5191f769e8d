//! CSV fare loader.
//!
//! # CSV format
//!
//! One row per priced seat.  Rows for the same train and route may appear in
//! any order; station names are matched after normalisation, so
//! `"Ga Sài Gòn"` and `"SAI GON"` land in the same route.
//!
//! ```csv
//! train_id,origin,destination,category,car,seat,price
//! SE1,Hà Nội,Sài Gòn,four-berth,6,1,1450000
//! SE1,Hà Nội,Sài Gòn,four-berth,6,2,1450000
//! SE1,Hà Nội,Sài Gòn,seating,1,1,910000
//! ```
//!
//! **`category`** accepts `seating`/`six-berth`/`four-berth` or the fare
//! tags `ngoi`/`k6`/`k4`.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sm_core::{CoachCategory, CoachId, Price, SeatNo};

use crate::book::{FareBook, FareEntry, fare_key, fare_row};
use crate::FareError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FareRecord {
    train_id:    String,
    origin:      String,
    destination: String,
    category:    String,
    car:         u8,
    seat:        u16,
    price:       u64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`FareBook`] from a CSV file.
pub fn load_fares_csv(path: &Path) -> Result<FareBook, FareError> {
    let file = std::fs::File::open(path).map_err(FareError::Io)?;
    load_fares_reader(file)
}

/// Like [`load_fares_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for tables already held
/// in memory.
pub fn load_fares_reader<R: Read>(reader: R) -> Result<FareBook, FareError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut book = FareBook::new();

    for (line, result) in csv_reader.deserialize::<FareRecord>().enumerate() {
        let row = result?;
        let category: CoachCategory = row
            .category
            .parse()
            .map_err(|e| FareError::Parse(format!("row {}: {e}", line + 1)))?;
        if row.seat == 0 {
            return Err(FareError::Parse(format!("row {}: seat numbers start at 1", line + 1)));
        }

        let coach = CoachId(row.car);
        let seat = SeatNo(row.seat);
        let key = fare_key(&row.train_id, category, coach, seat);
        book.train_mut(&row.train_id)
            .route_mut(&row.origin, &row.destination)
            .insert(key, FareEntry {
                car:   row.car,
                row:   fare_row(category, seat),
                price: Price(row.price),
            });
    }

    Ok(book)
}
