//! Loader for the nested per-train generated pricing dataset.
//!
//! The dataset groups fares by category, car and price band:
//!
//! ```json
//! [{
//!   "trainId": "SE1",
//!   "routes": [{
//!     "origin": "Hà Nội", "destination": "Sài Gòn",
//!     "fares": {
//!       "seating":         [{ "car_number": 1, "rows": [{ "row_numbers": [1, 2], "price": 910000 }] }],
//!       "sleeper_6_berth": [{ "car_number": 3, "rows": [...] }],
//!       "sleeper_4_berth": [{ "car_number": 6, "rows": [...] }]
//!     }
//!   }]
//! }]
//! ```
//!
//! Each `row_numbers` entry is a seat number; every listed seat gets the
//! band's price.  Flattening produces the same fare keys as the CSV loader.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sm_core::{CoachCategory, CoachId, Price, SeatNo};

use crate::book::{FareBook, FareEntry, TrainFares, fare_key, fare_row};
use crate::FareError;

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedTrainPricing {
    #[serde(rename = "trainId", alias = "train_id")]
    pub train_id: String,
    #[serde(default)]
    pub routes:   Vec<GeneratedRoute>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedRoute {
    pub origin:      String,
    pub destination: String,
    #[serde(default)]
    pub fares:       GeneratedFares,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratedFares {
    #[serde(default)]
    pub seating:         Vec<GeneratedCar>,
    #[serde(default)]
    pub sleeper_6_berth: Vec<GeneratedCar>,
    #[serde(default)]
    pub sleeper_4_berth: Vec<GeneratedCar>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedCar {
    pub car_number: u8,
    #[serde(default)]
    pub rows:       Vec<GeneratedRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedRow {
    pub row_numbers: Vec<u16>,
    pub price:       u64,
}

impl GeneratedTrainPricing {
    /// Flatten into per-route fare maps.  Seat number 0 is skipped.
    pub fn into_train_fares(self) -> TrainFares {
        let mut train = TrainFares::new(self.train_id.clone());
        for route in self.routes {
            let table = train.route_mut(&route.origin, &route.destination);
            let groups = [
                (CoachCategory::Seating, &route.fares.seating),
                (CoachCategory::SixBerth, &route.fares.sleeper_6_berth),
                (CoachCategory::FourBerth, &route.fares.sleeper_4_berth),
            ];
            for (category, cars) in groups {
                for car in cars {
                    for band in &car.rows {
                        for &n in band.row_numbers.iter().filter(|&&n| n > 0) {
                            let seat = SeatNo(n);
                            table.insert(
                                fare_key(&self.train_id, category, CoachId(car.car_number), seat),
                                FareEntry {
                                    car:   car.car_number,
                                    row:   fare_row(category, seat),
                                    price: Price(band.price),
                                },
                            );
                        }
                    }
                }
            }
        }
        train
    }
}

/// Load every train in a generated dataset file.
pub fn load_generated_json(path: &Path) -> Result<FareBook, FareError> {
    let file = std::fs::File::open(path).map_err(FareError::Io)?;
    load_generated_json_reader(file)
}

/// Like [`load_generated_json`] but accepts any `Read` source.
pub fn load_generated_json_reader<R: Read>(reader: R) -> Result<FareBook, FareError> {
    let trains: Vec<GeneratedTrainPricing> = serde_json::from_reader(reader)?;
    let mut book = FareBook::new();
    for t in trains {
        book.insert_train(t.into_train_fares());
    }
    Ok(book)
}
