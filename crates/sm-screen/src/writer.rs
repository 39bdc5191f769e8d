//! Checkout persistence backends.
//!
//! - [`JsonSessionWriter`] keeps the latest record as one JSON document,
//!   overwritten on every checkout.
//! - [`CsvCheckoutLog`] appends one row per checkout.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;
use tracing::debug;

use crate::{CheckoutRecord, ScreenResult};

/// Trait implemented by every checkout backend.
pub trait CheckoutWriter {
    fn write(&mut self, record: &CheckoutRecord) -> ScreenResult<()>;

    /// Flush any buffered output.  Idempotent.
    fn finish(&mut self) -> ScreenResult<()>;
}

/// Writes the current session record to a single JSON file.
pub struct JsonSessionWriter {
    path: PathBuf,
}

impl JsonSessionWriter {
    /// File name used by [`JsonSessionWriter::in_dir`].
    pub const FILE_NAME: &'static str = "ticket_info.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read back the stored record.
    pub fn load(&self) -> ScreenResult<CheckoutRecord> {
        let file = File::open(&self.path)?;
        Ok(serde_json::from_reader(file)?)
    }
}

impl CheckoutWriter for JsonSessionWriter {
    fn write(&mut self, record: &CheckoutRecord) -> ScreenResult<()> {
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(file, record)?;
        debug!(path = %self.path.display(), seats = %record.selected_seats, "session record written");
        Ok(())
    }

    fn finish(&mut self) -> ScreenResult<()> {
        Ok(())
    }
}

/// Appends checkouts to a CSV file with a header row.
pub struct CsvCheckoutLog {
    writer:   Writer<File>,
    finished: bool,
}

impl CsvCheckoutLog {
    pub fn new(path: &Path) -> ScreenResult<Self> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record([
            "train_id",
            "train_name",
            "selected_seats",
            "total_price",
            "from",
            "to",
            "depart_date",
            "return_date",
            "is_round_trip",
            "total_passengers",
        ])?;
        Ok(Self { writer, finished: false })
    }
}

impl CheckoutWriter for CsvCheckoutLog {
    fn write(&mut self, record: &CheckoutRecord) -> ScreenResult<()> {
        self.writer.write_record(&[
            record.train_id.clone(),
            record.train_name.clone().unwrap_or_default(),
            record.selected_seats.clone(),
            record.total_price.0.to_string(),
            record.from.clone(),
            record.to.clone(),
            record.depart_date.clone(),
            record.return_date.clone().unwrap_or_default(),
            record.is_round_trip.to_string(),
            record.total_passengers.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> ScreenResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}
