use sm_core::SmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FareError {
    #[error("fare parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] SmError),
}

pub type FareResult<T> = Result<T, FareError>;
