use sm_core::SmError;
use sm_fare::FareError;
use sm_lattice::LatticeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("screen configuration error: {0}")]
    Config(String),

    #[error("invalid route parameters: {0}")]
    Params(String),

    #[error("{selected} of {required} seats selected")]
    IncompleteSelection {
        selected: usize,
        required: usize,
    },

    #[error("lattice error: {0}")]
    Lattice(#[from] LatticeError),

    #[error("fare error: {0}")]
    Fare(#[from] FareError),

    #[error(transparent)]
    Core(#[from] SmError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ScreenResult<T> = Result<T, ScreenError>;
