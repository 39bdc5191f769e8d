use sm_core::{CoachId, SmError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LatticeError {
    #[error("lattice configuration error: {0}")]
    Config(String),

    #[error("coach {0} declared more than once")]
    DuplicateCoach(CoachId),

    #[error("coach {0} has no seats")]
    EmptyCoach(CoachId),

    #[error(transparent)]
    Core(#[from] SmError),
}

pub type LatticeResult<T> = Result<T, LatticeError>;
