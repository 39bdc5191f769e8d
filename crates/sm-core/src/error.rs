//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `SmError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::{CoachId, SeatId};

/// The base error type for `sm-core` and a common variant for sub-crates.
#[derive(Debug, Error)]
pub enum SmError {
    #[error("coach {0} not found")]
    CoachNotFound(CoachId),

    #[error("seat {0} not found")]
    SeatNotFound(SeatId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `sm-*` crates.
pub type SmResult<T> = Result<T, SmError>;
