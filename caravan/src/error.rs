//! Errors surfaced by the leg analysers.

use crate::comb::TooManySequences;
use crate::enumeration::TooManyDice;
use crate::mc::InvalidTrials;
use crate::roster::DuplicateMarker;
use crate::track::InvalidMarker;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("{0}")]
    InvalidMarker(#[from] InvalidMarker),

    #[error("{0}")]
    DuplicateMarker(#[from] DuplicateMarker),

    #[error("{0}")]
    InvalidTrials(#[from] InvalidTrials),

    #[error("{0}")]
    TooManySequences(#[from] TooManySequences),

    #[error("{0}")]
    TooManyDice(#[from] TooManyDice),
}
