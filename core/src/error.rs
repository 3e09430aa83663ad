use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board dimensions {width}x{height}, both sides must be positive")]
    InvalidDimension { width: Coord, height: Coord },
    #[error("Mine probability must lie within [0, 1]")]
    InvalidProbability,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board record does not match its declared size")]
    CorruptRecord,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
