#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use overlay::*;
pub use record::*;
pub use slot::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod game;
mod generator;
mod overlay;
mod record;
mod slot;
mod types;

/// Shape and density of a board to generate.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub width: Coord,
    pub height: Coord,
    /// Chance of each cell independently being a mine.
    pub probability: f64,
}

impl BoardConfig {
    pub const fn new_unchecked(width: Coord, height: Coord, probability: f64) -> Self {
        Self {
            width,
            height,
            probability,
        }
    }

    pub fn new(width: Coord, height: Coord, probability: f64) -> Result<Self> {
        let config = Self::new_unchecked(width, height, probability);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(GameError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }

        // also rejects NaN
        if !(0.0..=1.0).contains(&self.probability) {
            log::warn!("Rejecting mine probability {}", self.probability);
            return Err(GameError::InvalidProbability);
        }

        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.width, self.height)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(8, 8, 0.10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = BoardConfig::default();

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.total_cells(), 64);
    }

    #[test]
    fn non_positive_sides_are_rejected() {
        for (width, height) in [(0, 4), (4, 0), (-1, 4), (4, -3)] {
            assert_eq!(
                BoardConfig::new(width, height, 0.5),
                Err(GameError::InvalidDimension { width, height })
            );
        }
    }

    #[test]
    fn probability_outside_unit_interval_is_rejected() {
        for probability in [-0.1, 1.01, f64::NAN, f64::INFINITY] {
            assert_eq!(
                BoardConfig::new(4, 4, probability),
                Err(GameError::InvalidProbability)
            );
        }
        assert!(BoardConfig::new(4, 4, 0.0).is_ok());
        assert!(BoardConfig::new(4, 4, 1.0).is_ok());
    }
}
