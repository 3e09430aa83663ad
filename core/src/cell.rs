use serde::{Deserialize, Serialize};

use crate::*;

/// A single board position and whether it holds a mine.
///
/// Cells never change once a board is generated. Within one board a location maps to
/// exactly one cell, so the location alone identifies it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub location: Coord2,
    pub is_mine: bool,
}

impl Cell {
    pub const fn new(location: Coord2, is_mine: bool) -> Self {
        Self { location, is_mine }
    }

    pub const fn x(&self) -> Coord {
        self.location.0
    }

    pub const fn y(&self) -> Coord {
        self.location.1
    }
}
