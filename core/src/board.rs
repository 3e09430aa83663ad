use core::fmt;

use ndarray::Array2;
use rand::Rng;
use smallvec::SmallVec;

use crate::*;

/// Ground truth of a game: which cells hold mines.
///
/// A board never changes after it is built. Every lookup goes through [`Board::get_cell`],
/// which answers `None` for anything outside the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    probability: f64,
}

impl Board {
    /// Samples every cell independently, each being a mine with `config.probability`.
    pub fn generate<R: Rng>(config: BoardConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let board = Self::from_fn(config, |_| rng.random_bool(config.probability));
        log::debug!(
            "Generated {}x{} board with {} mines (p = {})",
            config.width,
            config.height,
            board.mine_count,
            config.probability
        );
        Ok(board)
    }

    /// Builds a board with mines exactly at `mine_coords`.
    pub fn from_mine_coords(config: BoardConfig, mine_coords: &[Coord2]) -> Result<Self> {
        config.validate()?;

        let mut mine_mask: Array2<bool> =
            Array2::default([config.height as usize, config.width as usize]);
        for &(x, y) in mine_coords {
            if x < 0 || y < 0 || x >= config.width || y >= config.height {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[(x, y).to_nd_index()] = true;
        }

        Ok(Self::from_fn(config, |coords| {
            mine_mask[coords.to_nd_index()]
        }))
    }

    /// Caller must have validated `config`; `is_mine` is called once per cell in row-major
    /// order.
    pub(crate) fn from_fn(config: BoardConfig, mut is_mine: impl FnMut(Coord2) -> bool) -> Self {
        let shape = (config.height as usize, config.width as usize);
        let cells = Array2::from_shape_fn(shape, |(row, col)| {
            let location = (col as Coord, row as Coord);
            Cell::new(location, is_mine(location))
        });
        let mine_count = cells.iter().filter(|cell| cell.is_mine).count() as CellCount;

        Self {
            cells,
            mine_count,
            probability: config.probability,
        }
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig::new_unchecked(self.width(), self.height(), self.probability)
    }

    pub fn width(&self) -> Coord {
        self.cells.ncols() as Coord
    }

    pub fn height(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn size(&self) -> Coord2 {
        (self.width(), self.height())
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains(&self, (x, y): Coord2) -> bool {
        x >= 0 && y >= 0 && x < self.width() && y < self.height()
    }

    pub fn get_cell(&self, x: Coord, y: Coord) -> Option<Cell> {
        if self.contains((x, y)) {
            Some(self.cells[(x, y).to_nd_index()])
        } else {
            None
        }
    }

    pub fn cell(&self, (x, y): Coord2) -> Option<Cell> {
        self.get_cell(x, y)
    }

    /// The existing cells of the Moore neighbourhood around `(x, y)`, in a fixed order.
    pub fn adjacent(&self, x: Coord, y: Coord) -> SmallVec<[Cell; 8]> {
        NeighborIter::new((x, y))
            .filter_map(|(nx, ny)| self.get_cell(nx, ny))
            .collect()
    }

    pub fn adjacent_mine_count(&self, x: Coord, y: Coord) -> u8 {
        NeighborIter::new((x, y))
            .filter_map(|(nx, ny)| self.get_cell(nx, ny))
            .filter(|cell| cell.is_mine)
            .count() as u8
    }

    /// All cells, row by row.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn mine_locations(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter()
            .filter(|cell| cell.is_mine)
            .map(|cell| cell.location)
    }
}

/// One line per row, `x` for a mine and `0` for a clear cell.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                f.write_str(if cell.is_mine { "x" } else { "0" })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
