use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Transport-neutral form of a [`Board`], used to persist a game.
///
/// `cell_rows[y][x]` holds whether `(x, y)` is a mine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardRecord {
    pub width: Coord,
    pub height: Coord,
    pub probability: f64,
    pub cell_rows: Vec<Vec<bool>>,
}

impl Board {
    pub fn to_record(&self) -> BoardRecord {
        let cell_rows = (0..self.height())
            .map(|y| {
                (0..self.width())
                    .map(|x| self.get_cell(x, y).is_some_and(|cell| cell.is_mine))
                    .collect()
            })
            .collect();

        BoardRecord {
            width: self.width(),
            height: self.height(),
            probability: self.probability(),
            cell_rows,
        }
    }

    /// Rebuilds a board from its record.
    ///
    /// The declared size and probability go through the same checks as generation; a grid
    /// whose shape disagrees with the declared size is a [`GameError::CorruptRecord`].
    pub fn from_record(record: &BoardRecord) -> Result<Self> {
        let config = BoardConfig::new(record.width, record.height, record.probability)?;

        let rows_match = record.cell_rows.len() == config.height as usize
            && record
                .cell_rows
                .iter()
                .all(|row| row.len() == config.width as usize);
        if !rows_match {
            log::warn!(
                "Record declares {}x{} but holds {} rows",
                record.width,
                record.height,
                record.cell_rows.len()
            );
            return Err(GameError::CorruptRecord);
        }

        Ok(Self::from_fn(config, |(x, y)| {
            record.cell_rows[y as usize][x as usize]
        }))
    }
}

impl From<&Board> for BoardRecord {
    fn from(board: &Board) -> Self {
        board.to_record()
    }
}

impl TryFrom<&BoardRecord> for Board {
    type Error = GameError;

    fn try_from(record: &BoardRecord) -> Result<Self> {
        Board::from_record(record)
    }
}
