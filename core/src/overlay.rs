use core::fmt;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The player's view of a board: which positions are uncovered and what they showed.
///
/// The overlay is owned by whoever drives the game. Reveals are merged into it, and a slot
/// that has been uncovered stays uncovered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOverlay {
    slots: Array2<Slot>,
}

impl DisplayOverlay {
    /// A fully covered overlay; negative sides are treated as empty.
    pub fn new((width, height): Coord2) -> Self {
        let shape = [height.max(0) as usize, width.max(0) as usize];
        Self {
            slots: Array2::default(shape),
        }
    }

    pub fn for_board(board: &Board) -> Self {
        Self::new(board.size())
    }

    pub fn size(&self) -> Coord2 {
        (self.slots.ncols() as Coord, self.slots.nrows() as Coord)
    }

    pub fn slot(&self, (x, y): Coord2) -> Option<Slot> {
        if x < 0 || y < 0 {
            return None;
        }
        self.slots.get((x, y).to_nd_index()).copied()
    }

    pub fn is_uncovered(&self, coords: Coord2) -> bool {
        self.slot(coords).is_some_and(Slot::is_uncovered)
    }

    pub fn uncovered_count(&self) -> CellCount {
        self.slots.iter().filter(|slot| slot.is_uncovered()).count() as CellCount
    }

    /// Writes every cell of `reveal` into the overlay and returns how many slots were newly
    /// uncovered. Slots already uncovered and cells outside the overlay are left alone.
    pub fn merge(&mut self, reveal: &Reveal) -> CellCount {
        let mut newly_uncovered = 0;

        for item in reveal {
            let (x, y) = item.cell.location;
            if x < 0 || y < 0 {
                continue;
            }
            let Some(slot) = self.slots.get_mut((x, y).to_nd_index()) else {
                continue;
            };
            if slot.is_covered() {
                *slot = Slot::Uncovered {
                    count: item.count,
                    mine: item.cell.is_mine,
                };
                newly_uncovered += 1;
            }
        }

        newly_uncovered
    }

    pub fn is_won(&self, board: &Board) -> bool {
        is_won(board, self)
    }
}

/// Renders `#` for covered slots, `.` for zeros, the count otherwise and `*` for an
/// uncovered mine.
impl fmt::Display for DisplayOverlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for row in self.slots.rows() {
            for slot in row {
                let symbol = match *slot {
                    Slot::Covered => '#',
                    Slot::Uncovered { mine: true, .. } => '*',
                    Slot::Uncovered { count: 0, .. } => '.',
                    Slot::Uncovered { count, .. } => char::from(b'0' + count),
                };
                f.write_char(symbol)?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

/// A game is won once the covered slots are exactly the mines: every safe cell is
/// uncovered and no mine is.
///
/// Scans the whole grid. An overlay whose size differs from the board's never wins.
pub fn is_won(board: &Board, overlay: &DisplayOverlay) -> bool {
    if overlay.size() != board.size() {
        log::warn!(
            "Overlay size {:?} does not match board size {:?}",
            overlay.size(),
            board.size()
        );
        return false;
    }

    board
        .iter()
        .all(|cell| cell.is_mine != overlay.is_uncovered(cell.location))
}
