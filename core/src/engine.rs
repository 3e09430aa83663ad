use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::*;

/// A cell uncovered by a reveal, together with the number of mines around it.
///
/// For a mine the count is always `0` and carries no meaning.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedCell {
    pub count: u8,
    pub cell: Cell,
}

/// Cells uncovered by a single click, in the order the flood fill reached them.
///
/// Each location appears at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    cells: Vec<RevealedCell>,
}

impl Reveal {
    fn mine(cell: Cell) -> Self {
        Self {
            cells: vec![RevealedCell { count: 0, cell }],
        }
    }

    fn push(&mut self, count: u8, cell: Cell) {
        self.cells.push(RevealedCell { count, cell });
    }

    /// Whether the click landed on a mine, which loses the game.
    pub fn hit_mine(&self) -> bool {
        matches!(self.cells.as_slice(), [only] if only.cell.is_mine)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn as_slice(&self) -> &[RevealedCell] {
        &self.cells
    }

    pub fn iter(&self) -> core::slice::Iter<'_, RevealedCell> {
        self.cells.iter()
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.cells.iter().any(|item| item.cell.location == coords)
    }
}

impl IntoIterator for Reveal {
    type Item = RevealedCell;
    type IntoIter = vec::IntoIter<RevealedCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a Reveal {
    type Item = &'a RevealedCell;
    type IntoIter = core::slice::Iter<'a, RevealedCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Uncovers the cell at `coords` and cascades through connected zero cells.
///
/// - Outside the board: nothing is revealed.
/// - A mine: only that cell comes back, no cascade happens.
/// - A numbered cell: only that cell comes back.
/// - A zero cell: breadth-first expansion. Zero neighbours are queued and expanded in
///   turn, numbered neighbours are emitted as the border of the cleared area and stop
///   there.
///
/// Nothing is remembered between calls, so revealing the same place twice yields the same
/// cells again.
pub fn reveal(board: &Board, coords: Coord2) -> Reveal {
    let Some(clicked) = board.cell(coords) else {
        log::trace!("Click at {:?} is outside the board", coords);
        return Reveal::default();
    };

    if clicked.is_mine {
        log::debug!("Click at {:?} hit a mine", coords);
        return Reveal::mine(clicked);
    }

    let mut revealed = Reveal::default();
    let mut processed: HashSet<Coord2> = HashSet::new();
    let mut to_visit = VecDeque::from([clicked]);

    while let Some(cell) = to_visit.pop_front() {
        if !processed.insert(cell.location) {
            continue;
        }

        let count = board.adjacent_mine_count(cell.x(), cell.y());
        revealed.push(count, cell);
        if count > 0 {
            continue;
        }

        // a zero cell has no mine neighbours
        for neighbor in board.adjacent(cell.x(), cell.y()) {
            if processed.contains(&neighbor.location) {
                continue;
            }

            let neighbor_count = board.adjacent_mine_count(neighbor.x(), neighbor.y());
            if neighbor_count == 0 {
                to_visit.push_back(neighbor);
            } else {
                processed.insert(neighbor.location);
                revealed.push(neighbor_count, neighbor);
            }
        }
    }

    log::debug!("Click at {:?} revealed {} cells", coords, revealed.len());
    revealed
}
