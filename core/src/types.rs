/// Single coordinate axis used for board width, height, and positions.
///
/// Signed so that clicks left of or above the grid can be expressed; they simply miss.
pub type Coord = i16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

/// Grids are stored row-major, so `(x, y)` lands on `[y, x]`.
///
/// Only meaningful for coordinates already known to be in bounds.
impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1 as usize, self.0 as usize]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = if a > 0 { a as CellCount } else { 0 };
    let b = if b > 0 { b as CellCount } else { 0 };
    a.saturating_mul(b)
}

const DISPLACEMENTS: [(Coord, Coord); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it does not overflow.
fn apply_delta(coords: Coord2, delta: (Coord, Coord)) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    Some((x.checked_add(dx)?, y.checked_add(dy)?))
}

/// Iterates the eight Moore-neighbourhood positions around a centre, in a fixed order.
///
/// Positions are not clipped to any board; callers resolve them through a bounds-checked
/// lookup.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2) -> Self {
        Self { center, index: 0 }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(self.center, DISPLACEMENTS[self.index as usize]);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
