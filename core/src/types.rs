/// Single coordinate axis used for board size and positions.
pub type Coord = usize;

/// Zero-based `(row, col)` coordinates of a cell.
pub type Position = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Position {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0, self.1]
    }
}

/// Row/column offsets in the order NW, N, NE, W, E, SW, S, SE.
const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `pos`, returning a value only when it remains on a `size`x`size` board.
fn apply_delta(pos: Position, delta: (isize, isize), size: Coord) -> Option<Position> {
    let (row, col) = pos;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= size {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= size {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the in-bounds Moore neighborhood of a cell in a fixed order.
#[derive(Debug)]
pub struct NeighborIter {
    center: Position,
    size: Coord,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Position, size: Coord) -> Self {
        Self {
            center,
            size,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.size);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
