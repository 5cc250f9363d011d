use core::ops::Index;

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Up to eight neighbor positions, kept inline.
pub type Neighbors = SmallVec<[Position; 8]>;

/// Result of a game derived from the board contents alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Square grid of cells indexed by zero-based `(row, col)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Allocates a `size`x`size` board with every cell concealed, unflagged and safe.
    pub fn new(size: Coord) -> Result<Self> {
        if size == 0 || size.checked_mul(size).is_none() {
            return Err(GameError::InvalidSize);
        }
        Ok(Self {
            cells: Array2::default((size, size)),
        })
    }

    /// Builds a board with mines at the given positions, the rest of the cells untouched.
    pub fn with_mines(size: Coord, mines: &[Position]) -> Result<Self> {
        let mut board = Self::new(size)?;
        for &pos in mines {
            board.set_mine(pos)?;
        }
        Ok(board)
    }

    /// Rebuilds a board from row-major cells, `None` if the count doesn't match `size²`.
    pub(crate) fn from_cells(size: Coord, cells: Vec<Cell>) -> Option<Self> {
        Array2::from_shape_vec((size, size), cells)
            .ok()
            .map(|cells| Self { cells })
    }

    pub fn size(&self) -> Coord {
        self.cells.nrows()
    }

    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn is_in_bounds(&self, (row, col): Position) -> bool {
        let size = self.size();
        row < size && col < size
    }

    pub fn validate(&self, pos: Position) -> Result<Position> {
        if self.is_in_bounds(pos) {
            Ok(pos)
        } else {
            Err(GameError::OutOfBounds(pos))
        }
    }

    pub fn cell(&self, pos: Position) -> Result<Cell> {
        let pos = self.validate(pos)?;
        Ok(self.cells[pos.to_nd_index()])
    }

    pub fn is_mine(&self, pos: Position) -> Result<bool> {
        self.cell(pos).map(Cell::is_mine)
    }

    pub fn is_revealed(&self, pos: Position) -> Result<bool> {
        self.cell(pos).map(Cell::is_revealed)
    }

    pub fn is_flagged(&self, pos: Position) -> Result<bool> {
        self.cell(pos).map(Cell::is_flagged)
    }

    /// Flags a cell. Whether the cell may be flagged at all is decided by the caller.
    pub fn set_flag(&mut self, pos: Position) -> Result<()> {
        let pos = self.validate(pos)?;
        self.cells[pos.to_nd_index()].is_flagged = true;
        Ok(())
    }

    /// Reveals exactly one cell, clearing its flag. Cascading is done by [`reveal_cascade`].
    pub fn reveal(&mut self, pos: Position) -> Result<()> {
        let pos = self.validate(pos)?;
        self.cells[pos.to_nd_index()].reveal();
        Ok(())
    }

    pub(crate) fn set_mine(&mut self, pos: Position) -> Result<()> {
        let pos = self.validate(pos)?;
        self.cells[pos.to_nd_index()].is_mine = true;
        Ok(())
    }

    /// In-bounds neighbors in the order NW, N, NE, W, E, SW, S, SE.
    pub fn neighbors(&self, pos: Position) -> Result<Neighbors> {
        let pos = self.validate(pos)?;
        Ok(self.iter_neighbors(pos).collect())
    }

    pub(crate) fn iter_neighbors(&self, pos: Position) -> NeighborIter {
        NeighborIter::new(pos, self.size())
    }

    /// Whether the flags match the mines exactly; a wrong flag blocks the win as much as a missing one.
    pub fn is_won(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.is_flagged == cell.is_mine)
    }

    pub fn outcome(&self) -> Outcome {
        if self
            .cells
            .iter()
            .any(|cell| cell.is_mine && cell.is_revealed)
        {
            Outcome::Lost
        } else if self.is_won() {
            Outcome::Won
        } else {
            Outcome::InProgress
        }
    }

    pub fn mine_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_mine).count()
    }

    pub fn flag_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_flagged).count()
    }

    /// Whether nothing has been placed, revealed or flagged yet.
    pub fn is_pristine(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Cell::default())
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size();
        (0..size).flat_map(move |row| (0..size).map(move |col| (row, col)))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.to_nd_index()]
    }
}
