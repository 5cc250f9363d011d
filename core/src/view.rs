use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a display may know about one cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub revealed: bool,
    pub flagged: bool,
    /// Only present when the view was built with mines shown.
    pub mine: Option<bool>,
    /// Only present for revealed cells that aren't mines.
    pub adjacent_mines: Option<u8>,
}

/// Read-only snapshot of a board for rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord,
    pub mines_shown: bool,
    pub cells: Array2<CellView>,
}

impl BoardView {
    pub fn from_board(board: &Board, show_mines: bool) -> Self {
        let size = board.size();
        let mut cells = Array2::from_elem((size, size), CellView::default());

        for pos in board.positions() {
            let cell = board[pos];
            let adjacent_mines = if cell.is_revealed() && !cell.is_mine() {
                // in bounds by construction
                adjacent_mine_count(board, pos).ok()
            } else {
                None
            };
            cells[pos.to_nd_index()] = CellView {
                revealed: cell.is_revealed(),
                flagged: cell.is_flagged(),
                mine: show_mines.then_some(cell.is_mine()),
                adjacent_mines,
            };
        }

        Self {
            size,
            mines_shown: show_mines,
            cells,
        }
    }

    pub fn cell_at(&self, pos: Position) -> CellView {
        self.cells[pos.to_nd_index()]
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = CellView> + '_> + '_ {
        self.cells.rows().into_iter().map(|row| row.into_iter().copied())
    }
}
