//! Engine for a single-player mine-clearing puzzle on a square board.
//!
//! The [`Board`] owns the cells, [`populate_mines`] seeds it, [`reveal_cascade`] opens cells with the
//! usual flood fill, and [`Game`] drives turns from [`Command`]s. Games can be suspended through a
//! [`BoardStore`].

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use persist::*;
pub use reveal::*;
pub use types::*;
pub use view::*;

mod board;
mod cell;
mod error;
mod game;
mod generator;
mod persist;
mod reveal;
mod types;
mod view;

/// One mine for every seven cells, rounded down.
pub const MINE_DENSITY_DIVISOR: usize = 7;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: usize,
}

impl GameConfig {
    /// Config for a `size`x`size` board with the standard mine density.
    pub fn new(size: Coord) -> Result<Self> {
        let total = total_cells(size)?;
        Ok(Self {
            size,
            mines: total / MINE_DENSITY_DIVISOR,
        })
    }

    pub fn with_mines(size: Coord, mines: usize) -> Result<Self> {
        let total = total_cells(size)?;
        if mines > total {
            return Err(GameError::TooManyMines {
                requested: mines,
                available: total,
            });
        }
        Ok(Self { size, mines })
    }

    pub const fn total_cells(&self) -> usize {
        self.size * self.size
    }
}

fn total_cells(size: Coord) -> Result<usize> {
    if size == 0 {
        return Err(GameError::InvalidSize);
    }
    size.checked_mul(size).ok_or(GameError::InvalidSize)
}
