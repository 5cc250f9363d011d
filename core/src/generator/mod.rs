use hashbrown::HashSet;

use crate::*;
pub use random::*;

mod random;

/// Strategy that places mines on a freshly created board.
pub trait MineGenerator {
    fn populate(self, board: &mut Board, count: usize) -> Result<()>;
}

/// Places mines at explicit positions, mostly useful for tests and replays.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineLayout {
    mines: Vec<Position>,
}

impl FixedMineLayout {
    pub fn new(mines: impl Into<Vec<Position>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MineGenerator for FixedMineLayout {
    fn populate(self, board: &mut Board, count: usize) -> Result<()> {
        check_placeable(board, count)?;
        for &pos in &self.mines {
            board.validate(pos)?;
        }

        // duplicates collapse, so compare distinct positions before touching the board
        let distinct: HashSet<Position> = self.mines.iter().copied().collect();
        if distinct.len() != count {
            return Err(GameError::MineCountMismatch {
                requested: count,
                placed: distinct.len(),
            });
        }

        for pos in distinct {
            board.set_mine(pos)?;
        }
        Ok(())
    }
}

/// Placement runs once, on an untouched board, and can't exceed the cell count.
fn check_placeable(board: &Board, count: usize) -> Result<()> {
    if !board.is_pristine() {
        return Err(GameError::AlreadyPopulated);
    }
    let available = board.total_cells();
    if count > available {
        return Err(GameError::TooManyMines {
            requested: count,
            available,
        });
    }
    Ok(())
}
