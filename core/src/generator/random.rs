use hashbrown::HashSet;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::*;

/// Purely random placement driven by a seeded small RNG, so a seed always reproduces its board.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Generator with a seed taken from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn populate(self, board: &mut Board, count: usize) -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        log::debug!("Placing {} mines with seed {}", count, self.seed);
        populate_mines(board, count, &mut rng)
    }
}

/// Marks `count` distinct cells as mines, drawn uniformly from `rng`.
///
/// Uses rejection sampling: positions are drawn until `count` distinct ones have been collected.
pub fn populate_mines<R: Rng + ?Sized>(board: &mut Board, count: usize, rng: &mut R) -> Result<()> {
    check_placeable(board, count)?;

    let size = board.size();
    let mut mines: HashSet<Position> = HashSet::with_capacity(count);
    let mut draws = 0usize;
    while mines.len() < count {
        let pos = (rng.random_range(0..size), rng.random_range(0..size));
        mines.insert(pos);
        draws += 1;
    }
    log::trace!("Collected {} mine positions in {} draws", count, draws);

    for pos in mines {
        board.set_mine(pos)?;
    }

    // double check mine count
    let placed = board.mine_count();
    if placed != count {
        log::warn!(
            "Generated mine count mismatch, actual: {}, requested: {}",
            placed,
            count
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    fn mine_positions(board: &Board) -> Vec<Position> {
        board.positions().filter(|&pos| board[pos].is_mine()).collect()
    }

    #[test]
    fn places_exact_number_of_distinct_mines() {
        for (size, seed) in [(3, 1), (7, 2), (10, 3), (25, 4)] {
            let mut board = Board::new(size).unwrap();
            let count = size * size / 7;
            let mut rng = StdRng::seed_from_u64(seed);

            populate_mines(&mut board, count, &mut rng).unwrap();

            assert_eq!(board.mine_count(), count, "size {size}");
            assert!(board.cells().all(|cell| !cell.is_revealed() && !cell.is_flagged()));
        }
    }

    #[test]
    fn fills_whole_board_when_asked() {
        let mut board = Board::new(4).unwrap();
        let mut rng = StdRng::seed_from_u64(9);

        populate_mines(&mut board, 16, &mut rng).unwrap();

        assert_eq!(board.mine_count(), 16);
    }

    #[test]
    fn rejects_more_mines_than_cells() {
        let mut board = Board::new(2).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            populate_mines(&mut board, 5, &mut rng),
            Err(GameError::TooManyMines {
                requested: 5,
                available: 4
            })
        );
    }

    #[test]
    fn runs_only_once_per_board() {
        let mut board = Board::new(5).unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        populate_mines(&mut board, 3, &mut rng).unwrap();

        assert_eq!(
            populate_mines(&mut board, 3, &mut rng),
            Err(GameError::AlreadyPopulated)
        );
        assert_eq!(board.mine_count(), 3);
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let mut first = Board::new(9).unwrap();
        let mut second = Board::new(9).unwrap();

        RandomMineGenerator::new(42).populate(&mut first, 11).unwrap();
        RandomMineGenerator::new(42).populate(&mut second, 11).unwrap();

        assert_eq!(mine_positions(&first), mine_positions(&second));
        assert_eq!(first.mine_count(), 11);
    }
}
