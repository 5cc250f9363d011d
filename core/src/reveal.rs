use crate::*;

/// Number of mines among the neighbors of `pos`, not counting `pos` itself.
pub fn adjacent_mine_count(board: &Board, pos: Position) -> Result<u8> {
    let pos = board.validate(pos)?;
    let count = board
        .iter_neighbors(pos)
        .filter(|&neighbor| board[neighbor].is_mine())
        .count();
    // at most eight neighbors
    Ok(count as u8)
}

/// Reveals `pos` and flood-fills outward through every connected zero-count cell.
///
/// Cells bordering the region are revealed but don't propagate. A mine at `pos` is revealed on its
/// own; deciding that the game is lost is left to the caller. Returns how many cells changed from
/// concealed to revealed.
pub fn reveal_cascade(board: &mut Board, pos: Position) -> Result<usize> {
    let pos = board.validate(pos)?;
    let mut opened = usize::from(!board[pos].is_revealed());
    board.reveal(pos)?;

    if board[pos].is_mine() {
        log::debug!("Revealed mine at {:?}", pos);
        return Ok(opened);
    }

    // explicit work list instead of recursion, cells are revealed when pushed so each is seen once
    let mut pending = vec![pos];
    while let Some(current) = pending.pop() {
        if adjacent_mine_count(board, current)? != 0 {
            continue;
        }

        let neighbors = board.neighbors(current)?;
        for neighbor in neighbors {
            if board[neighbor].is_revealed() {
                continue;
            }
            board.reveal(neighbor)?;
            opened += 1;
            log::trace!("Flood revealed cell at {:?}", neighbor);
            pending.push(neighbor);
        }
    }

    log::debug!("Reveal at {:?} opened {} cells", pos, opened);
    Ok(opened)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revealed(board: &Board) -> Vec<Position> {
        board
            .positions()
            .filter(|&pos| board[pos].is_revealed())
            .collect()
    }

    #[test]
    fn counts_only_neighbors() {
        let board = Board::with_mines(3, &[(0, 0), (1, 1), (2, 2)]).unwrap();

        assert_eq!(adjacent_mine_count(&board, (1, 1)).unwrap(), 2);
        assert_eq!(adjacent_mine_count(&board, (0, 1)).unwrap(), 2);
        assert_eq!(adjacent_mine_count(&board, (0, 2)).unwrap(), 1);
        assert_eq!(adjacent_mine_count(&board, (2, 0)).unwrap(), 1);
        assert_eq!(
            adjacent_mine_count(&board, (3, 0)),
            Err(GameError::OutOfBounds((3, 0)))
        );
    }

    #[test]
    fn surrounded_cell_counts_eight() {
        let mines: Vec<_> = Board::new(3)
            .unwrap()
            .positions()
            .filter(|&pos| pos != (1, 1))
            .collect();
        let board = Board::with_mines(3, &mines).unwrap();

        assert_eq!(adjacent_mine_count(&board, (1, 1)).unwrap(), 8);
    }

    #[test]
    fn numbered_start_cell_does_not_cascade() {
        let mut board = Board::with_mines(3, &[(1, 1)]).unwrap();

        let opened = reveal_cascade(&mut board, (0, 0)).unwrap();

        assert_eq!(opened, 1);
        assert_eq!(revealed(&board), vec![(0, 0)]);
    }

    #[test]
    fn cascade_stops_at_numbered_border() {
        let mut board = Board::with_mines(4, &[(3, 3)]).unwrap();

        let opened = reveal_cascade(&mut board, (0, 0)).unwrap();

        // every safe cell is either zero or touches a zero, so only the mine stays hidden
        let expected: Vec<_> = board.positions().filter(|&pos| pos != (3, 3)).collect();
        assert_eq!(revealed(&board), expected);
        assert_eq!(opened, 15);
        assert_eq!(adjacent_mine_count(&board, (2, 2)).unwrap(), 1);
        assert!(!board[(3, 3)].is_revealed());
    }

    #[test]
    fn cascade_does_not_cross_a_wall_of_numbers() {
        // mines down column 2 split the board; the right side stays hidden
        let mut board = Board::with_mines(5, &[(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)]).unwrap();

        reveal_cascade(&mut board, (2, 0)).unwrap();

        let expected: Vec<_> = board.positions().filter(|&(_, col)| col < 2).collect();
        assert_eq!(revealed(&board), expected);
    }

    #[test]
    fn zero_region_is_filled_transitively() {
        let mut board = Board::with_mines(6, &[(0, 5), (5, 0)]).unwrap();

        reveal_cascade(&mut board, (2, 2)).unwrap();

        for pos in board.positions() {
            let cell = board[pos];
            if cell.is_revealed() && adjacent_mine_count(&board, pos).unwrap() == 0 {
                for neighbor in board.neighbors(pos).unwrap() {
                    assert!(board[neighbor].is_revealed(), "{neighbor:?} next to zero {pos:?}");
                }
            }
        }
        assert!(!board[(0, 5)].is_revealed());
        assert!(!board[(5, 0)].is_revealed());
        assert_eq!(revealed(&board).len(), 34);
    }

    #[test]
    fn cascade_clears_flags_it_passes_over() {
        let mut board = Board::with_mines(4, &[(3, 3)]).unwrap();
        board.set_flag((0, 3)).unwrap();

        reveal_cascade(&mut board, (0, 0)).unwrap();

        assert!(board[(0, 3)].is_revealed());
        assert!(!board[(0, 3)].is_flagged());
    }

    #[test]
    fn revealing_a_mine_does_not_cascade() {
        let mut board = Board::with_mines(3, &[(1, 1)]).unwrap();

        let opened = reveal_cascade(&mut board, (1, 1)).unwrap();

        assert_eq!(opened, 1);
        assert_eq!(revealed(&board), vec![(1, 1)]);
        assert_eq!(board.outcome(), Outcome::Lost);
    }

    #[test]
    fn deep_cascade_on_large_empty_board() {
        let mut board = Board::new(400).unwrap();

        let opened = reveal_cascade(&mut board, (0, 0)).unwrap();

        assert_eq!(opened, 400 * 400);
    }
}
