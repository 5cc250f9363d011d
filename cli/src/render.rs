use minegrid_core::{BoardView, CellView};

const TITLE: &str = "MINESWEEPER";
const SAVE_HINT: &str = "   (type 'save' to save game)";

/// Text drawing of the board with a banner and 1-based row/column headers.
pub(crate) fn board(view: &BoardView) -> String {
    let width = view.size * 3;
    let mut out = format!(
        "\n *{TITLE:*^width$}\n{SAVE_HINT:^width$}\n{:-<rule$}",
        " ",
        rule = width + 2
    );

    for (row, cells) in view.rows().enumerate() {
        out.push_str(&format!("\n {:02} ", row + 1));
        for cell in cells {
            out.push(mark(cell));
            out.push_str("  ");
        }
    }

    out.push_str("\n   ");
    for col in 1..=view.size {
        out.push_str(&format!("{col:02} "));
    }
    out.push_str("\n\n");
    out
}

/// `$` for a shown mine, `F` for a flag, the adjacent count when revealed, `*` otherwise.
fn mark(cell: CellView) -> char {
    match cell {
        CellView {
            mine: Some(true), ..
        } => '$',
        CellView {
            flagged: true,
            mine: None,
            ..
        } => 'F',
        CellView {
            adjacent_mines: Some(count),
            ..
        } => char::from_digit(count.into(), 10).unwrap_or('?'),
        _ => '*',
    }
}

#[cfg(test)]
mod tests {
    use minegrid_core::Board;

    use super::*;

    #[test]
    fn draws_marks_and_headers() {
        let mut board = Board::with_mines(3, &[(1, 1)]).unwrap();
        board.reveal((0, 0)).unwrap();
        board.set_flag((2, 2)).unwrap();

        let text = board_text(&board, false);

        assert_eq!(
            text,
            "\n *MINESWEEPER\n   (type 'save' to save game)\n ----------\
             \n 01 1  *  *  \n 02 *  *  *  \n 03 *  *  F  \n   01 02 03 \n\n"
        );
    }

    #[test]
    fn lost_view_shows_mines_and_hides_flags() {
        let mut board = Board::with_mines(2, &[(0, 1)]).unwrap();
        board.set_flag((1, 0)).unwrap();
        board.reveal((1, 1)).unwrap();

        let text = board_text(&board, true);

        assert!(text.contains("\n 01 *  $  "));
        assert!(text.contains("\n 02 *  1  "));
    }

    #[test]
    fn banner_is_centred_on_wide_boards() {
        let text = board_text(&Board::new(5).unwrap(), false);

        assert!(text.starts_with("\n ***MINESWEEPER**\n"));
    }

    #[test]
    fn headers_grow_past_two_digits() {
        let board = Board::new(100).unwrap();

        let text = board_text(&board, false);

        assert!(text.contains("\n 100 *  "));
        assert!(text.contains(" 99 100 \n\n"));
    }

    fn board_text(source: &Board, show_mines: bool) -> String {
        board(&BoardView::from_board(source, show_mines))
    }
}
