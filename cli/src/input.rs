use minegrid_core::Position;

/// A move typed by the player, coordinates already zero-based.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Input {
    Reveal(Position),
    Flag(Position),
    Save,
}

/// Parses `r ROW COL`, `f ROW COL` or `save`; rows and columns are 1-based.
///
/// Any word starting with `r` or `f` selects the move, so `reveal 2 3` works too.
pub(crate) fn parse(line: &str) -> Option<Input> {
    let line = line.trim().to_lowercase();
    let mut words = line.split_whitespace();
    let kind = words.next()?;
    if kind == "save" {
        return Some(Input::Save);
    }

    let row = parse_coord(words.next()?)?;
    let col = parse_coord(words.next()?)?;
    match kind.chars().next()? {
        'r' => Some(Input::Reveal((row, col))),
        'f' => Some(Input::Flag((row, col))),
        _ => None,
    }
}

fn parse_coord(word: &str) -> Option<usize> {
    word.parse::<usize>().ok()?.checked_sub(1)
}
