use std::io;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board size must be positive")]
    InvalidSize,
    #[error("Position {0:?} is outside the board")]
    OutOfBounds(Position),
    #[error("Too many mines, requested {requested} but only {available} cells")]
    TooManyMines { requested: usize, available: usize },
    #[error("Layout has {placed} distinct mines but {requested} were requested")]
    MineCountMismatch { requested: usize, placed: usize },
    #[error("Mines were already placed or the board has been played")]
    AlreadyPopulated,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Could not access saved game: {0}")]
    Io(#[from] io::Error),
    #[error("Save name '{0}' may only use letters, digits, '-' and '_'")]
    InvalidName(String),
    #[error("No saved game named '{0}'")]
    NotFound(String),
    #[error("Saved game is corrupt: {0}")]
    CorruptData(String),
}

/// Failure of a single command dispatched to a running game.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}
