use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
    Lost,
    /// Suspended through a store; the session is over without a result.
    Saved,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// A player move, already parsed and converted to zero-based coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Position),
    Flag(Position),
    Save(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The target was off the board or already revealed, ask again.
    InvalidGuess,
    Continue,
    Won,
    Lost,
    Saved,
}

impl TurnOutcome {
    pub const fn ends_session(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Saved)
    }
}

/// One session over a board, from setup until it is won, lost or saved.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    board: Board,
    state: GameState,
    triggered_mine: Option<Position>,
}

impl Game {
    /// Sets up a fresh board and places its mines.
    pub fn new(config: GameConfig, generator: impl MineGenerator) -> Result<Self> {
        let mut board = Board::new(config.size)?;
        generator.populate(&mut board, config.mines)?;
        log::debug!(
            "New {}x{} game with {} mines",
            config.size,
            config.size,
            config.mines
        );
        Ok(Self::from_board(board))
    }

    /// Continues on an existing board, starting in whatever state its cells imply.
    pub fn from_board(board: Board) -> Self {
        let state = match board.outcome() {
            Outcome::InProgress => GameState::Playing,
            Outcome::Won => GameState::Won,
            Outcome::Lost => GameState::Lost,
        };
        if state.is_finished() {
            log::debug!("Board is already decided: {:?}", state);
        }
        Self {
            board,
            state,
            triggered_mine: None,
        }
    }

    pub fn resume<S: BoardStore + ?Sized>(
        store: &S,
        name: &str,
    ) -> core::result::Result<Self, PersistError> {
        store.load(name).map(Self::from_board)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mine that ended the game, if it was lost by a reveal.
    pub fn triggered_mine(&self) -> Option<Position> {
        self.triggered_mine
    }

    /// A guess may target any concealed cell on the board, flagged or not.
    pub fn is_valid_guess(&self, pos: Position) -> bool {
        self.board.is_in_bounds(pos) && !self.board[pos].is_revealed()
    }

    /// Snapshot for display; mines are shown once the game is lost.
    pub fn view(&self) -> BoardView {
        BoardView::from_board(&self.board, self.state == GameState::Lost)
    }

    pub fn apply<S: BoardStore + ?Sized>(
        &mut self,
        command: Command,
        store: &mut S,
    ) -> core::result::Result<TurnOutcome, SessionError> {
        match command {
            Command::Reveal(pos) => Ok(self.reveal(pos)?),
            Command::Flag(pos) => Ok(self.flag(pos)?),
            Command::Save(name) => Ok(self.save(store, &name)?),
        }
    }

    pub fn reveal(&mut self, pos: Position) -> Result<TurnOutcome> {
        self.check_playing()?;
        if !self.is_valid_guess(pos) {
            log::debug!("Invalid reveal target {:?}", pos);
            return Ok(TurnOutcome::InvalidGuess);
        }

        if self.board.is_mine(pos)? {
            log::debug!("Hit mine at {:?}", pos);
            self.triggered_mine = Some(pos);
            self.state = GameState::Lost;
            return Ok(TurnOutcome::Lost);
        }

        reveal_cascade(&mut self.board, pos)?;
        Ok(self.check_won())
    }

    pub fn flag(&mut self, pos: Position) -> Result<TurnOutcome> {
        self.check_playing()?;
        if !self.is_valid_guess(pos) {
            log::debug!("Invalid flag target {:?}", pos);
            return Ok(TurnOutcome::InvalidGuess);
        }

        self.board.set_flag(pos)?;
        log::debug!("Flagged {:?}", pos);
        Ok(self.check_won())
    }

    /// Writes the board to `store` and ends the session. On failure the game keeps going.
    pub fn save<S: BoardStore + ?Sized>(
        &mut self,
        store: &mut S,
        name: &str,
    ) -> core::result::Result<TurnOutcome, SessionError> {
        self.check_playing()?;
        store.save(&self.board, name)?;
        self.state = GameState::Saved;
        log::debug!("Game saved as '{}'", name);
        Ok(TurnOutcome::Saved)
    }

    fn check_won(&mut self) -> TurnOutcome {
        if self.board.is_won() {
            log::debug!("All mines flagged");
            self.state = GameState::Won;
            TurnOutcome::Won
        } else {
            TurnOutcome::Continue
        }
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
