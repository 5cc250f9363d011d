use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use minegrid_core::*;

use crate::input::{self, Input};
use crate::render;

const MOVE_PROMPT: &str = "Enter your move in this format : 'r/f row col' (ex: 'r 3 4'): ";
const INVALID_GUESS: &str = "Invalid guess. Please guess again.";

/// How the session should start, as requested on the command line.
#[derive(Clone, Debug, Default)]
pub(crate) struct Setup {
    pub size: Option<usize>,
    pub load: Option<String>,
    pub seed: Option<u64>,
}

/// Line-oriented prompts over any reader/writer pair.
pub(crate) struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            bail!("input closed");
        }
        // garbled bytes become replacement characters and fail parsing like any other typo
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.ask(prompt)?.eq_ignore_ascii_case("y"))
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn show(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        Ok(())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

pub(crate) fn run<R, W, S>(console: &mut Console<R, W>, store: &mut S, setup: Setup) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: BoardStore,
{
    let mut game = start(console, store, setup)?;
    play(console, &mut game, store)
}

fn start<R, W, S>(console: &mut Console<R, W>, store: &S, setup: Setup) -> Result<Game>
where
    R: BufRead,
    W: Write,
    S: BoardStore,
{
    let name = match setup.load {
        Some(name) => Some(name),
        None if setup.size.is_none() && console.confirm("Do you want to load a game (y/n)? ")? => {
            Some(console.ask("What's the name of the file? ")?)
        }
        None => None,
    };
    if let Some(name) = name {
        return Game::resume(store, &name).with_context(|| format!("Could not load game '{name}'"));
    }

    let size = match setup.size {
        Some(size) => size,
        None => ask_size(console)?,
    };
    let config = GameConfig::new(size).context("Could not set up board")?;
    let generator = setup
        .seed
        .map(RandomMineGenerator::new)
        .unwrap_or_else(RandomMineGenerator::from_entropy);
    log::debug!("Starting {}x{} board, seed {}", size, size, generator.seed());
    Ok(Game::new(config, generator)?)
}

fn ask_size<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<usize> {
    loop {
        let answer = console.ask("How many rows/cols would you like the board to have? ")?;
        match answer.parse::<usize>() {
            Ok(size) if GameConfig::new(size).is_ok() => return Ok(size),
            _ => console.say("Please enter a positive number.")?,
        }
    }
}

fn play<R, W, S>(console: &mut Console<R, W>, game: &mut Game, store: &mut S) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: BoardStore,
{
    while !game.is_finished() {
        console.show(&render::board(&game.view()))?;

        loop {
            let line = console.ask(MOVE_PROMPT)?;
            let command = match input::parse(&line) {
                Some(Input::Reveal(pos)) => Command::Reveal(pos),
                Some(Input::Flag(pos)) => Command::Flag(pos),
                Some(Input::Save) => {
                    Command::Save(console.ask("What would you like to call your game? ")?)
                }
                None => {
                    console.say(INVALID_GUESS)?;
                    continue;
                }
            };
            let farewell = match &command {
                Command::Save(name) => format!("Load from '{name}' to continue. Bye!"),
                _ => String::new(),
            };

            let outcome = match game.apply(command, store) {
                Err(SessionError::Persist(err @ PersistError::InvalidName(_))) => {
                    console.say(&err.to_string())?;
                    continue;
                }
                result => result.context("Could not apply move")?,
            };
            match outcome {
                TurnOutcome::InvalidGuess => console.say(INVALID_GUESS)?,
                TurnOutcome::Saved => {
                    console.say(&farewell)?;
                    break;
                }
                TurnOutcome::Continue | TurnOutcome::Won | TurnOutcome::Lost => break,
            }
        }
    }

    match game.state() {
        GameState::Won => console.say("You won!")?,
        GameState::Lost => {
            console.show(&render::board(&game.view()))?;
            console.say("\nBoom. You lose!")?;
        }
        GameState::Saved | GameState::Playing => {}
    }
    Ok(())
}
