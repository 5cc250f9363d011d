use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::*;

/// Version written into every saved record.
pub const FORMAT_VERSION: u32 = 1;

/// On-disk shape of a board: its size and row-major cells.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct SavedBoard {
    version: u32,
    size: Coord,
    cells: Vec<Cell>,
}

/// Serializes a board into a self-describing JSON record.
pub fn encode(board: &Board) -> core::result::Result<String, PersistError> {
    let saved = SavedBoard {
        version: FORMAT_VERSION,
        size: board.size(),
        cells: board.cells().collect(),
    };
    serde_json::to_string_pretty(&saved).map_err(|err| PersistError::Io(io::Error::other(err)))
}

/// Parses a record produced by [`encode`], checking its shape against the declared size.
pub fn decode(data: &str) -> core::result::Result<Board, PersistError> {
    let saved: SavedBoard =
        serde_json::from_str(data).map_err(|err| corrupt(format!("malformed record: {err}")))?;

    if saved.version != FORMAT_VERSION {
        return Err(corrupt(format!("unsupported version {}", saved.version)));
    }
    if saved.size == 0 {
        return Err(corrupt("board size is zero".into()));
    }
    let expected = saved
        .size
        .checked_mul(saved.size)
        .ok_or_else(|| corrupt(format!("board size {} is too large", saved.size)))?;
    if saved.cells.len() != expected {
        return Err(corrupt(format!(
            "expected {} cells for size {}, found {}",
            expected,
            saved.size,
            saved.cells.len()
        )));
    }
    if let Some(index) = saved.cells.iter().position(|cell| !cell.is_consistent()) {
        return Err(corrupt(format!("cell {index} is both revealed and flagged")));
    }

    Board::from_cells(saved.size, saved.cells)
        .ok_or_else(|| corrupt("cells do not form a square grid".into()))
}

fn corrupt(reason: String) -> PersistError {
    log::warn!("Rejected saved game: {}", reason);
    PersistError::CorruptData(reason)
}

/// Keyed storage for suspended games.
pub trait BoardStore {
    fn save(&mut self, board: &Board, name: &str) -> core::result::Result<(), PersistError>;
    fn load(&self, name: &str) -> core::result::Result<Board, PersistError>;
}

/// Stores each game as `<name>.json` inside one directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the game saved as `name`; names outside `[A-Za-z0-9_-]` are refused.
    pub fn path_for(&self, name: &str) -> core::result::Result<PathBuf, PersistError> {
        let name = validate_name(name)?;
        Ok(self.dir.join(format!("{name}.json")))
    }
}

impl BoardStore for FileStore {
    fn save(&mut self, board: &Board, name: &str) -> core::result::Result<(), PersistError> {
        let path = self.path_for(name)?;
        let data = encode(board)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, data)?;
        log::debug!("Saved game '{}' to {}", name, path.display());
        Ok(())
    }

    fn load(&self, name: &str) -> core::result::Result<Board, PersistError> {
        let path = self.path_for(name)?;
        let data = fs::read_to_string(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => PersistError::NotFound(name.to_string()),
            _ => PersistError::Io(err),
        })?;
        let board = decode(&data)?;
        log::debug!("Loaded game '{}' from {}", name, path.display());
        Ok(board)
    }
}

/// Keeps encoded records in memory, for embedding and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Stores a raw record under `name`, bypassing encoding.
    pub fn insert_raw(&mut self, name: &str, data: impl Into<String>) {
        self.records.insert(name.to_string(), data.into());
    }
}

impl BoardStore for MemoryStore {
    fn save(&mut self, board: &Board, name: &str) -> core::result::Result<(), PersistError> {
        let name = validate_name(name)?;
        let data = encode(board)?;
        self.records.insert(name.to_string(), data);
        Ok(())
    }

    fn load(&self, name: &str) -> core::result::Result<Board, PersistError> {
        let data = self
            .records
            .get(name)
            .ok_or_else(|| PersistError::NotFound(name.to_string()))?;
        decode(data)
    }
}

/// Save names double as file stems, so they are kept to `[A-Za-z0-9_-]` rather than rewritten.
pub fn validate_name(name: &str) -> core::result::Result<&str, PersistError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(name)
    } else {
        Err(PersistError::InvalidName(name.to_string()))
    }
}
