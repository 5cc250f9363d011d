use serde::{Deserialize, Serialize};

/// Concealment and mine state of one board position.
///
/// A revealed cell is never flagged; the board's mutators keep that invariant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(rename = "mine")]
    pub(crate) is_mine: bool,
    #[serde(rename = "revealed")]
    pub(crate) is_revealed: bool,
    #[serde(rename = "flagged")]
    pub(crate) is_flagged: bool,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    pub const fn is_revealed(self) -> bool {
        self.is_revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.is_flagged
    }

    pub const fn is_consistent(self) -> bool {
        !(self.is_revealed && self.is_flagged)
    }

    pub(crate) fn reveal(&mut self) {
        self.is_revealed = true;
        self.is_flagged = false;
    }
}
