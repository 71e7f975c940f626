use serde::{Deserialize, Serialize};

/// Player interaction state of a single grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Revealed,
    Vaccinated,
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// One square of the board.
///
/// `has_hazard` and `hazards_around` are fixed when the board is
/// created; only `state` changes afterwards, and only through the
/// board's reveal/vaccinate operations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub state: CellState,
    pub has_hazard: bool,
    pub hazards_around: u8,
}

impl Cell {
    pub const fn is_revealed(self) -> bool {
        matches!(self.state, CellState::Revealed)
    }
}
