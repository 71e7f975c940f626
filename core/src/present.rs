use serde::Serialize;

use crate::*;

/// Symbol drawn on a cell carrying the pathogen.
pub const HAZARD_SYMBOL: &str = "\u{1F9A0}";
/// Symbol drawn on a vaccinated cell.
pub const VACCINE_SYMBOL: &str = "\u{1F489}";
/// Symbol for cells with nothing to say.
pub const BLANK_SYMBOL: &str = " ";

pub const DEFAULT_TEXT_COLOR: &str = "black";

/// Text colors for the adjacency digits, indexed by the count.
const DIGIT_COLORS: [&str; 9] = [
    DEFAULT_TEXT_COLOR,
    "#0000fd",
    "#017e00",
    "#fd0000",
    "#010180",
    "#830003",
    "#008080",
    "#000000",
    "#808080",
];

const DIGITS: [&str; 9] = [BLANK_SYMBOL, "1", "2", "3", "4", "5", "6", "7", "8"];

/// What one cell should render: a symbol, its text color, and whether
/// the cell gets revealed styling. A rendering hint, not game state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub symbol: &'static str,
    pub color: &'static str,
    pub shown: bool,
}

impl CellView {
    const fn new(symbol: &'static str, color: &'static str, shown: bool) -> Self {
        Self {
            symbol,
            color,
            shown,
        }
    }
}

/// Derives the visual payload for one cell from the overall phase and
/// the cell itself. Pure; the branches are ordered by priority.
pub fn present(phase: GamePhase, cell: Cell) -> CellView {
    use CellState::*;

    // a lost game exposes every hazard, whatever the cell state
    if phase == GamePhase::Lost && cell.has_hazard {
        return CellView::new(HAZARD_SYMBOL, DEFAULT_TEXT_COLOR, true);
    }

    match cell.state {
        Vaccinated => CellView::new(VACCINE_SYMBOL, DEFAULT_TEXT_COLOR, false),
        Hidden => CellView::new(BLANK_SYMBOL, DEFAULT_TEXT_COLOR, false),
        Revealed if cell.has_hazard => CellView::new(HAZARD_SYMBOL, DEFAULT_TEXT_COLOR, true),
        Revealed if cell.hazards_around == 0 => {
            CellView::new(BLANK_SYMBOL, DEFAULT_TEXT_COLOR, true)
        }
        Revealed => CellView::new(
            DIGITS[cell.hazards_around as usize],
            DIGIT_COLORS[cell.hazards_around as usize],
            true,
        ),
    }
}
