use crate::*;
pub use random::*;

mod random;

/// Source of hazard positions for a new board.
///
/// Implementations return distinct in-bounds positions, at most
/// `count` of them (all of them when `count` covers the whole grid),
/// with every position equally likely to be picked.
pub trait PositionGenerator {
    fn generate(&mut self, rows: Coord, columns: Coord, count: CellCount) -> Vec<Pos>;
}

/// Generator that replays a preset list of positions.
///
/// The deterministic end of the generator seam: hand it the exact
/// layout a test or replay needs and the board comes out identical
/// every time. Out-of-bounds entries are dropped, and at most `count`
/// positions are handed out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedPositionGenerator {
    positions: Vec<Pos>,
}

impl FixedPositionGenerator {
    pub fn new(positions: impl Into<Vec<Pos>>) -> Self {
        Self {
            positions: positions.into(),
        }
    }
}

impl PositionGenerator for FixedPositionGenerator {
    fn generate(&mut self, rows: Coord, columns: Coord, count: CellCount) -> Vec<Pos> {
        let mut positions: Vec<Pos> = self
            .positions
            .iter()
            .copied()
            .filter(|&(row, column)| row < rows && column < columns)
            .collect();
        positions.truncate(count as usize);
        positions
    }
}
