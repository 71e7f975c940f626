use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use present::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod present;
mod session;
mod types;

/// Immutable level descriptor, chosen by the player before a board is
/// created. Supplied as literal data; never changes during play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub label: String,
    pub rows: Coord,
    pub columns: Coord,
    pub hazard_count: CellCount,
}

impl Level {
    pub fn new(
        label: impl Into<String>,
        rows: Coord,
        columns: Coord,
        hazard_count: CellCount,
    ) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(GameError::InvalidLevel);
        }
        Ok(Self {
            label: label.into(),
            rows,
            columns,
            hazard_count,
        })
    }

    pub fn beginner() -> Self {
        Self {
            label: "Beginner".into(),
            rows: 9,
            columns: 9,
            hazard_count: 10,
        }
    }

    pub fn intermediate() -> Self {
        Self {
            label: "Intermediate".into(),
            rows: 16,
            columns: 16,
            hazard_count: 40,
        }
    }

    pub fn expert() -> Self {
        Self {
            label: "Expert".into(),
            rows: 16,
            columns: 30,
            hazard_count: 99,
        }
    }

    /// The stock levels offered to the player.
    pub fn all() -> Vec<Self> {
        vec![Self::beginner(), Self::intermediate(), Self::expert()]
    }

    pub const fn total_cells(&self) -> CellCount {
        cell_total(self.rows, self.columns)
    }

    /// Number of hazard-free cells; the threshold a session's opened
    /// count must reach to win. Floored at zero when the level asks
    /// for more hazards than it has cells.
    pub const fn free_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.hazard_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_cell_count_subtracts_hazards() {
        let level = Level::new("test", 5, 6, 7).unwrap();
        assert_eq!(level.free_cell_count(), 23);
    }

    #[test]
    fn free_cell_count_floors_at_zero() {
        let level = Level::new("test", 5, 6, 99).unwrap();
        assert_eq!(level.free_cell_count(), 0);
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert_eq!(Level::new("test", 0, 9, 1), Err(GameError::InvalidLevel));
        assert_eq!(Level::new("test", 9, 0, 1), Err(GameError::InvalidLevel));
    }

    #[test]
    fn stock_levels_match_product_configuration() {
        assert_eq!(Level::beginner().total_cells(), 81);
        assert_eq!(Level::intermediate().hazard_count, 40);
        let expert = Level::expert();
        assert_eq!((expert.rows, expert.columns), (16, 30));
        assert_eq!(expert.free_cell_count(), 381);
    }

    #[test]
    fn level_deserializes_from_literal_data() {
        let level: Level = serde_json::from_str(
            r#"{ "label": "Beginner", "rows": 9, "columns": 9, "hazard_count": 10 }"#,
        )
        .unwrap();
        assert_eq!(level, Level::beginner());
    }
}
