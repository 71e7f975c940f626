use std::collections::{HashSet, VecDeque};

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular grid of cells with a hazard layout fixed at creation.
///
/// State-changing operations never touch `self`: each one returns a
/// fresh `Board`, so a caller can diff the previous snapshot against
/// the new one and no two owners ever alias the same grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    hazard_count: CellCount,
}

/// Result of [`Board::reveal`]: the next snapshot plus how many cells
/// went from hidden to revealed.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealResult {
    pub board: Board,
    pub opened: CellCount,
}

/// Result of [`Board::toggle_vaccine`]: the next snapshot plus the
/// budget movement (`+1` consumed, `-1` returned, `0` no-op).
#[derive(Clone, Debug, PartialEq)]
pub struct VaccineResult {
    pub board: Board,
    pub budget_delta: i32,
}

impl Board {
    /// Builds a board for `level` with randomly placed hazards.
    pub fn create(level: &Level) -> Result<Self> {
        Self::create_with(level, &mut RandomPositionGenerator::from_entropy())
    }

    /// Builds a board for `level`, asking `generator` for the hazard
    /// positions. A request for more hazards than the grid has cells
    /// is clamped by the generator contract.
    pub fn create_with(level: &Level, generator: &mut dyn PositionGenerator) -> Result<Self> {
        if level.rows == 0 || level.columns == 0 {
            return Err(GameError::InvalidLevel);
        }

        let mut cells: Array2<Cell> =
            Array2::default((level.rows as usize, level.columns as usize));
        let hazards = generator.generate(level.rows, level.columns, level.hazard_count);

        for &pos in &hazards {
            cells[pos.to_nd_index()].has_hazard = true;
        }
        for &pos in &hazards {
            for neighbor in cells.iter_neighbors(pos) {
                cells[neighbor.to_nd_index()].hazards_around += 1;
            }
        }

        let hazard_count = hazards.len().try_into().unwrap();
        log::debug!(
            "created {}x{} board with {} hazards",
            level.rows,
            level.columns,
            hazard_count
        );

        Ok(Self {
            cells,
            hazard_count,
        })
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn columns(&self) -> Coord {
        self.size().1
    }

    /// Board dimensions as `(rows, columns)`.
    pub fn size(&self) -> Pos {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    /// Number of hazards actually placed (clamped to the cell total).
    pub fn hazard_count(&self) -> CellCount {
        self.hazard_count
    }

    pub fn cell_at(&self, pos: Pos) -> Cell {
        self.cells[pos.to_nd_index()]
    }

    /// Positions of the grid in row-major order, paired with cells.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        let (rows, columns) = self.size();
        all_positions(rows, columns).map(|pos| (pos, self.cells[pos.to_nd_index()]))
    }

    pub fn validate_pos(&self, pos: Pos) -> Result<Pos> {
        let (rows, columns) = self.size();
        if pos.0 < rows && pos.1 < columns {
            Ok(pos)
        } else {
            Err(GameError::InvalidPosition)
        }
    }

    /// Opens the cell at `pos`.
    ///
    /// Vaccinated and already-revealed targets are declared no-ops.
    /// A hazardous target is revealed alone and `on_hazard` is
    /// invoked, leaving the caller to end the game. Any other target
    /// is revealed and, when its count is zero, flood-filled through
    /// the connected zero-count region.
    pub fn reveal(&self, pos: Pos, on_hazard: impl FnOnce()) -> Result<RevealResult> {
        let pos = self.validate_pos(pos)?;
        let cell = self.cells[pos.to_nd_index()];

        if !matches!(cell.state, CellState::Hidden) {
            return Ok(RevealResult {
                board: self.clone(),
                opened: 0,
            });
        }

        let mut next = self.clone();

        if cell.has_hazard {
            next.cells[pos.to_nd_index()].state = CellState::Revealed;
            on_hazard();
            return Ok(RevealResult {
                board: next,
                opened: 1,
            });
        }

        let opened = next.open_cell(pos);
        Ok(RevealResult {
            board: next,
            opened,
        })
    }

    /// Reveals `pos` and cascades through zero-count chains.
    ///
    /// Iterative on purpose: an explicit queue keeps a board-wide
    /// cascade off the call stack. Hazards never enter the queue --
    /// the cascade only grows from cells whose `hazards_around` is
    /// zero, and such cells have no hazardous neighbors.
    fn open_cell(&mut self, pos: Pos) -> CellCount {
        self.cells[pos.to_nd_index()].state = CellState::Revealed;
        let mut opened: CellCount = 1;

        if self.cells[pos.to_nd_index()].hazards_around > 0 {
            return opened;
        }

        let mut visited = HashSet::from([pos]);
        let mut to_visit: VecDeque<_> = self
            .cells
            .iter_neighbors(pos)
            .filter(|&p| self.cells[p.to_nd_index()].state == CellState::Hidden)
            .collect();
        log::trace!("flood fill from {:?}, initial neighbors: {:?}", pos, to_visit);

        while let Some(visit_pos) = to_visit.pop_front() {
            if !visited.insert(visit_pos) {
                continue;
            }

            // skip vaccinated or already opened cells
            if self.cells[visit_pos.to_nd_index()].state != CellState::Hidden {
                continue;
            }

            let visit_cell = &mut self.cells[visit_pos.to_nd_index()];
            visit_cell.state = CellState::Revealed;
            let visit_count = visit_cell.hazards_around;
            opened += 1;
            log::trace!(
                "flood opened {:?}, hazards around: {}",
                visit_pos,
                visit_count
            );

            // only zero-count cells keep the cascade going
            if visit_count == 0 {
                to_visit.extend(
                    self.cells
                        .iter_neighbors(visit_pos)
                        .filter(|&p| self.cells[p.to_nd_index()].state == CellState::Hidden)
                        .filter(|p| !visited.contains(p)),
                );
            }
        }

        opened
    }

    /// Toggles the vaccine mark at `pos` against the caller's
    /// remaining budget.
    ///
    /// Revealed targets are no-ops, as is marking with an exhausted
    /// budget; removing a mark is always allowed and returns its
    /// budget to the pool.
    pub fn toggle_vaccine(&self, pos: Pos, pending_budget: CellCount) -> Result<VaccineResult> {
        use CellState::*;

        let pos = self.validate_pos(pos)?;
        let mut next = self.clone();
        let cell = &mut next.cells[pos.to_nd_index()];

        let budget_delta = match cell.state {
            Revealed => 0,
            Hidden if pending_budget == 0 => 0,
            Hidden => {
                cell.state = Vaccinated;
                1
            }
            Vaccinated => {
                cell.state = Hidden;
                -1
            }
        };

        Ok(VaccineResult {
            board: next,
            budget_delta,
        })
    }
}
