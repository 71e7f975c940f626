use chrono::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

/// Overall phase of one play-through.
///
/// Valid transitions:
/// - Idle -> Playing on the first interaction
/// - Playing -> Lost when a reveal hits a hazard
/// - Playing -> Won when every hazard-free cell is open
/// - Lost/Won -> Idle only through an explicit reset
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Idle,
    Playing,
    Lost,
    Won,
}

impl GamePhase {
    /// Indicates the game has ended and input is ignored until reset.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

impl Default for GamePhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// Orchestration boundary around the board model: owns the phase
/// machine, the opened-cell and vaccine-budget counters, and the
/// timestamps the elapsed clock is derived from. Each operation
/// swaps in the fresh board snapshot the model returns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    level: Level,
    board: Board,
    phase: GamePhase,
    opened: CellCount,
    pending_vaccines: CellCount,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(level: Level) -> Result<Self> {
        let board = Board::create(&level)?;
        Ok(Self::assemble(level, board))
    }

    pub fn new_with(level: Level, generator: &mut dyn PositionGenerator) -> Result<Self> {
        let board = Board::create_with(&level, generator)?;
        Ok(Self::assemble(level, board))
    }

    fn assemble(level: Level, board: Board) -> Self {
        // one vaccine per hazard actually placed
        let pending_vaccines = board.hazard_count();
        Self {
            level,
            board,
            phase: GamePhase::Idle,
            opened: 0,
            pending_vaccines,
            started_at: None,
            ended_at: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn opened_count(&self) -> CellCount {
        self.opened
    }

    pub fn pending_vaccines(&self) -> CellCount {
        self.pending_vaccines
    }

    /// Seconds since the first interaction; 0 before it, frozen once
    /// the game ends.
    pub fn elapsed_secs(&self) -> u32 {
        if let Some(started_at) = self.started_at {
            (self.ended_at.unwrap_or_else(Utc::now) - started_at)
                .num_seconds()
                .max(0) as u32
        } else {
            0
        }
    }

    /// Opens a cell, folding the board's report into the phase
    /// machine. Input on a finished game is ignored.
    pub fn reveal(&mut self, pos: Pos) -> Result<()> {
        if self.phase.is_terminal() {
            return Ok(());
        }

        let mut hit_hazard = false;
        let RevealResult { board, opened } = self.board.reveal(pos, || hit_hazard = true)?;
        self.mark_started();
        self.board = board;
        self.opened += opened;

        if hit_hazard {
            self.end_game(GamePhase::Lost);
        } else if self.opened >= self.level.free_cell_count() {
            self.end_game(GamePhase::Won);
        }
        Ok(())
    }

    /// Toggles the vaccine mark on a cell, spending or refunding
    /// budget. Input on a finished game is ignored.
    pub fn toggle_vaccine(&mut self, pos: Pos) -> Result<()> {
        if self.phase.is_terminal() {
            return Ok(());
        }

        let VaccineResult {
            board,
            budget_delta,
        } = self.board.toggle_vaccine(pos, self.pending_vaccines)?;
        self.mark_started();
        self.board = board;
        match budget_delta {
            1 => self.pending_vaccines -= 1,
            -1 => self.pending_vaccines += 1,
            _ => {}
        }
        Ok(())
    }

    /// Discards the current board and starts over on `level`.
    pub fn reset(&mut self, level: Level) -> Result<()> {
        *self = Self::new(level)?;
        Ok(())
    }

    fn mark_started(&mut self) {
        if matches!(self.phase, GamePhase::Idle) {
            let now = Utc::now();
            log::debug!("game started at {}", now);
            self.started_at.replace(now);
            self.phase = GamePhase::Playing;
        }
    }

    fn end_game(&mut self, outcome: GamePhase) {
        let now = Utc::now();
        log::debug!("game ended at {}, {:?}", now, outcome);
        self.ended_at.replace(now);
        self.phase = outcome;
    }
}
