use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Position outside the board")]
    InvalidPosition,
    #[error("Level needs at least one row and one column")]
    InvalidLevel,
}

pub type Result<T> = std::result::Result<T, GameError>;
