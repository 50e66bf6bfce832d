use thiserror::Error;

use crate::{CellCount, PlayerId};

/// Rejected board parameters, reported once at setup.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board must be at least one cell wide and tall")]
    EmptyBoard,
    #[error("At least one mine is required")]
    NoMines,
    #[error("Too many mines, requested {requested} but at most {max} fit")]
    TooManyMines { requested: CellCount, max: CellCount },
    #[error("At least two players are required, got {0}")]
    TooFewPlayers(u8),
}

/// Rejected move. The game state is left untouched whenever one is returned.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Cell is already uncovered")]
    NotCovered,
    #[error("Cell is flagged")]
    Flagged,
    #[error("Cell is not flagged")]
    NotFlagged,
    #[error("Flag belongs to {owner}")]
    NotFlagOwner { owner: PlayerId },
    #[error("No flags left")]
    NoFlagsLeft,
    #[error("Flag needs an adjacent revealed number or an adjacent own flag")]
    UnsupportedFlag,
    #[error("Board has not been populated yet")]
    NotPopulated,
}

pub type Result<T, E = GameError> = core::result::Result<T, E>;
