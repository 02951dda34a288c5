use thiserror::Error;

use crate::{CellCount, CellIndex, Coord};

/// Why a board configuration was rejected.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board size must be at least 1")]
    ZeroSize,
    #[error("Board size is too large")]
    SizeOverflow,
    #[error("Mine density must be strictly between 0 and 1")]
    DensityOutOfRange,
    #[error("{mines} mines leave no safe cell on a board of {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("Mine mask is not square")]
    InvalidBoardShape,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("Cell index {index} out of range, board has {cells} cells")]
    IndexOutOfRange { index: CellIndex, cells: CellCount },
    #[error("Cell ({row}, {col}) out of range, board is {size}x{size}")]
    CoordsOutOfRange { row: Coord, col: Coord, size: Coord },
}

pub type Result<T> = core::result::Result<T, GameError>;
