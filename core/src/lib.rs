#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use placer::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod placer;
mod snapshot;
mod types;

/// Side of the classic board.
pub const DEFAULT_SIZE: Coord = 9;

/// Fraction of cells holding a mine on the classic board.
pub const DEFAULT_DENSITY: f64 = 0.12;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub density: f64,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, density: f64) -> Self {
        Self { size, density }
    }

    pub fn new(size: Coord, density: f64) -> Result<Self> {
        let config = Self::new_unchecked(size, density);
        config.validate()?;
        Ok(config)
    }

    /// Checks that the board is non-empty, the density is in `(0, 1)` and at least one cell stays free of mines.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize.into());
        }

        let cells = self
            .size
            .checked_mul(self.size)
            .ok_or(ConfigError::SizeOverflow)?;

        if !(self.density > 0.0 && self.density < 1.0) {
            return Err(ConfigError::DensityOutOfRange.into());
        }

        let mines = mine_count_for(cells, self.density);
        if mines >= cells {
            return Err(ConfigError::TooManyMines { mines, cells }.into());
        }

        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        self.size.saturating_mul(self.size)
    }

    /// `ceil(size * size * density)`.
    pub fn mine_count(&self) -> CellCount {
        mine_count_for(self.total_cells(), self.density)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mine_count())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_SIZE, DEFAULT_DENSITY)
    }
}

/// Relative rounding error below which a mine count is taken as whole.
const CEIL_TOLERANCE: f64 = 1e-9;

// f64::ceil lives in std
fn mine_count_for(cells: CellCount, density: f64) -> CellCount {
    let exact = cells as f64 * density;
    let whole = exact as CellCount;
    if exact - whole as f64 > exact * CEIL_TOLERANCE {
        whole + 1
    } else {
        whole
    }
}

/// Where the mines of one game are.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub(crate) fn from_square_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        if rows != cols {
            return Err(ConfigError::InvalidBoardShape.into());
        }
        if rows == 0 {
            return Err(ConfigError::ZeroSize.into());
        }
        Ok(Self::from_square_mask(mine_mask))
    }

    pub fn from_mine_indices(size: Coord, mine_indices: &[CellIndex]) -> Result<Self> {
        if size == 0 {
            return Err(ConfigError::ZeroSize.into());
        }
        let cells = size.checked_mul(size).ok_or(ConfigError::SizeOverflow)?;
        let mut mine_mask: Array2<bool> = Array2::default((size, size));

        for &index in mine_indices {
            if index >= cells {
                return Err(GameError::IndexOutOfRange { index, cells });
            }
            mine_mask[coords_of(size, index).to_nd_index()] = true;
        }

        Ok(Self::from_square_mask(mine_mask))
    }

    pub fn size(&self) -> Coord {
        self.mine_mask.nrows()
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Off-board indices hold no mine.
    pub fn contains_mine(&self, index: CellIndex) -> bool {
        index < self.total_cells() && self[index]
    }

    pub fn adjacent_mine_count(&self, index: CellIndex) -> u8 {
        // at most 8 neighbours
        self.mine_mask
            .iter_neighbors(index)
            .filter(|&pos| self[pos])
            .count() as u8
    }

    pub(crate) fn remove_mine(&mut self, index: CellIndex) {
        let coords = coords_of(self.size(), index).to_nd_index();
        if self.mine_mask[coords] {
            self.mine_mask[coords] = false;
            self.mine_count -= 1;
        }
    }
}

impl Index<CellIndex> for MineLayout {
    type Output = bool;

    fn index(&self, index: CellIndex) -> &Self::Output {
        // an empty mask still panics on bounds rather than dividing by zero
        &self.mine_mask[coords_of(self.size().max(1), index).to_nd_index()]
    }
}

/// What a single activation did to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether the presentation needs to redraw.
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}
