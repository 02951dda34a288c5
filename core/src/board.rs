use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress
/// - InProgress -> Won
/// - InProgress -> Lost
///
/// Restarting goes back to `NotStarted` from anywhere.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No cell activated yet, mines not placed
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl Phase {
    pub const fn is_not_started(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    /// Indicates the game has ended and activations are ignored
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// A square minesweeper board from the first activation to the end of the game.
#[derive(Clone, Debug)]
pub struct Board<P = RandomPlacer> {
    config: GameConfig,
    placer: P,
    cells: Array2<Cell>,
    mine_count: CellCount,
    revealed_count: CellCount,
    phase: Phase,
    triggered_mine: Option<CellIndex>,
}

impl Board<RandomPlacer> {
    /// Fresh board with uniformly random mines, seeded once from `seed`.
    pub fn new_game(size: Coord, density: f64, seed: u64) -> Result<Self> {
        Self::with_placer(GameConfig::new(size, density)?, RandomPlacer::new(seed))
    }
}

impl<P> Board<P> {
    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord {
        self.config.size
    }

    pub fn density(&self) -> f64 {
        self.config.density
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// The mine whose activation lost the game.
    pub fn triggered_mine(&self) -> Option<CellIndex> {
        self.triggered_mine
    }

    pub fn is_revealed(&self, index: CellIndex) -> Result<bool> {
        let index = self.validate_index(index)?;
        Ok(self.cell_ref(index).revealed)
    }

    pub fn cell(&self, index: CellIndex) -> Result<CellView> {
        let index = self.validate_index(index)?;
        Ok(self.cell_ref(index).view())
    }

    /// Visible state of every cell, in index order.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        self.cells.iter().map(|cell| cell.view())
    }

    pub fn index_of(&self, coords: Coord2) -> Result<CellIndex> {
        let size = self.size();
        let (row, col) = coords;
        if row < size && col < size {
            Ok(index_of(size, coords))
        } else {
            Err(GameError::CoordsOutOfRange { row, col, size })
        }
    }

    pub fn coords_of(&self, index: CellIndex) -> Result<Coord2> {
        let index = self.validate_index(index)?;
        Ok(coords_of(self.size(), index))
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_board(self)
    }

    fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        let cells = self.total_cells();
        if index < cells {
            Ok(index)
        } else {
            Err(GameError::IndexOutOfRange { index, cells })
        }
    }

    fn cell_ref(&self, index: CellIndex) -> &Cell {
        &self.cells[coords_of(self.size(), index).to_nd_index()]
    }

    fn cell_mut(&mut self, index: CellIndex) -> &mut Cell {
        let coords = coords_of(self.size(), index).to_nd_index();
        &mut self.cells[coords]
    }

    fn iter_neighbors(&self, index: CellIndex) -> NeighborIter {
        self.cells.iter_neighbors(index)
    }
}

impl<P: MinePlacer> Board<P> {
    pub fn with_placer(config: GameConfig, placer: P) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "New {}x{} game with {} mines",
            config.size,
            config.size,
            config.mine_count()
        );

        Ok(Self {
            cells: Array2::default((config.size, config.size)),
            mine_count: config.mine_count(),
            revealed_count: 0,
            phase: Phase::NotStarted,
            triggered_mine: None,
            config,
            placer,
        })
    }

    /// Back to a hidden, mine-free board with the same size and density.
    pub fn restart(&mut self) {
        self.cells.fill(Cell::default());
        self.mine_count = self.config.mine_count();
        self.revealed_count = 0;
        self.phase = Phase::NotStarted;
        self.triggered_mine = None;
        log::debug!("Game restarted");
    }

    /// Starts over with a different size or density, keeping the placer.
    pub fn reconfigure(&mut self, config: GameConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.cells = Array2::default((config.size, config.size));
        self.restart();
        Ok(())
    }

    /// Opens a cell, laying the mines first when this is the first activation of the game.
    ///
    /// Finished games and already revealed cells are left untouched.
    pub fn activate(&mut self, index: CellIndex) -> Result<RevealOutcome> {
        let index = self.validate_index(index)?;

        if self.phase.is_finished() || self.cell_ref(index).revealed {
            return Ok(RevealOutcome::NoChange);
        }

        if self.phase.is_not_started() {
            self.lay_mines(index);
        }

        Ok(self.reveal_cell(index))
    }

    fn lay_mines(&mut self, safe: CellIndex) {
        let mut layout = self.placer.place(&self.config, safe);
        if layout.size() != self.size() {
            log::warn!(
                "Placer returned a {}x{} layout for a {}x{} board, playing without mines",
                layout.size(),
                layout.size(),
                self.size(),
                self.size()
            );
            layout = MineLayout::from_square_mask(Array2::default(self.cells.dim()));
        }

        if layout.contains_mine(safe) {
            log::warn!("Placer put a mine on the first activated cell {}, removed", safe);
            layout.remove_mine(safe);
        }

        for index in 0..self.total_cells() {
            let mine = layout.contains_mine(index);
            let adjacent_mines = if mine {
                0
            } else {
                layout.adjacent_mine_count(index)
            };
            let cell = self.cell_mut(index);
            cell.mine = mine;
            cell.adjacent_mines = adjacent_mines;
        }

        if layout.mine_count() != self.mine_count {
            log::warn!(
                "Placed mine count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                self.mine_count
            );
        }
        self.mine_count = layout.mine_count();
        self.phase = Phase::InProgress;
    }

    fn reveal_cell(&mut self, index: CellIndex) -> RevealOutcome {
        let cell = self.mark_revealed(index);

        if cell.mine {
            self.triggered_mine = Some(index);
            self.end_game(Phase::Lost);
            return RevealOutcome::HitMine;
        }

        log::debug!("Revealed cell {}, adjacent mines: {}", index, cell.adjacent_mines);
        if cell.adjacent_mines == 0 {
            self.flood_reveal(index);
        }

        if self.triggered_mine.is_none() && self.revealed_count == self.safe_cell_count() {
            self.end_game(Phase::Won);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Opens the whole zero region around `origin` together with its border.
    fn flood_reveal(&mut self, origin: CellIndex) {
        let mut to_visit: VecDeque<_> = self
            .iter_neighbors(origin)
            .filter(|&pos| !self.cell_ref(pos).revealed)
            .collect();
        log::trace!(
            "Starting flood reveal from {}, initial neighbors: {:?}",
            origin,
            to_visit
        );

        while let Some(visit) = to_visit.pop_front() {
            if self.cell_ref(visit).revealed {
                continue;
            }

            // neighbours of a zero cell are opened as they are; only clear zeros spread further
            let cell = self.mark_revealed(visit);
            log::trace!(
                "Flood revealed cell {}, adjacent mines: {}",
                visit,
                cell.adjacent_mines
            );

            if !cell.mine && cell.adjacent_mines == 0 {
                to_visit.extend(
                    self.iter_neighbors(visit)
                        .filter(|&pos| !self.cell_ref(pos).revealed),
                );
            }
        }
    }

    fn mark_revealed(&mut self, index: CellIndex) -> Cell {
        let cell = self.cell_mut(index);
        cell.revealed = true;
        let cell = *cell;
        self.revealed_count += 1;
        cell
    }

    fn end_game(&mut self, phase: Phase) {
        if self.phase.is_finished() {
            return;
        }

        self.phase = phase;
        for cell in self.cells.iter_mut() {
            if !cell.revealed {
                cell.revealed = true;
                self.revealed_count += 1;
            }
        }
        log::debug!("Game ended: {:?}", phase);
    }
}
