use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only copy of everything a player may see, taken after an activation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: Coord,
    pub phase: Phase,
    pub mine_count: CellCount,
    pub revealed_count: CellCount,
    pub triggered_mine: Option<CellIndex>,
    /// Indexed `[row, col]`.
    pub cells: Array2<CellView>,
}

impl BoardSnapshot {
    pub fn from_board<P>(board: &Board<P>) -> Self {
        let size = board.size();
        let mut cells = Array2::from_elem((size, size), CellView::Hidden);

        for (index, view) in board.cells().enumerate() {
            cells[coords_of(size, index).to_nd_index()] = view;
        }

        Self {
            size,
            phase: board.phase(),
            mine_count: board.mine_count(),
            revealed_count: board.revealed_count(),
            triggered_mine: board.triggered_mine(),
            cells,
        }
    }

    pub fn cell(&self, index: CellIndex) -> Option<CellView> {
        if index < self.cells.len() {
            Some(self.cells[coords_of(self.size, index).to_nd_index()])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_board_maps_visible_cells() {
        let config = GameConfig::new(4, 0.125).unwrap();
        let mut board = Board::with_placer(config, FixedPlacer::new(&[5, 10])).unwrap();
        board.activate(3).unwrap();

        let snapshot = board.snapshot();

        assert_eq!(snapshot.phase, Phase::InProgress);
        assert_eq!(snapshot.mine_count, 2);
        // 3 is a zero cell: it opens 2, 6 and 7 around it
        assert_eq!(snapshot.revealed_count, 4);
        assert_eq!(snapshot.cells[(0, 3)], CellView::Clear(0));
        assert_eq!(snapshot.cells[(1, 2)], CellView::Clear(2));
        assert_eq!(snapshot.cells[(1, 1)], CellView::Hidden);
        assert_eq!(snapshot.cell(7), Some(CellView::Clear(1)));
        assert_eq!(snapshot.cell(16), None);
    }

    #[test]
    fn snapshot_survives_json() {
        let mut board = Board::with_placer(
            GameConfig::new(3, 0.1).unwrap(),
            FixedPlacer::new(&[8]),
        )
        .unwrap();
        board.activate(0).unwrap();
        board.restart();
        board.activate(8).unwrap();

        let snapshot = board.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let decoded: BoardSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, snapshot);
        assert_eq!(decoded.triggered_mine, None);
    }
}
