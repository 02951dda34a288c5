use alloc::vec::Vec;
use ndarray::Array2;

use super::*;

/// Places mines at predetermined indices, for reproducible boards.
///
/// Indices off the board or equal to the first activated cell are dropped with a warning, so the resulting mine count
/// may be lower than the configured one.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedPlacer {
    mines: Vec<CellIndex>,
}

impl FixedPlacer {
    pub fn new(mines: &[CellIndex]) -> Self {
        Self {
            mines: mines.to_vec(),
        }
    }
}

impl MinePlacer for FixedPlacer {
    fn place(&mut self, config: &GameConfig, safe: CellIndex) -> MineLayout {
        let size = config.size;
        let total_cells = config.total_cells();
        let mut mine_mask: Array2<bool> = Array2::default((size, size));

        for &index in &self.mines {
            if index >= total_cells {
                log::warn!("Fixed mine at {} is off the board, dropped", index);
                continue;
            }
            if index == safe {
                log::warn!("Fixed mine at {} is the first activated cell, dropped", index);
                continue;
            }
            mine_mask[coords_of(size, index).to_nd_index()] = true;
        }

        MineLayout::from_square_mask(mine_mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_requested_mines() {
        let config = GameConfig::new(4, 0.125).unwrap();
        let layout = FixedPlacer::new(&[5, 10]).place(&config, 0);

        assert_eq!(layout, MineLayout::from_mine_indices(4, &[5, 10]).unwrap());
    }

    #[test]
    fn drops_safe_and_off_board_mines() {
        let config = GameConfig::new(4, 0.125).unwrap();
        let layout = FixedPlacer::new(&[5, 10, 16]).place(&config, 5);

        assert_eq!(layout.mine_count(), 1);
        assert!(layout.contains_mine(10));
        assert!(!layout.contains_mine(5));
    }
}
