use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::index::sample;

use super::*;

/// Purely random placement that only keeps the first activated cell safe.
///
/// The generator is seeded once; later games keep drawing from the same stream, so restarting never repeats the
/// previous layout.
#[derive(Clone, Debug)]
pub struct RandomPlacer {
    rng: SmallRng,
}

impl RandomPlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MinePlacer for RandomPlacer {
    fn place(&mut self, config: &GameConfig, safe: CellIndex) -> MineLayout {
        let size = config.size;
        let free_cells = config.total_cells().saturating_sub(1);
        let mines = config.mine_count();

        if mines > free_cells {
            log::warn!(
                "Minefield already full, requested {} but only fits {}",
                mines,
                free_cells
            );
        }

        let mut mine_mask: Array2<bool> = Array2::default((size, size));

        // sample among every cell but `safe`, then shift past it
        for rank in sample(&mut self.rng, free_cells, mines.min(free_cells)) {
            let index = if rank >= safe { rank + 1 } else { rank };
            mine_mask[coords_of(size, index).to_nd_index()] = true;
        }

        let layout = MineLayout::from_square_mask(mine_mask);
        log::debug!(
            "Placed {} mines on a {}x{} board, keeping cell {} safe",
            layout.mine_count(),
            size,
            size,
            safe
        );
        layout
    }
}
