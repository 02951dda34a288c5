use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Strategy that lays the mines of a game, called once on the first activation.
pub trait MinePlacer {
    /// Returns a `config.size`×`config.size` layout that has no mine at `safe`.
    fn place(&mut self, config: &GameConfig, safe: CellIndex) -> MineLayout;
}

impl<P: MinePlacer + ?Sized> MinePlacer for &mut P {
    fn place(&mut self, config: &GameConfig, safe: CellIndex) -> MineLayout {
        (**self).place(config, safe)
    }
}
