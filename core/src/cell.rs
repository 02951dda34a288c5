use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell.
///
/// Hidden cells never say whether they hold a mine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Clear(u8),
    Mine,
}

impl CellView {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Full record kept by the board for every cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) mine: bool,
    /// Zero for mines.
    pub(crate) adjacent_mines: u8,
    pub(crate) revealed: bool,
}

impl Cell {
    pub(crate) const fn view(self) -> CellView {
        match (self.revealed, self.mine) {
            (false, _) => CellView::Hidden,
            (true, true) => CellView::Mine,
            (true, false) => CellView::Clear(self.adjacent_mines),
        }
    }
}
