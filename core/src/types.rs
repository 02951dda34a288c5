use ndarray::Array2;

/// Single coordinate axis used for the board side, rows and columns.
pub type Coord = usize;

/// Linear cell position, `row * size + col`.
pub type CellIndex = usize;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = usize;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0, self.1]
    }
}

/// Splits a linear index into `(row, col)` on a board with `size` columns.
pub const fn coords_of(size: Coord, index: CellIndex) -> Coord2 {
    (index / size, index % size)
}

/// Joins `(row, col)` into a linear index on a board with `size` columns.
pub const fn index_of(size: Coord, (row, col): Coord2) -> CellIndex {
    row * size + col
}

/// Whether cells `n` and `v` touch on a `size`×`size` board.
///
/// Rows do not wrap: the last column of one row is never adjacent to the first column of the next, even though their
/// linear indices differ by one. A cell is not adjacent to itself, and indices off the board are adjacent to nothing.
pub fn is_adjacent(size: Coord, n: CellIndex, v: CellIndex) -> bool {
    let Some(total_cells) = size.checked_mul(size) else {
        return false;
    };
    if n >= total_cells || v >= total_cells || n == v {
        return false;
    }

    let (n_row, n_col) = coords_of(size, n);
    let (v_row, v_col) = coords_of(size, v);
    n_row.abs_diff(v_row) <= 1 && n_col.abs_diff(v_col) <= 1
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: CellIndex) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: CellIndex) -> NeighborIter {
        let (rows, cols) = self.dim();
        if cols == 0 {
            return NeighborIter::new((0, 0), (0, 0));
        }
        NeighborIter::new(coords_of(cols, index), (rows, cols))
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Walks the up-to-8 in-bounds neighbours of a cell, yielding linear indices in reading order.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = CellIndex;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if let Some(coords) = next_item {
                return Some(index_of(self.bounds.1, coords));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn neighbors(size: Coord, index: CellIndex) -> Vec<CellIndex> {
        let grid: Array2<()> = Array2::default((size, size));
        grid.iter_neighbors(index).collect()
    }

    #[test]
    fn row_edges_do_not_wrap() {
        // 9x9: index 8 ends row 0, index 9 starts row 1
        assert!(!is_adjacent(9, 8, 9));
        assert!(!is_adjacent(9, 9, 8));
        assert!(!is_adjacent(9, 0, 8));
        assert!(!is_adjacent(9, 9, 17));
        assert!(!is_adjacent(9, 17, 18));
        assert!(is_adjacent(9, 8, 17));
        assert!(is_adjacent(9, 8, 16));
        assert!(is_adjacent(9, 0, 10));
    }

    #[test]
    fn self_and_off_board_cells_are_not_adjacent() {
        assert!(!is_adjacent(9, 40, 40));
        assert!(!is_adjacent(9, 80, 81));
        assert!(!is_adjacent(9, 81, 80));
        assert!(!is_adjacent(0, 0, 1));
    }

    #[test]
    fn neighbor_iter_matches_adjacency_everywhere() {
        let size = 5;
        for n in 0..size * size {
            let expected: Vec<_> = (0..size * size)
                .filter(|&v| is_adjacent(size, n, v))
                .collect();
            assert_eq!(neighbors(size, n), expected, "cell {n}");
        }
    }

    #[test]
    fn corner_edge_and_interior_neighbor_counts() {
        assert_eq!(neighbors(4, 0), [1, 4, 5]);
        assert_eq!(neighbors(4, 7), [2, 3, 6, 10, 11]);
        assert_eq!(neighbors(4, 5).len(), 8);
        assert!(neighbors(1, 0).is_empty());
    }

    #[test]
    fn empty_grid_has_no_neighbors() {
        assert!(neighbors(0, 0).is_empty());
        assert!(neighbors(0, 5).is_empty());
    }

    #[test]
    fn coords_round_trip_through_linear_index() {
        assert_eq!(coords_of(9, 17), (1, 8));
        assert_eq!(index_of(9, (1, 8)), 17);
        assert_eq!(coords_of(4, 10), (2, 2));
    }
}
