use std::fmt::Write as _;

use sweeper_core::{BoardSnapshot, CellView, Phase, index_of};

fn symbol(cell: CellView, triggered: bool) -> char {
    match cell {
        CellView::Hidden => '#',
        CellView::Clear(0) => '.',
        CellView::Clear(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        CellView::Mine if triggered => 'X',
        CellView::Mine => '*',
    }
}

pub(crate) fn status(snapshot: &BoardSnapshot) -> String {
    match snapshot.phase {
        Phase::NotStarted => String::from("Pick a cell to start"),
        Phase::InProgress => {
            let safe_cells = snapshot.cells.len() - snapshot.mine_count;
            format!(
                "{} of {} safe cells revealed",
                snapshot.revealed_count, safe_cells
            )
        }
        Phase::Won => String::from("You won!"),
        Phase::Lost => String::from("You lost!"),
    }
}

/// Board as text, one row per line, followed by the status line.
pub(crate) fn render(snapshot: &BoardSnapshot) -> String {
    let mut out = String::new();

    for (row, cells) in snapshot.cells.rows().into_iter().enumerate() {
        let line: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, &cell)| {
                let index = index_of(snapshot.size, (row, col));
                symbol(cell, snapshot.triggered_mine == Some(index)).to_string()
            })
            .collect();
        let _ = writeln!(out, "{}", line.join(" "));
    }

    let _ = writeln!(out, "{}", status(snapshot));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeper_core::{Board, FixedPlacer, GameConfig};

    fn board(mines: &[usize]) -> Board<FixedPlacer> {
        Board::with_placer(GameConfig::new(3, 0.1).unwrap(), FixedPlacer::new(mines)).unwrap()
    }

    #[test]
    fn renders_fresh_board_hidden() {
        let board = board(&[4]);

        assert_eq!(
            render(&board.snapshot()),
            "# # #\n# # #\n# # #\nPick a cell to start\n"
        );
    }

    #[test]
    fn renders_counts_in_progress() {
        let mut board = board(&[4]);
        board.activate(0).unwrap();
        board.activate(8).unwrap();

        assert_eq!(
            render(&board.snapshot()),
            "1 # #\n# # #\n# # 1\n2 of 8 safe cells revealed\n"
        );
    }

    #[test]
    fn marks_triggered_mine_on_loss() {
        let mut board = board(&[4, 5]);
        board.activate(0).unwrap();
        board.activate(4).unwrap();

        assert_eq!(
            render(&board.snapshot()),
            "1 2 2\n1 X *\n1 2 2\nYou lost!\n"
        );
    }

    #[test]
    fn renders_zero_cells_as_dots_on_win() {
        let mut board = board(&[8]);
        board.activate(0).unwrap();

        assert_eq!(render(&board.snapshot()), ". . .\n. 1 1\n. 1 *\nYou won!\n");
    }
}
