use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use sweeper_core::{
    Board, Coord, DEFAULT_DENSITY, DEFAULT_SIZE, GameConfig, MinePlacer, RevealOutcome,
};

use crate::command::{Command, HELP};
use crate::render::render;

mod command;
mod render;

/// Minesweeper in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Board side, the board has size x size cells
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: Coord,

    /// Fraction of cells holding a mine
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    density: f64,

    /// Seed for mine placement, drawn at random when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("Starting {}x{} game, seed {}", cli.size, cli.size, seed);
    let mut board = Board::new_game(cli.size, cli.density, seed)?;

    let stdin = io::stdin();
    run(&mut board, stdin.lock(), io::stdout().lock())
}

/// Reads commands until `q` or end of input, redrawing the board after each one.
fn run<P: MinePlacer>(
    board: &mut Board<P>,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    write!(output, "{}", render(&board.snapshot()))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{err:#}")?;
                continue;
            }
        };
        log::debug!("command: {:?}", command);

        let result = match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            Command::Restart => {
                board.restart();
                Ok(RevealOutcome::NoChange)
            }
            Command::NewGame { size, density } => GameConfig::new(size, density)
                .and_then(|config| board.reconfigure(config))
                .map(|()| RevealOutcome::NoChange),
            Command::Activate(index) => board.activate(index),
            Command::ActivateAt(coords) => board
                .index_of(coords)
                .and_then(|index| board.activate(index)),
        };

        match result {
            Ok(outcome) => {
                log::trace!("outcome: {:?}", outcome);
                write!(output, "{}", render(&board.snapshot()))?;
            }
            Err(err) => writeln!(output, "{err}")?,
        }
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeper_core::{FixedPlacer, Phase};

    fn play(board: &mut Board<FixedPlacer>, input: &str) -> String {
        let mut output = Vec::new();
        run(board, input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn board(mines: &[usize]) -> Board<FixedPlacer> {
        Board::with_placer(GameConfig::new(3, 0.1).unwrap(), FixedPlacer::new(mines)).unwrap()
    }

    #[test]
    fn plays_until_win() {
        let mut board = board(&[8]);

        let output = play(&mut board, "0 0\n");

        assert!(output.ends_with(". . .\n. 1 1\n. 1 *\nYou won!\n"));
        assert_eq!(board.phase(), Phase::Won);
    }

    #[test]
    fn restart_and_quit_stop_processing() {
        let mut board = board(&[4]);

        let output = play(&mut board, "0\nr\nq\n8\n");

        assert!(output.ends_with("# # #\n# # #\n# # #\nPick a cell to start\n"));
        assert_eq!(board.phase(), Phase::NotStarted);
    }

    #[test]
    fn reports_errors_and_keeps_going() {
        let mut board = board(&[4]);

        let output = play(&mut board, "9\n3 0\nbogus\nn 0 0.5\n0\n");

        assert!(output.contains("Cell index 9 out of range, board has 9 cells"));
        assert!(output.contains("Cell (3, 0) out of range, board is 3x3"));
        assert!(output.contains("Unknown command \"bogus\", try h"));
        assert!(output.contains("Invalid configuration: Board size must be at least 1"));
        assert!(output.ends_with("1 of 8 safe cells revealed\n"));
        assert_eq!(board.size(), 3);
    }

    #[test]
    fn reports_column_past_the_edge() {
        let mut board = board(&[4]);

        let output = play(&mut board, "1 5\n");

        assert!(output.ends_with("Cell (1, 5) out of range, board is 3x3\n"));
        assert_eq!(board.phase(), Phase::NotStarted);
    }

    #[test]
    fn new_game_resizes() {
        let mut board = board(&[4]);

        let output = play(&mut board, "n 2 0.3\n");

        assert!(output.ends_with("# #\n# #\nPick a cell to start\n"));
        assert_eq!(board.total_cells(), 4);
    }
}
