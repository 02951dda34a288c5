use anyhow::{Context, Result, bail};
use sweeper_core::{CellIndex, Coord, Coord2};

pub(crate) const HELP: &str = "\
Commands:
  <index>              activate cell number <index> (row * size + col)
  <row> <col>          activate the cell at <row>, <col>
  r                    restart with the same size and density
  n <size> <density>   new game with another board
  h                    show this help
  q                    quit";

/// One line typed by the player.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Command {
    Activate(CellIndex),
    ActivateAt(Coord2),
    Restart,
    NewGame { size: Coord, density: f64 },
    Help,
    Quit,
}

impl Command {
    pub(crate) fn parse(line: &str) -> Result<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();

        Ok(match words.as_slice() {
            ["r" | "restart"] => Self::Restart,
            ["h" | "help" | "?"] => Self::Help,
            ["q" | "quit" | "exit"] => Self::Quit,
            ["n" | "new", size, density] => Self::NewGame {
                size: size.parse().with_context(|| format!("Invalid size {size:?}"))?,
                density: density
                    .parse()
                    .with_context(|| format!("Invalid density {density:?}"))?,
            },
            [index] => Self::Activate(
                index
                    .parse()
                    .with_context(|| format!("Unknown command {index:?}, try h"))?,
            ),
            [row, col] => Self::ActivateAt((
                row.parse().with_context(|| format!("Invalid row {row:?}"))?,
                col.parse().with_context(|| format!("Invalid column {col:?}"))?,
            )),
            _ => bail!("Unknown command {line:?}, try h"),
        })
    }
}
