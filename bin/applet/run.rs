use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::chess::{Direction, Grid, Piece, Square};
use lib::reel::Sequence;
use lib::render::{Style, Terminal};
use std::{io::stdout, num::NonZeroUsize};
use tracing::{debug, info, instrument};

/// Plays a custom animation.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Run {
    /// How the board is drawn.
    #[clap(short, long, default_value_t)]
    style: Style,

    /// The piece to animate as a FEN letter, upper case for white.
    #[clap(short, long)]
    piece: Piece,

    /// The starting square, e.g. `a1` for the top left corner.
    #[clap(short = 'a', long = "at")]
    start: Square,

    /// How many times to repeat the directions.
    #[clap(short = 'n', long, default_value = "1")]
    repeat: NonZeroUsize,

    /// The directions to relocate the piece in, one step each.
    #[clap(required = true)]
    directions: Vec<Direction>,
}

impl Run {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let sequence =
            Sequence::new(self.piece, self.start).pattern(&self.directions, self.repeat.get());

        debug!(style = %self.style);
        info!(%sequence, steps = sequence.len());

        let mut grid = Grid::new();
        let mut terminal = Terminal::new(stdout().lock(), self.style);
        let square = sequence
            .play(&mut grid, &mut terminal)
            .with_context(|| format!("failed to play {sequence}"))?;

        info!(%square, "finished");

        Ok(())
    }
}
