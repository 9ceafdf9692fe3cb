use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::Grid;
use lib::reel::Showcase;
use lib::render::{Style, Terminal};
use std::io::stdout;
use tracing::{info, instrument, warn};

/// Plays the built-in animations.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Demo {
    /// How the board is drawn.
    #[clap(short, long, default_value_t)]
    style: Style,

    /// Which animations to play, all of them if none given.
    showcases: Vec<Showcase>,
}

impl Demo {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let showcases = match self.showcases {
            s if s.is_empty() => Showcase::ALL.to_vec(),
            s => s,
        };

        let mut grid = Grid::new();
        let mut terminal = Terminal::new(stdout().lock(), self.style);

        for showcase in showcases {
            let sequence = showcase.sequence();
            info!(%showcase, %sequence, steps = sequence.len());

            match sequence.play(&mut grid, &mut terminal) {
                Ok(square) => info!(%showcase, %square, "finished"),
                Err(e) => warn!(%showcase, "{}", e),
            }
        }

        Ok(())
    }
}
