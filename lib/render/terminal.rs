use crate::chess::{column_label, Grid, Square, SIDE};
use crate::render::{Render, Style};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor};
use crossterm::{cursor::MoveTo, queue, terminal::Clear, terminal::ClearType};
use std::{io::Write, thread::sleep};
use tracing::instrument;

/// How many lines of text make up one row of the board.
const HEIGHT: usize = 3;

/// Draws the board as checkerboard blocks of ANSI colors.
#[derive(Debug)]
pub struct Terminal<W: Write> {
    writer: W,
    style: Style,
}

impl<W: Write> Terminal<W> {
    /// Draws onto `writer` using the given [`Style`].
    pub fn new(writer: W, style: Style) -> Self {
        Terminal { writer, style }
    }

    /// Consumes the renderer and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Render for Terminal<W> {
    #[instrument(level = "trace", skip(self, grid), err)]
    fn render(&mut self, grid: &Grid) -> std::io::Result<()> {
        let w = &mut self.writer;

        if self.style.clear {
            queue!(w, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        for row in 0..SIDE {
            for line in 0..HEIGHT {
                let middle = line == HEIGHT / 2;

                if middle {
                    write!(w, " {} ", row + 1)?;
                } else {
                    write!(w, "   ")?;
                }

                for sq in Square::iter().filter(|sq| sq.row() == row) {
                    let tint = Color::from(self.style.tint(sq.is_dark()));
                    let glyph = if middle { grid[sq].glyph() } else { " " };
                    queue!(
                        w,
                        SetBackgroundColor(tint),
                        Print(format!("   {glyph}   ")),
                        ResetColor
                    )?;
                }

                writeln!(w)?;
            }
        }

        write!(w, "   ")?;
        for col in 0..SIDE {
            write!(w, "   {}   ", column_label(col))?;
        }

        writeln!(w)?;
        w.flush()?;

        if !self.style.pause.is_zero() {
            sleep(self.style.pause);
        }

        Ok(())
    }
}
