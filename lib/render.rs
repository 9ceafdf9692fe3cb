use crate::chess::Grid;
use std::io;

mod style;
mod terminal;

pub use style::*;
pub use terminal::*;

/// Trait for types that can draw a [`Grid`].
#[cfg_attr(test, mockall::automock)]
pub trait Render {
    /// Draws one frame showing `grid`.
    fn render(&mut self, grid: &Grid) -> io::Result<()>;
}
