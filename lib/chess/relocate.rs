use crate::chess::{Direction, Grid, OutOfBounds, Square};
use derive_more::{Display, Error, From};
use tracing::instrument;

/// Tracks the square of the piece under control.
///
/// A handle is handed out by [`Grid::place`] and kept in sync by [`Relocator::relocate`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}", _0)]
pub struct Handle(Square);

impl Handle {
    /// A handle to the piece at `sq`.
    #[inline(always)]
    pub fn new(sq: Square) -> Self {
        Handle(sq)
    }

    /// The square currently holding the tracked piece.
    #[inline(always)]
    pub fn square(&self) -> Square {
        self.0
    }

    /// Shorthand for [`Relocator::relocate`].
    #[inline(always)]
    pub fn relocate(&mut self, grid: &mut Grid, d: Direction) -> Result<Square, RelocateError> {
        Relocator::relocate(grid, self, d)
    }
}

/// The reason why a relocation was rejected.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error, From)]
pub enum RelocateError {
    #[display(fmt = "cannot relocate, {}", _0)]
    OutOfBounds(OutOfBounds),
    #[display(fmt = "there is no piece on {} to relocate", _0)]
    #[from(ignore)]
    EmptySource(#[error(not(source))] Square),
}

/// Moves pieces one cell at a time.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Relocator;

impl Relocator {
    /// Moves the piece tracked by `handle` one cell in direction `d`.
    ///
    /// On success the source cell is left empty, the target cell holds the piece and `handle`
    /// points to the target, which is also returned. A piece already on the target is
    /// overwritten, no capture is recorded.
    ///
    /// On failure neither `grid` nor `handle` are modified.
    #[instrument(level = "trace", skip(grid), ret)]
    pub fn relocate(
        grid: &mut Grid,
        handle: &mut Handle,
        d: Direction,
    ) -> Result<Square, RelocateError> {
        let from = handle.square();

        if grid[from].is_empty() {
            return Err(RelocateError::EmptySource(from));
        }

        let to = from.step(d)?;
        let cell = grid.cell_mut(from).take();
        *grid.cell_mut(to) = cell;
        handle.0 = to;

        Ok(to)
    }
}
