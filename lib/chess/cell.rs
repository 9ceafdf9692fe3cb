use crate::chess::{Color, Piece, Role};
use derive_more::From;
use std::mem;

/// The occupancy of a single grid position.
///
/// A cell either holds a [`Piece`], which carries both a [`Role`] and a [`Color`], or it holds
/// neither, so an empty cell can never claim a color and vice versa.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, From)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Cell(Option<Piece>);

impl Cell {
    /// The unoccupied cell.
    pub const EMPTY: Self = Cell(None);

    /// A cell holding `piece`.
    #[inline(always)]
    pub const fn occupied(piece: Piece) -> Self {
        Cell(Some(piece))
    }

    /// The [`Piece`] on this cell, if any.
    #[inline(always)]
    pub fn piece(&self) -> Option<Piece> {
        self.0
    }

    /// The [`Role`] of the piece on this cell, if any.
    #[inline(always)]
    pub fn role(&self) -> Option<Role> {
        self.0.map(|p| p.role())
    }

    /// The [`Color`] of the piece on this cell, if any.
    #[inline(always)]
    pub fn color(&self) -> Option<Color> {
        self.0.map(|p| p.color())
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// The symbol drawn for this cell, a blank if unoccupied.
    pub fn glyph(&self) -> &'static str {
        self.0.map_or(" ", |p| p.glyph())
    }

    /// Moves the contents out, leaving this cell empty.
    #[inline(always)]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }
}

impl From<Piece> for Cell {
    #[inline(always)]
    fn from(p: Piece) -> Self {
        Cell::occupied(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn default_cell_is_empty() {
        assert_eq!(Cell::default(), Cell::EMPTY);
        assert!(Cell::EMPTY.is_empty());
        assert_eq!(Cell::EMPTY.glyph(), " ");
    }

    #[proptest]
    fn cell_has_a_role_if_and_only_if_it_has_a_color(c: Cell) {
        assert_eq!(c.role().is_none(), c.color().is_none());
        assert_eq!(c.role().is_none(), c.is_empty());
    }

    #[proptest]
    fn occupied_cell_reports_its_piece(p: Piece) {
        let c = Cell::from(p);
        assert_eq!(c.piece(), Some(p));
        assert_eq!(c.role(), Some(p.role()));
        assert_eq!(c.color(), Some(p.color()));
        assert_eq!(c.glyph(), p.glyph());
    }

    #[proptest]
    fn take_leaves_cell_empty(mut c: Cell) {
        let before = c;
        assert_eq!(c.take(), before);
        assert_eq!(c, Cell::EMPTY);
    }
}
