use crate::chess::{column_label, Cell, Handle, OutOfBounds, Piece, Square, SIDE};
use std::{fmt, ops::Index};

/// The 8x8 grid of [`Cell`]s.
///
/// This type does not validate whether the placement it holds is valid
/// according to any set of chess rules.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Grid {
    cells: [[Cell; SIDE as usize]; SIDE as usize],
}

// We provide a custom implementation of Arbitrary rather than deriving,
// otherwise proptest overflows the stack generating large arrays.
#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Grid {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Grid>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::{collection::vec, prelude::*};

        vec(any::<Cell>(), Square::iter().len())
            .prop_map(|v| {
                let mut grid = Grid::new();
                grid.cells.iter_mut().flatten().zip(v).for_each(|(c, v)| *c = v);
                grid
            })
            .boxed()
    }
}

impl Grid {
    /// An empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets every cell to [`Cell::EMPTY`].
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Puts `piece` on the cell at `(row, col)`, replacing whatever was there.
    ///
    /// Returns a [`Handle`] to the placed piece.
    pub fn place(&mut self, row: u8, col: u8, piece: Piece) -> Result<Handle, OutOfBounds> {
        let sq = Square::new(row, col)?;
        *self.cell_mut(sq) = piece.into();
        Ok(Handle::new(sq))
    }

    /// The cell at `(row, col)`.
    pub fn get(&self, row: u8, col: u8) -> Result<&Cell, OutOfBounds> {
        Ok(&self[Square::new(row, col)?])
    }

    /// An iterator over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Cell)> + '_ {
        Square::iter().map(|sq| (sq, self[sq]))
    }

    /// How many cells are occupied.
    pub fn occupied(&self) -> usize {
        self.iter().filter(|(_, c)| !c.is_empty()).count()
    }

    #[inline(always)]
    pub(crate) fn cell_mut(&mut self, sq: Square) -> &mut Cell {
        &mut self.cells[sq.row() as usize][sq.col() as usize]
    }
}

impl Index<Square> for Grid {
    type Output = Cell;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.cells[sq.row() as usize][sq.col() as usize]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "   +---+---+---+---+---+---+---+---+")?;
        for (row, cells) in (1..).zip(&self.cells) {
            write!(f, " {} |", row)?;

            for cell in cells {
                write!(f, " {} |", cell.glyph())?;
            }

            writeln!(f)?;
            writeln!(f, "   +---+---+---+---+---+---+---+---+")?;
        }

        write!(f, "   ")?;
        for col in 0..SIDE {
            write!(f, "  {} ", column_label(col))?;
        }

        Ok(())
    }
}
