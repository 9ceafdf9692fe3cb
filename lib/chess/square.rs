use crate::chess::Direction;
use derive_more::{Display, Error};
use std::{fmt, str::FromStr};

/// The number of rows and columns on the board.
pub const SIDE: u8 = 8;

/// The reason why a coordinate pair does not address a [`Square`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "({}, {}) lies outside of the {}x{} grid", row, col, SIDE, SIDE)]
pub struct OutOfBounds {
    pub row: i16,
    pub col: i16,
}

/// A square on the grid, addressed by `(row, col)`.
///
/// Row 0 is the top row and column 0 is the leftmost column.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Square {
    #[cfg_attr(test, strategy(0..SIDE))]
    row: u8,
    #[cfg_attr(test, strategy(0..SIDE))]
    col: u8,
}

impl Square {
    /// Constructs [`Square`] from a pair of row and column.
    pub fn new(row: u8, col: u8) -> Result<Self, OutOfBounds> {
        Self::offset(row.into(), col.into())
    }

    /// Constructs [`Square`] from coordinates known to lie on the grid.
    #[inline(always)]
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        debug_assert!(row < SIDE && col < SIDE);
        Square { row, col }
    }

    fn offset(row: i16, col: i16) -> Result<Self, OutOfBounds> {
        match (u8::try_from(row), u8::try_from(col)) {
            (Ok(r), Ok(c)) if r < SIDE && c < SIDE => Ok(Square { row: r, col: c }),
            _ => Err(OutOfBounds { row, col }),
        }
    }

    /// This square's row.
    #[inline(always)]
    pub fn row(&self) -> u8 {
        self.row
    }

    /// This square's column.
    #[inline(always)]
    pub fn col(&self) -> u8 {
        self.col
    }

    /// The adjacent square in the given [`Direction`].
    ///
    /// Fails rather than wrapping around if that would leave the grid.
    pub fn step(self, d: Direction) -> Result<Self, OutOfBounds> {
        let (dr, dc) = d.offset();
        Self::offset(i16::from(self.row) + dr, i16::from(self.col) + dc)
    }

    /// Whether this square is drawn in the dark tint.
    #[inline(always)]
    pub fn is_dark(&self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// An iterator over all squares in row-major order.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..SIDE * SIDE).map(|i| Square {
            row: i / SIDE,
            col: i % SIDE,
        })
    }
}

/// The letter labelling a column.
#[inline(always)]
pub fn column_label(col: u8) -> char {
    char::from(b'a' + col)
}

/// Prints the column letter followed by the 1-based row number, as labelled on screen.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_label(self.col), self.row + 1)
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse square, expected a letter in `a..=h` followed by a digit in `1..=8`")]
pub struct ParseSquareError;

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let &[c @ b'a'..=b'h', r @ b'1'..=b'8'] = s.as_bytes() else {
            return Err(ParseSquareError);
        };

        Ok(Square {
            row: r - b'1',
            col: c - b'a',
        })
    }
}
