use crate::chess::{Color, ParseRoleError, Role};
use std::fmt;
use std::str::FromStr;

/// A chess [piece][`Role`] of a certain [`Color`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece {
    role: Role,
    color: Color,
}

impl Piece {
    /// Constructs [`Piece`] from a pair of [`Role`] and [`Color`].
    #[inline(always)]
    pub const fn new(role: Role, color: Color) -> Self {
        Piece { role, color }
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// This piece's [`Color`].
    #[inline(always)]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// The Unicode chess symbol for this piece.
    pub const fn glyph(&self) -> &'static str {
        use {Color::*, Role::*};
        match (self.role, self.color) {
            (Pawn, White) => "♙",
            (Rook, White) => "♖",
            (Bishop, White) => "♗",
            (Knight, White) => "♘",
            (Queen, White) => "♕",
            (King, White) => "♔",
            (Pawn, Black) => "♟",
            (Rook, Black) => "♜",
            (Bishop, Black) => "♝",
            (Knight, Black) => "♞",
            (Queen, Black) => "♛",
            (King, Black) => "♚",
        }
    }
}

/// Prints the FEN letter, upper case for white and lower case for black.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Color::White => f.write_str(&self.role.to_string().to_ascii_uppercase()),
            Color::Black => write!(f, "{}", self.role),
        }
    }
}

/// The reason why parsing [`Piece`] failed.
pub type ParsePieceError = ParseRoleError;

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let role = s.to_ascii_lowercase().parse()?;
        if s.chars().all(|c| c.is_ascii_uppercase()) {
            Ok(Piece::new(role, Color::White))
        } else {
            Ok(Piece::new(role, Color::Black))
        }
    }
}
