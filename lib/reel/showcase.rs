use crate::chess::{Color, Direction::*, Piece, Role, Square};
use crate::reel::Sequence;
use derive_more::{Display, Error};
use std::str::FromStr;

/// The built-in animations, one per piece.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Showcase {
    /// A rook sliding right along the top row.
    #[display(fmt = "rook")]
    Rook,
    /// A bishop climbing the diagonal from the bottom left corner.
    #[display(fmt = "bishop")]
    Bishop,
    /// A queen sliding left across the whole top row.
    #[display(fmt = "queen")]
    Queen,
    /// A knight tracing L shapes towards the top left.
    #[display(fmt = "knight")]
    Knight,
}

impl Showcase {
    /// Every showcase, in the order they are played by default.
    pub const ALL: [Self; 4] = [
        Showcase::Rook,
        Showcase::Bishop,
        Showcase::Queen,
        Showcase::Knight,
    ];

    /// The scripted [`Sequence`].
    pub fn sequence(&self) -> Sequence {
        let (role, row, col) = match self {
            Showcase::Rook => (Role::Rook, 0, 0),
            Showcase::Bishop => (Role::Bishop, 7, 0),
            Showcase::Queen => (Role::Queen, 0, 7),
            Showcase::Knight => (Role::Knight, 7, 4),
        };

        let s = Sequence::new(Piece::new(role, Color::Black), Square::at(row, col));

        match self {
            Showcase::Rook => s.pattern(&[Right], 5),
            Showcase::Bishop => s.pattern(&[Up, Right], 5),
            Showcase::Queen => s.pattern(&[Left], 7),
            Showcase::Knight => s.pattern(&[Up, Up, Left], 3),
        }
    }
}

/// The reason why parsing [`Showcase`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse showcase, expected one of `rook`, `bishop`, `queen`, `knight`")]
pub struct ParseShowcaseError;

impl FromStr for Showcase {
    type Err = ParseShowcaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Showcase::ALL
            .into_iter()
            .find(|sc| sc.to_string() == s)
            .ok_or(ParseShowcaseError)
    }
}
