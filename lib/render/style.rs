use crossterm::style::Color;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{str::FromStr, time::Duration};

#[cfg(test)]
use proptest::prelude::*;

/// A background tint for the squares of the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Tint {
    Black,
    DarkGrey,
    Grey,
    White,
    DarkRed,
    Red,
    DarkGreen,
    Green,
    DarkYellow,
    Yellow,
    DarkBlue,
    Blue,
    DarkMagenta,
    Magenta,
    DarkCyan,
    Cyan,
}

impl From<Tint> for Color {
    fn from(t: Tint) -> Self {
        match t {
            Tint::Black => Color::Black,
            Tint::DarkGrey => Color::DarkGrey,
            Tint::Grey => Color::Grey,
            Tint::White => Color::White,
            Tint::DarkRed => Color::DarkRed,
            Tint::Red => Color::Red,
            Tint::DarkGreen => Color::DarkGreen,
            Tint::Green => Color::Green,
            Tint::DarkYellow => Color::DarkYellow,
            Tint::Yellow => Color::Yellow,
            Tint::DarkBlue => Color::DarkBlue,
            Tint::Blue => Color::Blue,
            Tint::DarkMagenta => Color::DarkMagenta,
            Tint::Magenta => Color::Magenta,
            Tint::DarkCyan => Color::DarkCyan,
            Tint::Cyan => Color::Cyan,
        }
    }
}

/// Configuration for drawing the board on the terminal.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
#[serde(deny_unknown_fields, default)]
pub struct Style {
    /// The tint of light squares.
    pub light: Tint,

    /// The tint of dark squares.
    pub dark: Tint,

    /// How long each frame stays on screen.
    #[cfg_attr(test, strategy((0..10_000u64).prop_map(Duration::from_millis)))]
    #[serde(with = "humantime_serde")]
    pub pause: Duration,

    /// Whether to clear the screen before drawing each frame.
    pub clear: bool,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            light: Tint::Grey,
            dark: Tint::Black,
            pause: Duration::from_secs(2),
            clear: true,
        }
    }
}

impl Style {
    /// The tint of a square, given whether it is dark.
    #[inline(always)]
    pub fn tint(&self, dark: bool) -> Tint {
        if dark {
            self.dark
        } else {
            self.light
        }
    }
}

/// The reason why parsing [`Style`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse style configuration")]
pub struct ParseStyleError(ron::de::SpannedError);

impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
