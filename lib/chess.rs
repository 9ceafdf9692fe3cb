mod cell;
mod color;
mod direction;
mod grid;
mod piece;
mod relocate;
mod role;
mod square;

pub use cell::*;
pub use color::*;
pub use direction::*;
pub use grid::*;
pub use piece::*;
pub use relocate::*;
pub use role::*;
pub use square::*;
