/// Chess domain types and the relocation primitive.
pub mod chess;
/// Scripted move sequences.
pub mod reel;
/// Drawing grids on the terminal.
pub mod render;
