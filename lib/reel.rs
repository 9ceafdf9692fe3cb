mod sequence;
mod showcase;

pub use sequence::*;
pub use showcase::*;
