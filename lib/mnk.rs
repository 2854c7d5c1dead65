mod board;
mod r#move;
mod square;

pub use board::*;
pub use r#move::*;
pub use square::*;
