mod applied;
mod outcome;
mod rules;
mod side;

pub use applied::*;
pub use outcome::*;
pub use rules::*;
pub use side::*;
