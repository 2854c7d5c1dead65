use super::Side;
use derive_more::Display;

/// One of the possible outcomes of a game.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Outcome {
    #[display(fmt = "{_0} wins")]
    Win(Side),

    #[display(fmt = "draw")]
    Draw,
}

impl Outcome {
    /// Whether neither side has won.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// The winning side, if any.
    pub fn winner(&self) -> Option<Side> {
        match *self {
            Outcome::Win(s) => Some(s),
            Outcome::Draw => None,
        }
    }
}
