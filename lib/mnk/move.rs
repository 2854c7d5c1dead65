use super::Square;
use crate::game::Side;
use derive_more::Display;

/// A move on the [`Board`][`super::Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Move {
    /// A stone of the given side placed on an empty [`Square`].
    #[display(fmt = "{_1}")]
    Place(Side, Square),

    /// The side forfeits its ply.
    #[display(fmt = "pass")]
    Pass(Side),
}

impl Move {
    /// The side that makes this move.
    pub fn side(&self) -> Side {
        match *self {
            Move::Place(s, _) | Move::Pass(s) => s,
        }
    }

    /// The square this move places a stone on, if any.
    pub fn square(&self) -> Option<Square> {
        match *self {
            Move::Place(_, sq) => Some(sq),
            Move::Pass(_) => None,
        }
    }
}
