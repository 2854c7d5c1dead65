use super::Board;
use derive_more::Display;

/// A cell on the [`Board`][`super::Board`].
///
/// Displayed as a column letter followed by a 1-based row number, e.g. `b3`.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}{}", "(b'a' + self.x as u8) as char", "self.y + 1")]
pub struct Square {
    #[cfg_attr(test, strategy(0usize..26))]
    x: usize,
    #[cfg_attr(test, strategy(0usize..26))]
    y: usize,
}

impl Square {
    /// Constructs [`Square`] at column `x` and row `y`.
    ///
    /// Panics unless `x` is less than [`Board::MAX_SIZE`], the number of column letters.
    pub fn new(x: usize, y: usize) -> Self {
        assert!(x < Board::MAX_SIZE, "column {x} ∉ [0, {})", Board::MAX_SIZE);
        Square { x, y }
    }

    /// The column.
    pub fn x(&self) -> usize {
        self.x
    }

    /// The row.
    pub fn y(&self) -> usize {
        self.y
    }
}
