use derive_more::{Display, Error};
use std::{ops::Not, str::FromStr};

/// One of the two competing sides.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Side {
    #[display(fmt = "black")]
    Black,
    #[display(fmt = "white")]
    White,
}

impl Not for Side {
    type Output = Self;

    /// The opponent.
    fn not(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

/// The reason why parsing [`Side`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected either `black` or `white`")]
pub struct ParseSideError;

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" | "x" => Ok(Side::Black),
            "white" | "o" => Ok(Side::White),
            _ => Err(ParseSideError),
        }
    }
}
