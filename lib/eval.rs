use crate::game::Side;

mod materialist;

pub use materialist::*;

/// Trait for types that can evaluate a position.
#[cfg_attr(test, mockall::automock)]
pub trait Eval<R> {
    /// Evaluates a position.
    ///
    /// Positive values favor `side`.
    fn eval(&self, pos: &R, side: Side) -> f64;
}
