use super::{Applied, Outcome, Side};
use std::fmt::Debug;

/// Trait for the rules of a two-player game played on a mutable position.
///
/// Implementors own the position and mutate it in place; every [`Rules::play`]
/// must be perfectly reversed by [`Rules::undo`] with the same move, in strict
/// LIFO order.
pub trait Rules {
    /// A transition from one position to another for a specific side.
    type Move: Clone + Eq + Debug;

    /// The legal moves for `side`, in a stable order.
    fn moves(&self, side: Side) -> Vec<Self::Move>;

    /// Plays a move.
    fn play(&mut self, m: &Self::Move);

    /// Takes back a move previously played.
    fn undo(&mut self, m: &Self::Move);

    /// The [`Outcome`] of the game, as seen by `side`, if decided.
    fn winner(&self, side: Side) -> Option<Outcome>;

    /// The move by which `side` forfeits its ply.
    fn pass(side: Side) -> Self::Move;

    /// Plays a move for the lifetime of the returned guard.
    ///
    /// The move is taken back when the guard is dropped.
    fn apply<'a>(&'a mut self, m: &'a Self::Move) -> Applied<'a, Self>
    where
        Self: Sized,
    {
        Applied::new(self, m)
    }
}

/// Trait for positions laid out on a square grid of cells.
pub trait Grid {
    /// The number of cells along each side of the grid.
    fn size(&self) -> usize;

    /// The side occupying the cell at column `x` and row `y`, if any.
    fn cell(&self, x: usize, y: usize) -> Option<Side>;
}
