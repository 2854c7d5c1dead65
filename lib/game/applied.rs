use super::Rules;
use std::ops::{Deref, DerefMut};

/// A position with a move played on it.
///
/// The move is taken back on drop, so the position seen by whoever created
/// the guard is restored on every exit path.
#[derive(Debug)]
pub struct Applied<'a, R: Rules> {
    pos: &'a mut R,
    m: &'a R::Move,
}

impl<'a, R: Rules> Applied<'a, R> {
    /// Plays `m` on `pos`.
    pub fn new(pos: &'a mut R, m: &'a R::Move) -> Self {
        pos.play(m);
        Applied { pos, m }
    }

    /// The move played.
    pub fn played(&self) -> &R::Move {
        self.m
    }
}

impl<'a, R: Rules> Deref for Applied<'a, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.pos
    }
}

impl<'a, R: Rules> DerefMut for Applied<'a, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.pos
    }
}

impl<'a, R: Rules> Drop for Applied<'a, R> {
    fn drop(&mut self) {
        self.pos.undo(self.m);
    }
}
