use derive_more::{Deref, Display, From, Neg};

/// The value of a position from the searching side's perspective.
///
/// Forced wins and losses are represented by infinities, so that they dominate
/// every static evaluation.
#[derive(Debug, Display, Default, Copy, Clone, PartialEq, PartialOrd, Deref, From, Neg)]
pub struct Score(f64);

impl Score {
    /// A forced win.
    pub const WIN: Self = Score(f64::INFINITY);

    /// A forced loss.
    pub const LOSS: Self = Score(f64::NEG_INFINITY);

    /// A draw.
    pub const DRAW: Self = Score(0.);
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn win_dominates_every_finite_score(#[filter(#s.is_finite())] s: f64) {
        assert!(Score::LOSS < Score(s));
        assert!(Score(s) < Score::WIN);
    }

    #[proptest]
    fn negated_win_is_a_loss() {
        assert_eq!(-Score::WIN, Score::LOSS);
    }
}
