use super::Eval;
use crate::game::{Grid, Side};
use derive_more::Constructor;

/// Evaluates positions purely based on the number of stones each side has on the board.
#[derive(Debug, Default, Copy, Clone, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Materialist {}

impl Materialist {
    fn count<G: Grid>(pos: &G, side: Side) -> usize {
        let size = pos.size();
        (0..size)
            .flat_map(|x| (0..size).map(move |y| (x, y)))
            .filter(|&(x, y)| pos.cell(x, y) == Some(side))
            .count()
    }
}

impl<G: Grid> Eval<G> for Materialist {
    fn eval(&self, pos: &G, side: Side) -> f64 {
        Self::count(pos, side) as f64 - Self::count(pos, !side) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mnk::Board;
    use test_strategy::proptest;

    #[proptest]
    fn score_is_stable(pos: Board, s: Side) {
        assert_eq!(Materialist::new().eval(&pos, s), Materialist::new().eval(&pos, s));
    }

    #[proptest]
    fn score_is_zero_sum(pos: Board, s: Side) {
        assert_eq!(Materialist::new().eval(&pos, s), -Materialist::new().eval(&pos, !s));
    }

    #[proptest]
    fn empty_board_is_balanced(#[strategy(1usize..=8)] size: usize, s: Side) {
        assert_eq!(Materialist::new().eval(&Board::new(size, size), s), 0.);
    }

    #[proptest]
    fn score_is_the_difference_in_stones() {
        let pos: Board = "xx./o.x/... 3".parse()?;
        assert_eq!(Materialist::new().eval(&pos, Side::Black), 2.);
        assert_eq!(Materialist::new().eval(&pos, Side::White), -2.);
    }
}
