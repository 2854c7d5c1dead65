use super::{defusing_move, winning_move, MetricsCounters, Options, Score};
use crate::eval::Eval;
use crate::game::{Outcome, Rules, Side};
use crate::util::Timer;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, instrument};

/// An implementation of [minimax] with [alpha-beta pruning] under a real-time deadline.
///
/// [minimax]: https://www.chessprogramming.org/Minimax
/// [alpha-beta pruning]: https://www.chessprogramming.org/Alpha-Beta
#[derive(Debug)]
pub struct Searcher<E> {
    side: Side,
    evaluator: E,
    options: Options,
    rng: StdRng,
}

impl<E> Searcher<E> {
    /// Constructs [`Searcher`] playing for `side` with the default [`Options`].
    pub fn new(side: Side, evaluator: E) -> Self {
        Self::with_options(side, evaluator, Options::default())
    }

    /// Constructs [`Searcher`] playing for `side` with the given [`Options`].
    pub fn with_options(side: Side, evaluator: E, options: Options) -> Self {
        Searcher {
            side,
            evaluator,
            options,
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeds the generator that breaks ties when no move stands out.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// The side this searcher plays for.
    pub fn side(&self) -> Side {
        self.side
    }

    /// The [`Options`] in use.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Evaluates the position statically.
    fn eval<R>(&self, pos: &R, counters: &mut MetricsCounters) -> Score
    where
        E: Eval<R>,
    {
        counters.eval();
        self.evaluator.eval(pos, self.side).into()
    }

    /// An implementation of the [alpha-beta pruning] algorithm.
    ///
    /// Positions are scored from the perspective of the side this searcher plays
    /// for, which is to move if `maximizing` is set and its opponent otherwise.
    /// Once the `timer` elapses every node is evaluated statically.
    ///
    /// [alpha-beta pruning]: https://www.chessprogramming.org/Alpha-Beta
    #[allow(clippy::too_many_arguments)]
    fn alphabeta<R: Rules>(
        &self,
        pos: &mut R,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
        timer: &Timer,
        counters: &mut MetricsCounters,
    ) -> Score
    where
        E: Eval<R>,
    {
        counters.node();

        if timer.is_elapsed() {
            counters.timeout();
            return self.eval(pos, counters);
        }

        let mover = if maximizing { self.side } else { !self.side };

        match pos.winner(mover) {
            Some(Outcome::Win(s)) if s == self.side => return Score::WIN,
            Some(Outcome::Win(_)) => return Score::LOSS,
            Some(Outcome::Draw) => return Score::DRAW,
            None if depth == 0 => return self.eval(pos, counters),
            None => {}
        }

        let moves = pos.moves(mover);
        if moves.is_empty() {
            // Nodes without moves are not scored as losses or draws.
            return self.eval(pos, counters);
        }

        if maximizing {
            let mut score = Score::LOSS;
            for m in &moves {
                let mut next = pos.apply(m);
                let s = self.alphabeta(&mut *next, depth - 1, alpha, beta, false, timer, counters);

                if s > score {
                    score = s;
                }

                if score > alpha {
                    alpha = score;
                }

                if alpha >= beta {
                    counters.cut();
                    break;
                }
            }

            score
        } else {
            let mut score = Score::WIN;
            for m in &moves {
                let mut next = pos.apply(m);
                let s = self.alphabeta(&mut *next, depth - 1, alpha, beta, true, timer, counters);

                if s < score {
                    score = s;
                }

                if score < beta {
                    beta = score;
                }

                if beta <= alpha {
                    counters.cut();
                    break;
                }
            }

            score
        }
    }

    /// Selects the strongest move within the time `budget`.
    ///
    /// Immediate wins, and replies to immediate threats, are played without
    /// searching. Otherwise every legal move is searched to the configured depth,
    /// or until the deadline, and the one with the highest score is chosen,
    /// favoring the earliest among equals. If none scores above a forced loss, a
    /// legal move is chosen at random.
    ///
    /// Returns [`Rules::pass`] if there are no legal moves.
    #[instrument(level = "debug", skip(self, pos), fields(side = %self.side))]
    pub fn select<R: Rules>(&mut self, pos: &mut R, budget: Duration) -> R::Move
    where
        E: Eval<R>,
    {
        let timer = Timer::start(budget.saturating_sub(self.options.margin));

        let mut moves = pos.moves(self.side);
        if moves.is_empty() {
            debug!("no legal moves");
            return R::pass(self.side);
        }

        if let Some(m) = winning_move(pos, self.side, &moves) {
            debug!(best = ?m, "winning move");
            return m;
        }

        if let Some(m) = defusing_move(pos, self.side, &moves) {
            debug!(best = ?m, "defusing move");
            return m;
        }

        let depth = self.options.depth.saturating_sub(1);
        let mut counters = MetricsCounters::default();
        let mut best: Option<(usize, Score)> = None;
        let mut cutoff = Score::LOSS;

        for (i, m) in moves.iter().enumerate() {
            let mut next = pos.apply(m);
            let score = self.alphabeta(
                &mut *next,
                depth,
                Score::LOSS,
                Score::WIN,
                false,
                &timer,
                &mut counters,
            );

            if score > cutoff {
                cutoff = score;
                best = Some((i, score));
            }
        }

        let metrics = counters.snapshot();
        let remaining = timer.remaining();
        match best {
            Some((i, score)) => {
                let m = moves.swap_remove(i);
                debug!(best = ?m, %score, %metrics, ?remaining);
                m
            }

            None => {
                let m = moves.swap_remove(self.rng.gen_range(0..moves.len()));
                debug!(best = ?m, %metrics, ?remaining, "random move");
                m
            }
        }
    }
}
