use anyhow::Error as Anyhow;
use clap::Parser;
use lib::game::{Outcome, Rules, Side};
use lib::{eval::Materialist, mnk::Board, mnk::Move, search::Options, search::Searcher};
use std::time::Duration;
use tracing::{info, instrument};

/// A game between two searchers, black moves first.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The search configuration shared by both sides.
    #[clap(short, long, default_value_t)]
    options: Options,

    /// The time budget per move in milliseconds.
    #[clap(short, long, default_value_t = 1000)]
    time: u64,

    /// The starting position.
    #[clap(default_value_t)]
    board: Board,
}

impl Default for Play {
    fn default() -> Self {
        Play {
            options: Options::default(),
            time: 1000,
            board: Board::default(),
        }
    }
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut board = self.board;
        let budget = Duration::from_millis(self.time);
        let mut black = Searcher::with_options(Side::Black, Materialist::new(), self.options);
        let mut white = Searcher::with_options(Side::White, Materialist::new(), self.options);

        let mut turn = Side::Black;
        let mut passes = 0;

        for ply in 1.. {
            if board.winner(turn).is_some() || passes > 1 {
                break;
            }

            let m = match turn {
                Side::Black => black.select(&mut board, budget),
                Side::White => white.select(&mut board, budget),
            };

            match m {
                Move::Pass(_) => passes += 1,
                Move::Place(..) => passes = 0,
            }

            board.play(&m);
            info!(ply, side = %turn, %m, %board);
            turn = !turn;
        }

        let outcome = board.winner(turn).unwrap_or(Outcome::Draw);
        println!("{board}");
        println!("{outcome}");

        Ok(())
    }
}
