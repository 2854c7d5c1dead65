use anyhow::Error as Anyhow;
use clap::Parser;
use lib::{eval::Materialist, game::Side, mnk::Board, search::Options, search::Searcher};
use std::time::Duration;
use tracing::{info, instrument};

/// Selects a move for one side of a position.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Analyze {
    /// The search configuration.
    #[clap(short, long, default_value_t)]
    options: Options,

    /// The time budget in milliseconds.
    #[clap(short, long, default_value_t = 1000)]
    time: u64,

    /// The side to move, either `black` (`x`) or `white` (`o`).
    side: Side,

    /// The position to analyze, e.g. `x../.o./... 3`.
    board: Board,
}

impl Analyze {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut board = self.board;
        let mut searcher = Searcher::with_options(self.side, Materialist::new(), self.options);
        let m = searcher.select(&mut board, Duration::from_millis(self.time));

        info!(
            side = %searcher.side(),
            options = %searcher.options(),
            k = board.k(),
            %board,
            best = %m
        );
        println!("{m}");

        Ok(())
    }
}
