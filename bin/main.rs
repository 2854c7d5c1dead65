use anyhow::Error as Anyhow;
use clap::Parser;

mod applet;
mod cli;

/// Runs an [`applet::Applet`], by default a game of tic-tac-toe against itself.
fn main() -> Result<(), Anyhow> {
    cli::Cli::parse().execute()
}
