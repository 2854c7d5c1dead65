use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::{cmp::min, io::stderr};
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Picks moves for m,n,k games by time-bounded alpha-beta search.
#[derive(Parser)]
#[clap(author, version)]
pub struct Cli {
    /// Verbosity level.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    /// Also log when the search of each move begins and ends.
    #[clap(short, long)]
    spans: bool,

    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    fn init_tracing(&self) {
        // Only the binary and the search library log at the requested level.
        let filter = Targets::new()
            .with_target("cli", self.verbosity)
            .with_target("lib", self.verbosity)
            .with_default(min(Level::WARN, self.verbosity));

        let spans = if self.spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let writer = layer()
            .pretty()
            .with_target(false)
            .with_span_events(spans)
            .with_writer(stderr);

        registry().with(filter).with(writer).init();
    }

    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        self.init_tracing();
        self.applet.unwrap_or_default().execute()
    }
}
