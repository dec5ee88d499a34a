use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use hull2d::prelude::*;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod output;
mod present;

use input::Source;
use output::HullDoc;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hulls of 2D point sets (gift wrap, Graham scan)")]
struct Cmd {
    /// Log every step of the hull algorithms
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the point set
    Points {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Compute the convex hull and print it; optionally write JSON under --out
    Hull {
        #[arg(long, value_enum)]
        algo: AlgoArg,
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long)]
        out: Option<PathBuf>,
        /// Collinearity tolerance (0 = exact comparisons)
        #[arg(long, default_value_t = 0.0)]
        eps: f64,
    },
}

/// Point source flags; without any, the nine-point worked example is used.
#[derive(Args, Clone, Debug)]
struct SourceArgs {
    /// Draw N random integer points in [0, 100]²
    #[arg(long, value_name = "N", conflicts_with = "input")]
    random: Option<usize>,
    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// CSV file with `x` and `y` columns
    #[arg(long)]
    input: Option<PathBuf>,
}

impl SourceArgs {
    fn source(&self) -> Source {
        match (&self.input, self.random) {
            (Some(path), _) => Source::Csv { path: path.clone() },
            (None, Some(count)) => Source::Random {
                count,
                seed: self.seed,
            },
            (None, None) => Source::WorkedExample,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgoArg {
    GiftWrap,
    GrahamScan,
}

impl From<AlgoArg> for Algorithm {
    fn from(a: AlgoArg) -> Self {
        match a {
            AlgoArg::GiftWrap => Algorithm::GiftWrap,
            AlgoArg::GrahamScan => Algorithm::GrahamScan,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.debug { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Points { source } => points(source.source()),
        Action::Hull {
            algo,
            source,
            out,
            eps,
        } => hull(algo.into(), source.source(), out, eps, cmd.debug),
    }
}

fn points(source: Source) -> Result<()> {
    let set = source.load()?;
    tracing::info!(source = %source, points = set.len(), "points");
    print!("{}", present::points_text(&set));
    Ok(())
}

fn hull(
    algorithm: Algorithm,
    source: Source,
    out: Option<PathBuf>,
    eps: f64,
    debug: bool,
) -> Result<()> {
    let set = source.load()?;
    tracing::info!(algo = %algorithm, source = %source, points = set.len(), "hull");
    print!("{}", present::points_text(&set));

    let cfg = HullCfg::with_eps(eps);
    let mut sink: Box<dyn EventSink> = if debug {
        Box::new(TracingSink)
    } else {
        Box::new(NullSink)
    };
    let hull = compute_hull_with(&set, algorithm, &cfg, sink.as_mut())
        .with_context(|| format!("computing {algorithm} hull of {} points", set.len()))?;
    print!("{}", present::hull_text(&hull));

    if let Some(out) = out {
        HullDoc::new(&hull, &set, &cfg, &source).write(&out)?;
        tracing::info!(out = %out.display(), "wrote");
    }
    Ok(())
}
