//! Firebreak CLI: drives the containment engine over stdin/stdout
//!
//! Setup block on stdin: node count, link count, exit count, then the
//! link pairs, then the exit ids. Each following integer is the
//! intruder's position for one round; each successful round prints the
//! severed link as `a b` on stdout. Diagnostics go to stderr.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use firebreak_core::{Engine, Network, NetworkBuilder};

mod input;

use input::TokenReader;

#[derive(Parser)]
#[command(name = "firebreak")]
#[command(about = "Sever one network link per round to wall a mobile intruder off from the exits", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable per-round debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Stop after this many rounds (default: play until input ends)
    #[arg(short, long)]
    rounds: Option<u64>,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_network<R: BufRead>(reader: &mut TokenReader<R>) -> Result<Network> {
    let nodes = reader.next_usize().context("reading node count")?;
    let links = reader.next_usize().context("reading link count")?;
    let exits = reader.next_usize().context("reading exit count")?;
    debug!("nb nodes: {nodes}");
    debug!("nb links: {links}");
    debug!("nb exits: {exits}");

    let mut builder = NetworkBuilder::new(nodes);
    for _ in 0..links {
        let a = reader.next_usize().context("reading link endpoint")?;
        let b = reader.next_usize().context("reading link endpoint")?;
        builder = builder.link(a, b);
    }
    for _ in 0..exits {
        let id = reader.next_usize().context("reading exit id")?;
        builder = builder.exit(id);
    }
    builder.build().context("invalid network description")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdin = io::stdin();
    let mut reader = TokenReader::new(stdin.lock());

    let started = Instant::now();
    let network = read_network(&mut reader)?;
    debug!("network: {network}");
    debug!("init time: {:?}", started.elapsed());

    let mut engine = Engine::new(network);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    while cli.rounds.map_or(true, |max| engine.round() < max) {
        let position = match reader.next_i64() {
            Ok(position) => position,
            Err(_) => break, // input exhausted
        };
        // a failed round produced no cut; the engine already logged why
        if let Ok(cut) = engine.play_round(position) {
            writeln!(out, "{} {}", cut.a, cut.b).context("writing cut")?;
            out.flush().context("flushing stdout")?;
        }
    }

    let stats = engine.stats();
    info!(
        "played {} rounds, {} cuts, {} failed, avg {:.1}us/round",
        stats.rounds, stats.cuts, stats.failed_rounds, stats.avg_round_time_us
    );
    Ok(())
}
