use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roster::cli::args;
use roster::io::TerminalIO;
use roster::services::age::today;
use roster::services::console::Session;
use roster::services::sample::sample_roster;
use roster::RosterEngine;

fn main() -> Result<()> {
    let args = args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let config = args.roster_config();
    let mut engine = match args.seed {
        Some(seed) => RosterEngine::with_seed(config, seed),
        None => RosterEngine::new(config),
    }
    .context("invalid roster limits")?;

    println!("*** U{} SOCCER TEAM ***", config.age_limit);
    println!();

    let today = today();
    if args.demo {
        for player in sample_roster(today).context("building demonstration roster")? {
            engine.add_player(player)?;
        }
        info!(enrolled = engine.len(), "demonstration roster loaded");
    }

    let mut terminal = TerminalIO;
    let mut output = TerminalIO;
    Session::new(&mut engine, today).run(&mut terminal, &mut output)?;
    Ok(())
}
