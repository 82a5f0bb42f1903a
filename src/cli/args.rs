use clap::Parser;

use crate::config::RosterConfig;
use crate::models::constants::{DEFAULT_AGE_LIMIT, MAX_PLAYERS, MIN_PLAYERS};

#[derive(Debug, Parser)]
#[command(name = "roster", about = "Youth soccer roster and starting lineup manager")]
pub struct Args {
    /// Seed for jersey number draws (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Players must be younger than this many years
    #[arg(long, default_value_t = DEFAULT_AGE_LIMIT)]
    pub age_limit: u32,

    /// Players needed before a starting lineup is formed
    #[arg(long, default_value_t = MIN_PLAYERS)]
    pub min_players: usize,

    /// Roster capacity and size of the jersey number pool
    #[arg(long, default_value_t = MAX_PLAYERS)]
    pub max_players: usize,

    /// Load the demonstration roster before starting
    #[arg(long)]
    pub demo: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn roster_config(&self) -> RosterConfig {
        RosterConfig {
            age_limit: self.age_limit,
            min_players: self.min_players,
            max_players: self.max_players,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
