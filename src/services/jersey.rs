use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::errors::{RosterError, RosterResult};
use crate::models::player::Player;

/// Numbers in `1..=pool_size` not worn by anyone on the roster, ascending.
pub fn free_numbers(roster: &[Player], pool_size: u32) -> Vec<u32> {
    (1..=pool_size)
        .filter(|n| roster.iter().all(|p| p.jersey_number != Some(*n)))
        .collect()
}

/// Draw a free jersey number uniformly at random.
pub fn pick_jersey(roster: &[Player], pool_size: u32, rng: &mut impl Rng) -> RosterResult<u32> {
    free_numbers(roster, pool_size)
        .choose(rng)
        .copied()
        .ok_or(RosterError::NoJerseyAvailable)
}
