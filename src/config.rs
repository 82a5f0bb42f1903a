//! Roster policy limits

use crate::models::constants::{
    DEFAULT_AGE_LIMIT, LINEUP_SIZE, MAX_JERSEY_NUMBER, MAX_PLAYERS, MIN_PLAYERS,
};
use crate::models::errors::{RosterError, RosterResult};

/// Admission limits the engine enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterConfig {
    /// Players must be strictly younger than this.
    pub age_limit: u32,
    /// Enrolled players needed before a lineup exists.
    pub min_players: usize,
    /// Roster capacity; also the size of the jersey number pool.
    pub max_players: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        RosterConfig {
            age_limit: DEFAULT_AGE_LIMIT,
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
        }
    }
}

impl RosterConfig {
    pub fn validate(&self) -> RosterResult<()> {
        if self.age_limit == 0 {
            return Err(RosterError::InvalidConfig(
                "age limit must be at least 1".to_string(),
            ));
        }
        if self.min_players < LINEUP_SIZE {
            return Err(RosterError::InvalidConfig(format!(
                "minimum roster of {} cannot field a {}-player lineup",
                self.min_players, LINEUP_SIZE
            )));
        }
        if self.max_players < self.min_players {
            return Err(RosterError::InvalidConfig(format!(
                "maximum roster {} is below minimum {}",
                self.max_players, self.min_players
            )));
        }
        if self.max_players > MAX_JERSEY_NUMBER {
            return Err(RosterError::InvalidConfig(format!(
                "maximum roster {} exceeds the {} available jersey numbers",
                self.max_players, MAX_JERSEY_NUMBER
            )));
        }
        Ok(())
    }

    /// Highest jersey number handed out; the pool is `1..=jersey_pool()`.
    pub fn jersey_pool(&self) -> RosterResult<u32> {
        u32::try_from(self.max_players).map_err(|_| {
            RosterError::InvalidConfig(format!(
                "maximum roster {} does not fit a jersey number",
                self.max_players
            ))
        })
    }
}
