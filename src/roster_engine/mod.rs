//! Roster state machine
//!
//! Owns the enrolled players and the derived starting lineup. Every admission
//! builds the next roster and lineup off to the side and commits both together,
//! so a failure part-way through leaves the previous state untouched.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use tracing::{debug, info};

use crate::config::RosterConfig;
use crate::models::errors::{RosterError, RosterResult};
use crate::models::player::{Player, PlayerView};
use crate::services::jersey::pick_jersey;
use crate::services::selection::{eviction_candidate, name_cmp, select_lineup};

/// Core roster engine enforcing admission policy and deriving the lineup
pub struct RosterEngine {
    config: RosterConfig,
    players: Vec<Player>,
    lineup: Vec<Player>,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterState {
    /// Below the minimum; no lineup yet.
    Building,
    /// Lineup exists and more players can join.
    Active,
    /// At capacity; joining requires displacing a weaker player.
    Full,
}

/// Result of an admission attempt. Rejections are outcomes, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// Player is too old; nothing changed.
    Ineligible { age_limit: u32 },
    /// Player enrolled but the roster is still below the minimum.
    AwaitingPlayers { required: usize, jersey_number: u32 },
    /// Player enrolled and the lineup was rebuilt.
    Added {
        jersey_number: u32,
        evicted: Option<Player>,
    },
    /// Roster is full of equal-or-better players; nothing changed.
    RosterFull { max_players: usize },
}

impl AddOutcome {
    /// Whether the player joined the roster
    pub fn is_admitted(&self) -> bool {
        matches!(
            self,
            AddOutcome::AwaitingPlayers { .. } | AddOutcome::Added { .. }
        )
    }

    pub fn jersey_number(&self) -> Option<u32> {
        match self {
            AddOutcome::AwaitingPlayers { jersey_number, .. }
            | AddOutcome::Added { jersey_number, .. } => Some(*jersey_number),
            _ => None,
        }
    }
}

impl fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AddOutcome::Ineligible { age_limit } => write!(
                f,
                "Player not added. The team is for children under {} years old.",
                age_limit
            ),
            AddOutcome::AwaitingPlayers { required, .. } => write!(
                f,
                "You need at least {} players to create a team. \
                 Player added, but team not created yet.",
                required
            ),
            AddOutcome::Added { .. } => write!(f, "Player added successfully."),
            AddOutcome::RosterFull { max_players } => write!(
                f,
                "The team already has {} players with higher or equal skill level.",
                max_players
            ),
        }
    }
}

impl RosterEngine {
    /// Creates an empty roster whose jersey draws come from OS entropy
    pub fn new(config: RosterConfig) -> RosterResult<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates an empty roster with reproducible jersey draws
    ///
    /// # Arguments
    ///
    /// * `config` - Admission limits; rejected if they cannot produce a lineup
    /// * `seed` - Random number generator seed for jersey assignment
    pub fn with_seed(config: RosterConfig, seed: u64) -> RosterResult<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: RosterConfig, rng: StdRng) -> RosterResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            players: Vec::new(),
            lineup: Vec::new(),
            rng,
        })
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Number of enrolled players
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn state(&self) -> RosterState {
        let size = self.players.len();
        if size < self.config.min_players {
            RosterState::Building
        } else if size < self.config.max_players {
            RosterState::Active
        } else {
            RosterState::Full
        }
    }

    /// Applies the admission policy to `player`
    ///
    /// # Policy
    ///
    /// 1. Players at or above the age limit are turned away.
    /// 2. Below capacity, the player is enrolled and given a free jersey number.
    /// 3. At capacity, the weakest enrolled player is replaced only if the
    ///    newcomer's skill level is strictly higher.
    ///
    /// Once the roster holds at least the minimum, the lineup is rebuilt from
    /// scratch after every enrollment.
    ///
    /// # Errors
    ///
    /// `NoJerseyAvailable` if the number pool is exhausted; roster and lineup
    /// are left as they were.
    pub fn add_player(&mut self, mut player: Player) -> RosterResult<AddOutcome> {
        if player.age >= self.config.age_limit {
            info!(player = %player.full_name(), age = player.age, "rejected: over age limit");
            return Ok(AddOutcome::Ineligible {
                age_limit: self.config.age_limit,
            });
        }

        let mut next = self.players.clone();
        let mut evicted = None;

        if next.len() >= self.config.max_players {
            if let Some(idx) = eviction_candidate(&next) {
                if player.skill_level <= next[idx].skill_level {
                    info!(
                        player = %player.full_name(),
                        skill = %player.skill_level,
                        "rejected: roster full with equal-or-better players"
                    );
                    return Ok(AddOutcome::RosterFull {
                        max_players: self.config.max_players,
                    });
                }
                evicted = Some(next.remove(idx));
            }
        }

        let jersey_number = pick_jersey(&next, self.config.jersey_pool()?, &mut self.rng)?;
        debug!(player = %player.full_name(), jersey_number, "jersey assigned");
        player.jersey_number = Some(jersey_number);
        player.actual_position = None;
        next.push(player);

        let lineup = if next.len() >= self.config.min_players {
            let lineup = select_lineup(&next);
            debug!(starters = lineup.len(), "lineup rebuilt");
            lineup
        } else {
            Vec::new()
        };

        self.players = next;
        self.lineup = lineup;

        if let Some(gone) = &evicted {
            info!(player = %gone.full_name(), "evicted for stronger player");
        }
        info!(enrolled = self.players.len(), state = ?self.state(), "player enrolled");

        if self.players.len() < self.config.min_players {
            Ok(AddOutcome::AwaitingPlayers {
                required: self.config.min_players,
                jersey_number,
            })
        } else {
            Ok(AddOutcome::Added {
                jersey_number,
                evicted,
            })
        }
    }

    /// Copies of every enrolled player, sorted by last name
    ///
    /// The records are detached from the engine; editing them changes nothing.
    /// Use [`all_player_views`](Self::all_player_views) for display.
    pub fn all_players(&self) -> Vec<Player> {
        let mut players = self.players.clone();
        players.sort_by(name_cmp);
        players
    }

    /// Copies of the starting lineup, ordered by assigned position then last name
    ///
    /// Like [`all_players`](Self::all_players), the records are detached copies.
    ///
    /// # Errors
    ///
    /// `InsufficientRoster` while fewer than the minimum players are enrolled.
    pub fn starting_lineup(&self) -> RosterResult<Vec<Player>> {
        if self.players.len() < self.config.min_players {
            return Err(RosterError::InsufficientRoster {
                enrolled: self.players.len(),
                required: self.config.min_players,
            });
        }
        Ok(self.lineup.clone())
    }

    /// Display views of every enrolled player, sorted by last name
    pub fn all_player_views(&self) -> Vec<PlayerView> {
        self.all_players().iter().map(Player::view).collect()
    }

    /// Display views of the starting lineup
    ///
    /// # Errors
    ///
    /// `InsufficientRoster` while fewer than the minimum players are enrolled.
    pub fn lineup_views(&self) -> RosterResult<Vec<PlayerView>> {
        Ok(self.starting_lineup()?.iter().map(Player::view).collect())
    }
}
