//! Youth Team Roster Engine
//!
//! Manages a youth soccer roster: age eligibility, capacity limits, jersey
//! numbers, and the starting lineup derived from skill level and position
//! quota.
//!
//! # Modules
//!
//! - [`roster_engine`] - Roster state machine and admission policy
//! - [`models`] - Domain models (Player, Position, SkillLevel, errors)
//! - [`services`] - Lineup selection, jersey allocation, age computation, console
//! - [`config`] - Roster limits
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - User interface and presentation logic
//!
//! # Example
//!
//! ```rust
//! use roster::{Player, Position, RosterConfig, RosterEngine, SkillLevel};
//!
//! let mut engine = RosterEngine::with_seed(RosterConfig::default(), 42).unwrap();
//! let outcome = engine
//!     .add_player(Player::new("John", "Doe", 8, Position::Goalie, SkillLevel::Level3))
//!     .unwrap();
//! assert!(outcome.is_admitted());
//! assert!(engine.starting_lineup().is_err());
//! ```

pub mod cli;
pub mod config;
pub mod io;
pub mod models;
pub mod roster_engine;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use config::RosterConfig;
pub use models::constants::{Position, SkillLevel};
pub use models::errors::{RosterError, RosterResult};
pub use models::player::{Player, PlayerView};
pub use roster_engine::{AddOutcome, RosterEngine, RosterState};
