use std::fmt;
use std::str::FromStr;

use super::errors::RosterError;

pub const DEFAULT_AGE_LIMIT: u32 = 10;
pub const MIN_PLAYERS: usize = 10;
pub const MAX_PLAYERS: usize = 20;

/// Largest roster a config may ask for; jersey numbers run no higher.
pub const MAX_JERSEY_NUMBER: usize = 99;

pub const NUM_POSITIONS: usize = 4;

/// Number of players in a starting lineup: the sum of all position quotas.
pub const LINEUP_SIZE: usize = 7;

/// Field positions, declared in the fixed order every comparator relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Position {
    Goalie = 0,
    Defender = 1,
    Midfielder = 2,
    Forward = 3,
}

impl Position {
    pub fn name(&self) -> &'static str {
        match self {
            Position::Goalie => "GOALIE",
            Position::Defender => "DEFENDER",
            Position::Midfielder => "MIDFIELDER",
            Position::Forward => "FORWARD",
        }
    }

    /// How many players of this position the starting lineup requires.
    pub fn quota(&self) -> usize {
        match self {
            Position::Goalie => 1,
            Position::Defender => 2,
            Position::Midfielder => 3,
            Position::Forward => 1,
        }
    }

    pub const ALL: [Position; NUM_POSITIONS] = [
        Position::Goalie,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Position {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GOALIE" | "G" => Ok(Position::Goalie),
            "DEFENDER" | "D" => Ok(Position::Defender),
            "MIDFIELDER" | "M" => Ok(Position::Midfielder),
            "FORWARD" | "F" => Ok(Position::Forward),
            other => Err(RosterError::ParseError(format!("unknown position '{}'", other))),
        }
    }
}

/// Ordinal skill rank, `Level1` lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkillLevel {
    Level1 = 1,
    Level2 = 2,
    Level3 = 3,
    Level4 = 4,
    Level5 = 5,
}

impl SkillLevel {
    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub const ALL: [SkillLevel; 5] = [
        SkillLevel::Level1,
        SkillLevel::Level2,
        SkillLevel::Level3,
        SkillLevel::Level4,
        SkillLevel::Level5,
    ];
}

impl TryFrom<u8> for SkillLevel {
    type Error = RosterError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SkillLevel::Level1),
            2 => Ok(SkillLevel::Level2),
            3 => Ok(SkillLevel::Level3),
            4 => Ok(SkillLevel::Level4),
            5 => Ok(SkillLevel::Level5),
            other => Err(RosterError::ParseError(format!(
                "skill level must be between 1 and 5, got {}",
                other
            ))),
        }
    }
}

impl FromStr for SkillLevel {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("LEVEL_")
            .or_else(|| trimmed.strip_prefix("level_"))
            .unwrap_or(trimmed);
        let value: u8 = digits.parse()?;
        SkillLevel::try_from(value)
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LEVEL_{}", self.value())
    }
}
