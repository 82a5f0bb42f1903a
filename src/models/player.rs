use chrono::NaiveDate;
use std::fmt;

use super::constants::{Position, SkillLevel};
use super::errors::RosterResult;
use crate::services::age::age_on;

/// A team member. The engine fills in `jersey_number` on enrollment and
/// `actual_position` when the player is placed in the starting lineup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub first_name: String,
    pub last_name: String,
    /// Age in whole years.
    pub age: u32,
    /// Original `YYYY-MM-DD` text when the player was built from a birth date.
    pub date_of_birth: Option<String>,
    pub preferred_position: Position,
    pub skill_level: SkillLevel,
    pub jersey_number: Option<u32>,
    pub actual_position: Option<Position>,
}

impl Player {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        preferred_position: Position,
        skill_level: SkillLevel,
    ) -> Self {
        Player {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            date_of_birth: None,
            preferred_position,
            skill_level,
            jersey_number: None,
            actual_position: None,
        }
    }

    /// Build a player from a `YYYY-MM-DD` birth date, computing the age as of `today`.
    /// Unparseable or future dates are rejected rather than admitted with a bogus age.
    pub fn from_birth_date(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: &str,
        today: NaiveDate,
        preferred_position: Position,
        skill_level: SkillLevel,
    ) -> RosterResult<Self> {
        let age = age_on(date_of_birth, today)?;
        let mut player = Player::new(first_name, last_name, age, preferred_position, skill_level);
        player.date_of_birth = Some(date_of_birth.trim().to_string());
        Ok(player)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Position shown to the user: the assigned one if any, otherwise the preference.
    pub fn display_position(&self) -> Position {
        self.actual_position.unwrap_or(self.preferred_position)
    }

    pub fn view(&self) -> PlayerView {
        PlayerView {
            full_name: self.full_name(),
            jersey_number: self.jersey_number,
            position: self.display_position(),
            preferred_position: self.preferred_position,
            skill_level: self.skill_level,
            age: self.age,
            date_of_birth: self.date_of_birth.clone(),
        }
    }
}

/// Read-only snapshot of a player handed to callers outside the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    pub full_name: String,
    pub jersey_number: Option<u32>,
    pub position: Position,
    pub preferred_position: Position,
    pub skill_level: SkillLevel,
    pub age: u32,
    pub date_of_birth: Option<String>,
}

impl fmt::Display for PlayerView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let jersey = self
            .jersey_number
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "Name: {}, Jersey Number: {}, Position: {}",
            self.full_name, jersey, self.position
        )
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.view(), f)
    }
}
