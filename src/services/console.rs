use chrono::NaiveDate;
use tracing::debug;

use crate::io::{InputReader, OutputWriter};
use crate::models::constants::{Position, SkillLevel};
use crate::models::errors::{RosterError, RosterResult};
use crate::models::player::Player;
use crate::roster_engine::RosterEngine;
use crate::ui::presenters::RosterPresenter;

/// Interactive roster session: the form and its buttons, on a terminal.
pub struct Session<'a> {
    engine: &'a mut RosterEngine,
    today: NaiveDate,
}

impl<'a> Session<'a> {
    pub fn new(engine: &'a mut RosterEngine, today: NaiveDate) -> Self {
        Session { engine, today }
    }

    pub fn run(
        &mut self,
        input: &mut dyn InputReader,
        output: &mut dyn OutputWriter,
    ) -> RosterResult<()> {
        Self::print_command_menu(output);

        loop {
            let Some(line) = input.read_line("COMMAND")? else {
                break;
            };

            let result = match line.trim().to_ascii_lowercase().as_str() {
                "a" | "add" => self.add_player(input, output),
                "l" | "list" => {
                    RosterPresenter::show_players("All Players", &self.engine.all_player_views(), output);
                    Ok(())
                }
                "r" | "roster" => {
                    RosterPresenter::show_roster_table(&self.engine.all_player_views(), output);
                    Ok(())
                }
                "t" | "team" => self.create_team(output),
                "q" | "quit" => {
                    output.writeln("GOODBYE, COACH.");
                    break;
                }
                _ => {
                    Self::print_command_menu(output);
                    Ok(())
                }
            };

            if let Err(e) = result {
                output.writeln(&format!("Error: {}", e));
            }
        }
        Ok(())
    }

    fn add_player(
        &mut self,
        input: &mut dyn InputReader,
        output: &mut dyn OutputWriter,
    ) -> RosterResult<()> {
        let first_name = prompt(input, "First Name:")?;
        let last_name = prompt(input, "Last Name:")?;
        let date_of_birth = prompt(input, "Date of Birth (YYYY-MM-DD):")?;
        let position: Position = prompt(input, "Position (G/D/M/F):")?.parse()?;
        let skill: SkillLevel = prompt(input, "Skill Level (1-5):")?.parse()?;

        let player = match Player::from_birth_date(
            first_name,
            last_name,
            &date_of_birth,
            self.today,
            position,
            skill,
        ) {
            Ok(player) => player,
            Err(RosterError::InvalidDate(reason)) => {
                debug!(%reason, "date of birth rejected");
                output.writeln("Please enter a valid date of birth in the format YYYY-MM-DD.");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let outcome = self.engine.add_player(player)?;
        RosterPresenter::show_outcome(&outcome, output);
        RosterPresenter::show_players("All Players", &self.engine.all_player_views(), output);
        Ok(())
    }

    fn create_team(&mut self, output: &mut dyn OutputWriter) -> RosterResult<()> {
        let required = self.engine.config().min_players;
        if self.engine.len() < required {
            output.writeln(&format!(
                "You need at least {} players to create a team.",
                required
            ));
            return Ok(());
        }

        RosterPresenter::show_players("All Players", &self.engine.all_player_views(), output);
        RosterPresenter::show_players("Starting Lineup", &self.engine.lineup_views()?, output);
        output.writeln("Team created successfully.");
        Ok(())
    }

    fn print_command_menu(output: &mut dyn OutputWriter) {
        output.writeln("   A = ADD PLAYER");
        output.writeln("   L = LIST PLAYERS");
        output.writeln("   R = ROSTER TABLE");
        output.writeln("   T = CREATE TEAM");
        output.writeln("   Q = QUIT");
    }
}

fn prompt(input: &mut dyn InputReader, label: &str) -> RosterResult<String> {
    input
        .read_line(label)?
        .map(|line| line.trim().to_string())
        .ok_or_else(|| RosterError::ParseError(format!("no input for '{}'", label)))
}
