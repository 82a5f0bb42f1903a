use crate::io::OutputWriter;
use crate::models::player::PlayerView;
use crate::roster_engine::AddOutcome;

pub struct RosterPresenter;

impl RosterPresenter {
    pub fn show_players(title: &str, players: &[PlayerView], output: &mut dyn OutputWriter) {
        output.writeln(&format!("{}:", title));
        if players.is_empty() {
            output.writeln("  (none)");
            return;
        }
        for player in players {
            output.writeln(&player.to_string());
        }
    }

    pub fn show_outcome(outcome: &AddOutcome, output: &mut dyn OutputWriter) {
        output.writeln(&outcome.to_string());
        if let AddOutcome::Added { evicted: Some(gone), .. } = outcome {
            output.writeln(&format!("{} was released to make room.", gone.full_name()));
        }
    }

    pub fn show_roster_table(players: &[PlayerView], output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "{:<4}{:<24}{:<12}{:<8}{:<5}{}",
            "NO.", "NAME", "POSITION", "SKILL", "AGE", "BORN"
        ));
        for view in players {
            let jersey = view
                .jersey_number
                .map(|n| n.to_string())
                .unwrap_or_default();
            output.writeln(&format!(
                "{:<4}{:<24}{:<12}{:<8}{:<5}{}",
                jersey,
                view.full_name,
                view.position.name(),
                view.skill_level.value(),
                view.age,
                view.date_of_birth.as_deref().unwrap_or("-")
            ));
        }
    }
}
