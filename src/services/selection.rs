//! Roster selection
//!
//! Pure comparator-based functions over an immutable roster snapshot:
//! eviction candidate choice and starting-lineup derivation. Nothing here
//! mutates the roster; callers receive new values and commit them.

use std::cmp::Ordering;

use crate::models::constants::{Position, LINEUP_SIZE, NUM_POSITIONS};
use crate::models::player::Player;

/// Lineup ranking: skill descending, then position order, then last name.
pub fn ranking_cmp(a: &Player, b: &Player) -> Ordering {
    b.skill_level
        .cmp(&a.skill_level)
        .then(a.preferred_position.cmp(&b.preferred_position))
        .then_with(|| a.last_name.cmp(&b.last_name))
}

/// Eviction key: skill ascending, then position order, then last name.
/// The minimum under this key is the weakest player.
pub fn weakness_cmp(a: &Player, b: &Player) -> Ordering {
    a.skill_level
        .cmp(&b.skill_level)
        .then(a.preferred_position.cmp(&b.preferred_position))
        .then_with(|| a.last_name.cmp(&b.last_name))
}

/// Index of the player a stronger newcomer would replace. On a full tie the
/// earliest enrolled player is chosen.
pub fn eviction_candidate(roster: &[Player]) -> Option<usize> {
    roster
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| weakness_cmp(a, b))
        .map(|(i, _)| i)
}

/// Derive the starting lineup from the roster.
///
/// Players are ranked with [`ranking_cmp`] and placed at their preferred
/// position while its quota lasts. Positions still short afterwards are filled
/// in [`Position::ALL`] order from the best remaining players by skill alone,
/// who then play the needed position whatever they prefer.
///
/// The returned players carry `actual_position` and are ordered by
/// [`lineup_cmp`].
pub fn select_lineup(roster: &[Player]) -> Vec<Player> {
    let mut ranked: Vec<&Player> = roster.iter().collect();
    ranked.sort_by(|a, b| ranking_cmp(a, b));

    let mut open: [usize; NUM_POSITIONS] = Position::ALL.map(|p| p.quota());
    let mut placed = vec![false; ranked.len()];
    let mut lineup = Vec::with_capacity(LINEUP_SIZE);

    for (i, player) in ranked.iter().enumerate() {
        let slot = &mut open[player.preferred_position as usize];
        if *slot > 0 {
            *slot -= 1;
            placed[i] = true;
            lineup.push(place(player, player.preferred_position));
        }
    }

    for position in Position::ALL {
        let needed = open[position as usize];
        if needed == 0 {
            continue;
        }

        let mut unplaced: Vec<usize> = (0..ranked.len()).filter(|&i| !placed[i]).collect();
        unplaced.sort_by(|&a, &b| ranked[b].skill_level.cmp(&ranked[a].skill_level));

        for i in unplaced.into_iter().take(needed) {
            placed[i] = true;
            open[position as usize] -= 1;
            lineup.push(place(ranked[i], position));
        }
    }

    lineup.sort_by(lineup_cmp);
    lineup
}

fn place(player: &Player, position: Position) -> Player {
    let mut starter = player.clone();
    starter.actual_position = Some(position);
    starter
}

/// Lineup display order: assigned position, then last name.
pub fn lineup_cmp(a: &Player, b: &Player) -> Ordering {
    a.display_position()
        .cmp(&b.display_position())
        .then_with(|| a.last_name.cmp(&b.last_name))
}

/// Roster listing order: last name, first name as tie-break.
pub fn name_cmp(a: &Player, b: &Player) -> Ordering {
    a.last_name
        .cmp(&b.last_name)
        .then_with(|| a.first_name.cmp(&b.first_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::SkillLevel::{self, *};
    use crate::models::constants::Position::*;

    fn p(last: &str, position: Position, skill: SkillLevel) -> Player {
        Player::new("X", last, 8, position, skill)
    }

    fn count(lineup: &[Player], position: Position) -> usize {
        lineup
            .iter()
            .filter(|p| p.actual_position == Some(position))
            .count()
    }

    #[test]
    fn ranking_puts_skill_first() {
        let strong = p("Zed", Forward, Level5);
        let weak = p("Abe", Goalie, Level1);
        assert_eq!(ranking_cmp(&strong, &weak), Ordering::Less);
    }

    #[test]
    fn ranking_breaks_skill_ties_by_position_then_name() {
        let goalie = p("Zed", Goalie, Level3);
        let forward = p("Abe", Forward, Level3);
        assert_eq!(ranking_cmp(&goalie, &forward), Ordering::Less);

        let a = p("Abe", Defender, Level3);
        let b = p("Bob", Defender, Level3);
        assert_eq!(ranking_cmp(&a, &b), Ordering::Less);
    }

    #[test]
    fn eviction_picks_lowest_skill() {
        let roster = vec![p("A", Goalie, Level3), p("B", Forward, Level1), p("C", Defender, Level2)];
        assert_eq!(eviction_candidate(&roster), Some(1));
    }

    #[test]
    fn eviction_ties_go_to_earlier_position_then_earlier_name() {
        let roster = vec![
            p("Miller", Forward, Level2),
            p("Young", Defender, Level2),
            p("Adams", Defender, Level2),
        ];
        assert_eq!(eviction_candidate(&roster), Some(2));
    }

    #[test]
    fn eviction_on_empty_roster_is_none() {
        assert_eq!(eviction_candidate(&[]), None);
    }

    #[test]
    fn lineup_fills_every_quota_by_preference() {
        let roster = vec![
            p("Smith", Goalie, Level3),
            p("Doe", Midfielder, Level4),
            p("Johnson", Defender, Level2),
            p("Jackson", Forward, Level5),
            p("Brown", Defender, Level1),
            p("Garcia", Midfielder, Level3),
            p("Harris", Midfielder, Level4),
            p("Davis", Defender, Level2),
            p("Wilson", Midfielder, Level5),
            p("Taylor", Forward, Level1),
            p("Young", Defender, Level2),
            p("Martinez", Midfielder, Level3),
            p("Miller", Midfielder, Level4),
            p("Gonzalez", Defender, Level1),
            p("Lopez", Forward, Level2),
        ];
        let lineup = select_lineup(&roster);
        let names: Vec<&str> = lineup.iter().map(|p| p.last_name.as_str()).collect();
        assert_eq!(names, vec!["Smith", "Davis", "Johnson", "Doe", "Harris", "Wilson", "Jackson"]);
        assert!(lineup.iter().all(|p| p.actual_position == Some(p.preferred_position)));
    }

    #[test]
    fn short_positions_are_filled_by_best_remaining() {
        // No goalie and a single forward: the best unplaced players cover the gaps.
        let roster = vec![
            p("D1", Defender, Level5),
            p("D2", Defender, Level4),
            p("D3", Defender, Level3),
            p("M1", Midfielder, Level2),
            p("M2", Midfielder, Level2),
            p("M3", Midfielder, Level2),
            p("M4", Midfielder, Level1),
            p("F1", Forward, Level1),
            p("D4", Defender, Level1),
            p("M5", Midfielder, Level1),
        ];
        let lineup = select_lineup(&roster);

        assert_eq!(lineup.len(), LINEUP_SIZE);
        assert_eq!(count(&lineup, Goalie), 1);
        assert_eq!(count(&lineup, Defender), 2);
        assert_eq!(count(&lineup, Midfielder), 3);
        assert_eq!(count(&lineup, Forward), 1);

        let goalie = lineup.iter().find(|p| p.actual_position == Some(Goalie)).unwrap();
        assert_eq!(goalie.last_name, "D3");
        assert_eq!(goalie.preferred_position, Defender);
    }

    #[test]
    fn fallback_ignores_preference_entirely() {
        // Ten goalies: one keeps goal, the next six by rank fill the field.
        let roster: Vec<Player> = (0..10)
            .map(|i| p(&format!("G{:02}", i), Goalie, if i < 3 { Level4 } else { Level2 }))
            .collect();
        let lineup = select_lineup(&roster);

        assert_eq!(lineup.len(), LINEUP_SIZE);
        assert_eq!(count(&lineup, Goalie), 1);
        let keeper = lineup.iter().find(|p| p.actual_position == Some(Goalie)).unwrap();
        assert_eq!(keeper.last_name, "G00");
        let defenders: Vec<&str> = lineup
            .iter()
            .filter(|p| p.actual_position == Some(Defender))
            .map(|p| p.last_name.as_str())
            .collect();
        assert_eq!(defenders, vec!["G01", "G02"]);
    }

    #[test]
    fn lineup_is_a_subset_of_roster() {
        let roster: Vec<Player> = (0..12)
            .map(|i| p(&format!("P{:02}", i), Position::ALL[i % 4], SkillLevel::ALL[i % 5]))
            .collect();
        let lineup = select_lineup(&roster);
        for starter in &lineup {
            assert!(roster.iter().any(|r| r.last_name == starter.last_name));
        }
        let names: std::collections::HashSet<&str> =
            lineup.iter().map(|p| p.last_name.as_str()).collect();
        assert_eq!(names.len(), LINEUP_SIZE);
    }

    #[test]
    fn selection_does_not_touch_input() {
        let roster = vec![p("A", Goalie, Level3); 10];
        let snapshot = roster.clone();
        let _ = select_lineup(&roster);
        assert_eq!(roster, snapshot);
        assert!(roster.iter().all(|p| p.actual_position.is_none()));
    }

    #[test]
    fn name_order_uses_first_name_on_ties() {
        let mut a = p("Doe", Goalie, Level1);
        a.first_name = "John".into();
        let mut b = p("Doe", Goalie, Level1);
        b.first_name = "Jane".into();
        assert_eq!(name_cmp(&b, &a), Ordering::Less);
    }
}
