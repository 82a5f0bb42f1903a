use chrono::NaiveDate;

use crate::models::constants::{Position, SkillLevel};
use crate::models::errors::RosterResult;
use crate::models::player::Player;

const SAMPLE: [(&str, &str, &str, Position, SkillLevel); 22] = [
    ("John", "Doe", "2015-05-01", Position::Defender, SkillLevel::Level3),
    ("Jane", "Doe", "2014-06-10", Position::Defender, SkillLevel::Level4),
    ("Mark", "Smith", "2014-07-20", Position::Defender, SkillLevel::Level4),
    ("Mary", "Johnson", "2015-08-15", Position::Midfielder, SkillLevel::Level3),
    ("Paul", "Jones", "2015-09-10", Position::Defender, SkillLevel::Level4),
    ("Sophie", "Brown", "2015-10-05", Position::Midfielder, SkillLevel::Level5),
    ("James", "Garcia", "2015-11-25", Position::Forward, SkillLevel::Level4),
    ("Laura", "Williams", "2014-12-15", Position::Forward, SkillLevel::Level3),
    ("Peter", "Davis", "2014-01-15", Position::Defender, SkillLevel::Level3),
    ("Susan", "Miller", "2015-02-20", Position::Defender, SkillLevel::Level3),
    ("Mike", "Taylor", "2016-03-25", Position::Midfielder, SkillLevel::Level1),
    ("Nancy", "Anderson", "2016-04-10", Position::Midfielder, SkillLevel::Level2),
    ("Tom", "Lee", "2014-05-15", Position::Defender, SkillLevel::Level2),
    ("Angela", "Perez", "2014-06-05", Position::Defender, SkillLevel::Level1),
    ("Steve", "Lewis", "2014-07-20", Position::Midfielder, SkillLevel::Level5),
    ("Rita", "Young", "2015-08-25", Position::Midfielder, SkillLevel::Level3),
    ("Alan", "Hall", "2016-09-30", Position::Defender, SkillLevel::Level3),
    ("Diana", "Harris", "2015-10-15", Position::Defender, SkillLevel::Level5),
    ("Brian", "Clark", "2015-11-20", Position::Forward, SkillLevel::Level1),
    ("Grace", "Walker", "2016-12-05", Position::Forward, SkillLevel::Level1),
    ("Frank", "Rodriguez", "2016-01-10", Position::Forward, SkillLevel::Level2),
    ("Linda", "Gonzalez", "2016-02-15", Position::Defender, SkillLevel::Level2),
];

/// Demonstration roster with ages computed as of `today`.
/// Ages drift with the calendar, so some entries may be over the limit.
pub fn sample_roster(today: NaiveDate) -> RosterResult<Vec<Player>> {
    SAMPLE
        .iter()
        .map(|(first, last, dob, position, skill)| {
            Player::from_birth_date(*first, *last, dob, today, *position, *skill)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_parses_every_entry() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let roster = sample_roster(today).unwrap();
        assert_eq!(roster.len(), 22);
        assert!(roster.iter().all(|p| p.age < 10));
    }

    #[test]
    fn sample_rejects_when_today_precedes_births() {
        let today = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
        assert!(sample_roster(today).is_err());
    }
}
