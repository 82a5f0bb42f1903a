use chrono::{Datelike, NaiveDate};

use crate::models::errors::{RosterError, RosterResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Age in whole years on `today` for a `YYYY-MM-DD` birth date.
/// One year is subtracted until the birthday has been reached this year.
pub fn age_on(date_of_birth: &str, today: NaiveDate) -> RosterResult<u32> {
    let dob = NaiveDate::parse_from_str(date_of_birth.trim(), DATE_FORMAT)?;
    if dob > today {
        return Err(RosterError::InvalidDate(format!(
            "{} is in the future",
            date_of_birth.trim()
        )));
    }

    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    Ok(age as u32)
}

/// Today's date on the local clock.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn birthday_already_passed_this_year() {
        assert_eq!(age_on("2015-02-20", date(2024, 6, 1)).unwrap(), 9);
    }

    #[test]
    fn birthday_later_this_year() {
        assert_eq!(age_on("2015-08-15", date(2024, 6, 1)).unwrap(), 8);
    }

    #[test]
    fn birthday_today_counts() {
        assert_eq!(age_on("2014-06-01", date(2024, 6, 1)).unwrap(), 10);
    }

    #[test]
    fn born_today_is_zero() {
        assert_eq!(age_on("2024-06-01", date(2024, 6, 1)).unwrap(), 0);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(age_on(" 2015-05-01\n", date(2024, 6, 1)).unwrap(), 9);
    }

    #[test]
    fn malformed_dates_are_rejected() {
        for input in ["invalid-date-format", "2015/05/01", "2015-13-01", "2015-02-30", ""] {
            assert!(
                matches!(age_on(input, date(2024, 6, 1)), Err(RosterError::InvalidDate(_))),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn future_dates_are_rejected() {
        assert!(matches!(
            age_on("2030-01-01", date(2024, 6, 1)),
            Err(RosterError::InvalidDate(_))
        ));
    }
}
