//! Minimum age rule for birth dates

use super::after_required;
use crate::locale::Locale;
use crate::messages::FailureReason;
use crate::options::RuleOptions;
use crate::outcome::ValidationOutcome;
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"];

/// Parse a birth date from the formats the app's date pickers emit
pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Age in whole years on `today`. Negative for birth dates in the future.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Parse the birth date, then require at least `min_age` whole years.
pub fn check(value: &str, locale: Locale, options: &RuleOptions) -> ValidationOutcome {
    after_required(value, locale, options, || {
        let Some(birth) = parse_birth_date(value) else {
            return ValidationOutcome::invalid(FailureReason::InvalidDate, locale, options);
        };

        let today = options
            .reference_date()
            .unwrap_or_else(|| Local::now().date_naive());
        let min_age = options.min_age();

        if age_on(birth, today) >= min_age as i32 {
            ValidationOutcome::valid()
        } else {
            ValidationOutcome::invalid(FailureReason::Underage { min_age }, locale, options)
        }
    })
}
