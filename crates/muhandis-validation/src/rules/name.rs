//! Personal name rule (Latin and Arabic scripts)

use super::after_required;
use crate::locale::Locale;
use crate::messages::FailureReason;
use crate::options::RuleOptions;
use crate::outcome::ValidationOutcome;
use once_cell::sync::Lazy;
use regex::Regex;

// Any Unicode letter plus space, apostrophe, hyphen and period
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L} '\-.]+$").expect("Failed to compile name regex")
});

/// Trimmed length of at least `min_length` characters, then the character
/// set check.
pub fn check(value: &str, locale: Locale, options: &RuleOptions) -> ValidationOutcome {
    after_required(value, locale, options, || {
        let name = value.trim();
        let min = options.min_length();

        if name.chars().count() < min {
            ValidationOutcome::invalid(FailureReason::NameTooShort { min }, locale, options)
        } else if !NAME_REGEX.is_match(name) {
            ValidationOutcome::invalid(FailureReason::NameInvalidCharacters, locale, options)
        } else {
            ValidationOutcome::valid()
        }
    })
}
