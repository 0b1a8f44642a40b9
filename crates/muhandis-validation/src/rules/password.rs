//! Password strength rule

use super::after_required;
use crate::locale::Locale;
use crate::messages::FailureReason;
use crate::options::RuleOptions;
use crate::outcome::ValidationOutcome;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters that satisfy the "special character" requirement
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?~`";

/// Length, lowercase, uppercase, digit and symbol all share one message
pub fn check(value: &str, locale: Locale, options: &RuleOptions) -> ValidationOutcome {
    after_required(value, locale, options, || {
        if is_strong(value) {
            ValidationOutcome::valid()
        } else {
            ValidationOutcome::invalid(FailureReason::WeakPassword, locale, options)
        }
    })
}

fn is_strong(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}
