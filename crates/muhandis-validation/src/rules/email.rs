//! Email format rule

use super::after_required;
use crate::locale::Locale;
use crate::messages::FailureReason;
use crate::options::RuleOptions;
use crate::outcome::ValidationOutcome;
use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld: no whitespace, a single '@', at least one dot after it
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("Failed to compile email regex")
});

pub fn check(value: &str, locale: Locale, options: &RuleOptions) -> ValidationOutcome {
    after_required(value, locale, options, || {
        if EMAIL_REGEX.is_match(value) {
            ValidationOutcome::valid()
        } else {
            ValidationOutcome::invalid(FailureReason::InvalidEmail, locale, options)
        }
    })
}
