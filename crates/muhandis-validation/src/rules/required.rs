//! Required field rule

use crate::locale::Locale;
use crate::messages::FailureReason;
use crate::options::RuleOptions;
use crate::outcome::ValidationOutcome;

/// Valid iff the value is not empty or whitespace-only
pub fn check(value: &str, locale: Locale, options: &RuleOptions) -> ValidationOutcome {
    if value.trim().is_empty() {
        ValidationOutcome::invalid(FailureReason::Required, locale, options)
    } else {
        ValidationOutcome::valid()
    }
}
