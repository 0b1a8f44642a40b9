//! SMS verification code rule

use super::{after_required, is_ascii_digits};
use crate::locale::Locale;
use crate::messages::FailureReason;
use crate::options::RuleOptions;
use crate::outcome::ValidationOutcome;

/// Exactly `expected_length` characters, all decimal digits.
/// Length is checked before content.
pub fn check(value: &str, locale: Locale, options: &RuleOptions) -> ValidationOutcome {
    after_required(value, locale, options, || {
        let expected = options.expected_length();

        if value.chars().count() != expected {
            ValidationOutcome::invalid(FailureReason::SmsCodeLength { expected }, locale, options)
        } else if !is_ascii_digits(value) {
            ValidationOutcome::invalid(FailureReason::SmsCodeDigitsOnly, locale, options)
        } else {
            ValidationOutcome::valid()
        }
    })
}
