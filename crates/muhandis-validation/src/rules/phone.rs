//! Phone number rules and the Saudi number formatter

use super::after_required;
use crate::locale::Locale;
use crate::messages::FailureReason;
use crate::options::RuleOptions;
use crate::outcome::ValidationOutcome;
use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_PUNCTUATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s\-()]").expect("Failed to compile phone punctuation regex")
});

// +966XXXXXXXXX, 966XXXXXXXXX or 05XXXXXXXX, ASCII digits only
static SAUDI_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\+966[0-9]{9}|966[0-9]{9}|05[0-9]{8})$").expect("Failed to compile Saudi phone regex")
});

// E.164: '+' then 2 to 15 digits, no leading zero
static INTERNATIONAL_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9][0-9]{1,14}$").expect("Failed to compile international phone regex")
});

pub const SAUDI_COUNTRY_CODE: &str = "+966";

/// Remove spaces, dashes and parentheses
fn clean(value: &str) -> String {
    PHONE_PUNCTUATION.replace_all(value, "").into_owned()
}

pub fn check_saudi(value: &str, locale: Locale, options: &RuleOptions) -> ValidationOutcome {
    after_required(value, locale, options, || {
        if SAUDI_PHONE_REGEX.is_match(&clean(value)) {
            ValidationOutcome::valid()
        } else {
            ValidationOutcome::invalid(FailureReason::InvalidSaudiPhone, locale, options)
        }
    })
}

pub fn check_international(value: &str, locale: Locale, options: &RuleOptions) -> ValidationOutcome {
    after_required(value, locale, options, || {
        if INTERNATIONAL_PHONE_REGEX.is_match(&clean(value)) {
            ValidationOutcome::valid()
        } else {
            ValidationOutcome::invalid(FailureReason::InvalidPhone, locale, options)
        }
    })
}

/// Normalize a Saudi mobile number to `+966XXXXXXXXX`.
///
/// Recognized prefixes are `+966`, `966`, `05` and a bare `5`. Anything
/// else is returned unchanged. This does not validate the number.
pub fn format_saudi_phone(value: &str) -> String {
    let cleaned = clean(value);

    if cleaned.starts_with(SAUDI_COUNTRY_CODE) {
        cleaned
    } else if cleaned.starts_with("966") {
        format!("+{}", cleaned)
    } else if let Some(rest) = cleaned.strip_prefix('0').filter(|rest| rest.starts_with('5')) {
        format!("{}{}", SAUDI_COUNTRY_CODE, rest)
    } else if cleaned.starts_with('5') {
        format!("{}{}", SAUDI_COUNTRY_CODE, cleaned)
    } else {
        value.to_string()
    }
}
