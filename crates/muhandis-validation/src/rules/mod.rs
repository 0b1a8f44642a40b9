//! Rule implementations, one module per rule family.
//!
//! Every rule has the same shape, [`RuleFn`]. All of them except
//! [`required::check`] run the required check first, so empty input always
//! reports the generic "required" message.

pub mod age;
pub mod email;
pub mod identity;
pub mod name;
pub mod password;
pub mod phone;
pub mod required;
pub mod sms;

use crate::kind::FieldKind;
use crate::locale::Locale;
use crate::options::RuleOptions;
use crate::outcome::ValidationOutcome;

/// A pure validation rule
pub type RuleFn = fn(&str, Locale, &RuleOptions) -> ValidationOutcome;

/// The rule backing `kind`
pub fn rule_for(kind: FieldKind) -> RuleFn {
    match kind {
        FieldKind::Required => required::check,
        FieldKind::Email => email::check,
        FieldKind::SaudiPhone => phone::check_saudi,
        FieldKind::InternationalPhone => phone::check_international,
        FieldKind::Password => password::check,
        FieldKind::SmsCode => sms::check,
        FieldKind::SaudiNationalId => identity::check_national_id,
        FieldKind::Iqama => identity::check_iqama,
        FieldKind::Name => name::check,
        FieldKind::Age => age::check,
    }
}

/// Run the required check, then `rule` only if the value is non-blank
pub(crate) fn after_required(
    value: &str,
    locale: Locale,
    options: &RuleOptions,
    rule: impl FnOnce() -> ValidationOutcome,
) -> ValidationOutcome {
    let outcome = required::check(value, locale, options);
    if outcome.is_valid() {
        rule()
    } else {
        outcome
    }
}

/// Drop every whitespace character
pub(crate) fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// `value` is non-empty and every character is an ASCII digit
pub(crate) fn is_ascii_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
