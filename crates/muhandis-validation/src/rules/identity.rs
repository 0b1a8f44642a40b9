//! Saudi National ID and Iqama (resident permit) rules

use super::{after_required, is_ascii_digits, strip_whitespace};
use crate::locale::Locale;
use crate::messages::FailureReason;
use crate::options::RuleOptions;
use crate::outcome::ValidationOutcome;

pub const ID_LENGTH: usize = 10;

/// Check digit for the first nine digits of a National ID.
///
/// Digits at even positions are doubled (minus 9 when above 9), digits at
/// odd positions are added as-is, and the check digit brings the sum up to
/// the next multiple of ten.
///
/// Returns `None` if `digits` is not exactly nine ASCII digits.
pub fn national_id_check_digit(digits: &str) -> Option<u32> {
    if digits.len() != ID_LENGTH - 1 || !is_ascii_digits(digits) {
        return None;
    }

    let sum: u32 = digits
        .bytes()
        .map(|b| u32::from(b - b'0'))
        .enumerate()
        .map(|(position, digit)| {
            if position % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();

    Some((10 - sum % 10) % 10)
}

/// Ten digits whose last digit matches [`national_id_check_digit`]
pub fn check_national_id(value: &str, locale: Locale, options: &RuleOptions) -> ValidationOutcome {
    after_required(value, locale, options, || {
        let id = strip_whitespace(value);
        if !is_id_shaped(&id) {
            return ValidationOutcome::invalid(FailureReason::NationalIdLength, locale, options);
        }

        let (body, last) = id.split_at(ID_LENGTH - 1);
        let expected = national_id_check_digit(body);
        let actual = last.chars().next().and_then(|c| c.to_digit(10));

        if expected.is_some() && expected == actual {
            ValidationOutcome::valid()
        } else {
            ValidationOutcome::invalid(FailureReason::NationalIdChecksum, locale, options)
        }
    })
}

/// Ten digits starting with 1 or 2. No checksum.
pub fn check_iqama(value: &str, locale: Locale, options: &RuleOptions) -> ValidationOutcome {
    after_required(value, locale, options, || {
        let iqama = strip_whitespace(value);
        if !is_id_shaped(&iqama) {
            return ValidationOutcome::invalid(FailureReason::IqamaLength, locale, options);
        }

        if iqama.starts_with('1') || iqama.starts_with('2') {
            ValidationOutcome::valid()
        } else {
            ValidationOutcome::invalid(FailureReason::IqamaPrefix, locale, options)
        }
    })
}

/// Group a ten-digit ID as `D DDDD DDDD D`; anything else is returned as-is.
pub fn format_saudi_national_id(value: &str) -> String {
    let id = strip_whitespace(value);
    if !is_id_shaped(&id) {
        return value.to_string();
    }

    format!("{} {} {} {}", &id[..1], &id[1..5], &id[5..9], &id[9..])
}

fn is_id_shaped(id: &str) -> bool {
    id.len() == ID_LENGTH && is_ascii_digits(id)
}
