use chrono::{Datelike, Duration, Local, NaiveDate};
use muhandis_validation::{
    format_saudi_national_id, format_saudi_phone, national_id_check_digit, validate,
    validate_with, FieldKind, Locale, RuleOptions,
};

/// A value each kind rejects for a kind-specific reason
fn invalid_sample(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Required => "   ",
        FieldKind::Email => "not-an-email",
        FieldKind::SaudiPhone => "0412345678",
        FieldKind::InternationalPhone => "0012345",
        FieldKind::Password => "Abcdefg1",
        FieldKind::SmsCode => "12a4",
        FieldKind::SaudiNationalId => "1234567890",
        FieldKind::Iqama => "3123456789",
        FieldKind::Name => "123",
        FieldKind::Age => "2100-01-01",
    }
}

#[test]
fn empty_input_reports_required_for_every_kind() {
    for locale in Locale::ALL {
        let required = validate(FieldKind::Required, "", locale);
        for kind in FieldKind::ALL {
            let outcome = validate(kind, "", locale);
            assert!(!outcome.is_valid(), "{} accepted empty input", kind);
            assert_eq!(outcome.error(), required.error(), "{} in {}", kind, locale);
        }
    }
}

#[test]
fn outcomes_are_never_valid_with_an_error() {
    for kind in FieldKind::ALL {
        for value in ["", "x", "0512345678", "1234567897", "Abcdefg1!", "2000-01-01"] {
            let outcome = validate(kind, value, Locale::English);
            assert_eq!(outcome.is_valid(), outcome.error().is_none());
        }
    }
}

#[test]
fn locales_give_distinct_messages_for_every_kind() {
    for kind in FieldKind::ALL {
        let value = invalid_sample(kind);
        let english = validate(kind, value, Locale::English);
        let arabic = validate(kind, value, Locale::Arabic);

        let english = english.error().expect("English message");
        let arabic = arabic.error().expect("Arabic message");
        assert!(!english.is_empty() && !arabic.is_empty());
        assert_ne!(english, arabic, "{} is not translated", kind);
    }
}

#[test]
fn accepted_national_ids_round_trip_the_check_digit() {
    // walk a spread of 9-digit bodies, append the computed digit and validate
    for seed in (100_000_000u32..=999_999_999).step_by(7_654_321) {
        let body = seed.to_string();
        let digit = national_id_check_digit(&body).unwrap();
        let id = format!("{}{}", body, digit);

        assert!(validate(FieldKind::SaudiNationalId, &id, Locale::English).is_valid());

        let wrong = format!("{}{}", body, (digit + 1) % 10);
        let outcome = validate(FieldKind::SaudiNationalId, &wrong, Locale::English);
        assert_eq!(outcome.code(), Some("national_id_checksum"));
    }
}

#[test]
fn saudi_phone_forms_share_one_canonical_format() {
    for phone in ["0512345678", "966512345678", "+966512345678"] {
        assert!(validate(FieldKind::SaudiPhone, phone, Locale::English).is_valid());
        assert_eq!(format_saudi_phone(phone), "+966512345678");
    }
}

#[test]
fn format_saudi_phone_is_idempotent() {
    for phone in ["0551234567", "551234567", "966 55 123 4567", "+966-55-123-4567", "+9665"] {
        let once = format_saudi_phone(phone);
        assert_eq!(format_saudi_phone(&once), once);
    }
}

#[test]
fn format_national_id_only_groups_ten_digits() {
    assert_eq!(format_saudi_national_id("1234567897"), "1 2345 6789 7");
    for value in ["123", "12345678901", "abcdefghij"] {
        assert_eq!(format_saudi_national_id(value), value);
    }
}

#[test]
fn age_boundary_against_today() {
    let today = Local::now().date_naive();
    // skip the one day a year where "same day 18 years ago" does not exist
    let Some(boundary) = NaiveDate::from_ymd_opt(today.year() - 18, today.month(), today.day())
    else {
        return;
    };

    let on_boundary = boundary.format("%Y-%m-%d").to_string();
    assert!(validate(FieldKind::Age, &on_boundary, Locale::English).is_valid());

    let day_after = (boundary + Duration::days(1)).format("%Y-%m-%d").to_string();
    assert!(!validate(FieldKind::Age, &day_after, Locale::English).is_valid());
}

#[test]
fn sms_code_content_error_when_length_matches() {
    let outcome = validate(FieldKind::SmsCode, "12a4", Locale::English);
    assert_eq!(outcome.code(), Some("sms_code_digits_only"));
}

#[test]
fn password_requires_a_symbol() {
    assert!(!validate(FieldKind::Password, "Abcdefg1", Locale::English).is_valid());
    assert!(validate(FieldKind::Password, "Abcdefg1!", Locale::English).is_valid());
}

#[test]
fn names_in_arabic_and_latin_scripts() {
    assert!(validate(FieldKind::Name, "محمد", Locale::Arabic).is_valid());
    assert!(validate(FieldKind::Name, "O'Brien-Smith", Locale::English).is_valid());
    assert!(!validate(FieldKind::Name, "123", Locale::English).is_valid());
}

#[test]
fn names_allow_plain_spaces_only() {
    assert!(validate(FieldKind::Name, "عبد الله", Locale::Arabic).is_valid());
    for name in ["Ali\nAhmed", "Ali\tAhmed", "Ali\u{2028}Ahmed"] {
        let outcome = validate(FieldKind::Name, name, Locale::English);
        assert_eq!(outcome.code(), Some("name_invalid_characters"), "Name {:?}", name);
    }
}

#[test]
fn phones_accept_ascii_digits_only() {
    for phone in ["05١٢٣٤٥٦٧٨", "+966٥١٢٣٤٥٦٧٨"] {
        assert!(!validate(FieldKind::SaudiPhone, phone, Locale::English).is_valid(), "{}", phone);
    }
    assert!(!validate(FieldKind::InternationalPhone, "+١٤١٥٥٥٥٢٦٧١", Locale::English).is_valid());

    // every accepted Saudi form still formats to +966 followed by nine ASCII digits
    for phone in ["0512345678", "966512345678", "+966 51 234 5678"] {
        assert!(validate(FieldKind::SaudiPhone, phone, Locale::English).is_valid());
        let formatted = format_saudi_phone(phone);
        assert_eq!(formatted.len(), 13);
        assert!(formatted[1..].bytes().all(|b| b.is_ascii_digit()), "{}", formatted);
    }
}

#[test]
fn rules_do_not_depend_on_previous_calls() {
    let options = RuleOptions::builder().expected_length(6).build().unwrap();
    let first = validate_with(FieldKind::SmsCode, "123", Locale::Arabic, &options);
    validate(FieldKind::SmsCode, "1234", Locale::English);
    let second = validate_with(FieldKind::SmsCode, "123", Locale::Arabic, &options);
    assert_eq!(first, second);
}
