//! Validate a registration form in both locales and show the formatters

use muhandis_validation::{
    format_saudi_national_id, format_saudi_phone, FieldKind, FormRules, Locale, RuleOptions,
    ValidationConfig,
};
use std::collections::HashMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("muhandis-validation demo");
    println!("========================\n");

    let config = ValidationConfig::from_env()?;
    let engine = config.engine()?;
    println!("Configured locale: {}\n", engine.locale());

    let rules = FormRules::new()
        .field("full_name", FieldKind::Name)
        .field("email", FieldKind::Email)
        .field("phone", FieldKind::SaudiPhone)
        .field("national_id", FieldKind::SaudiNationalId)
        .field_with(
            "otp",
            FieldKind::SmsCode,
            RuleOptions::builder().expected_length(6).build()?,
        );

    let mut data = HashMap::new();
    data.insert("full_name".to_string(), "عبد الله".to_string());
    data.insert("email".to_string(), "abdullah@example".to_string());
    data.insert("phone".to_string(), "055 123 4567".to_string());
    data.insert("national_id".to_string(), "1234567890".to_string());
    data.insert("otp".to_string(), "12a456".to_string());

    for locale in Locale::ALL {
        let report = rules.validate(&data, locale);
        println!("[{}] valid: {}", locale, report.is_valid());
        for (field, error) in report.errors() {
            println!("  {}: {}", field, error);
        }
        println!();
    }

    println!("Session engine (form): {}", engine.validate_form(&rules, &data).to_json());
    println!();

    println!("format_saudi_phone(\"055 123 4567\") = {}", format_saudi_phone("055 123 4567"));
    println!(
        "format_saudi_national_id(\"1234567897\") = {}",
        format_saudi_national_id("1234567897")
    );

    Ok(())
}
