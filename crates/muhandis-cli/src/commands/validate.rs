use super::CommandOutput;
use anyhow::Context;
use chrono::NaiveDate;
use muhandis_validation::{validate_named, Locale, RuleOptions, ValidationConfig};

/// Arguments of `muhandis validate`
#[derive(Debug, Clone, Default)]
pub struct ValidateArgs {
    pub kind: String,
    pub value: String,
    pub locale: Option<Locale>,
    pub field_name: Option<String>,
    pub min_length: Option<usize>,
    pub expected_length: Option<usize>,
    pub min_age: Option<u32>,
    pub today: Option<NaiveDate>,
    pub json: bool,
}

/// Command-line flags override the configured defaults
fn rule_options(config: &ValidationConfig, args: &ValidateArgs) -> anyhow::Result<RuleOptions> {
    let mut builder = RuleOptions::builder()
        .min_length(args.min_length.unwrap_or(config.name_min_length))
        .expected_length(args.expected_length.unwrap_or(config.sms_code_length))
        .min_age(args.min_age.unwrap_or(config.min_age));

    if let Some(field_name) = &args.field_name {
        builder = builder.field_name(field_name.clone());
    }
    if let Some(today) = args.today {
        builder = builder.reference_date(today);
    }

    builder.build().context("Invalid rule options")
}

pub fn run(config: &ValidationConfig, args: ValidateArgs) -> anyhow::Result<CommandOutput> {
    let locale = args.locale.unwrap_or(config.locale);
    let options = rule_options(config, &args)?;

    let outcome = validate_named(&args.kind, &args.value, locale, &options)
        .with_context(|| format!("Cannot validate with rule '{}'", args.kind))?;

    tracing::info!(
        target: "muhandis_cli",
        kind = %args.kind,
        locale = %locale,
        valid = outcome.is_valid(),
        "validated value"
    );

    let text = if args.json {
        serde_json::to_string_pretty(&outcome)?
    } else {
        outcome.to_string()
    };

    Ok(if outcome.is_valid() {
        CommandOutput::success(text)
    } else {
        CommandOutput::failure(text)
    })
}
