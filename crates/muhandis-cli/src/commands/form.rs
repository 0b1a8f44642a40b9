use super::CommandOutput;
use anyhow::{bail, Context};
use muhandis_validation::{FieldKind, FormRules, Locale, ValidationConfig};
use std::collections::HashMap;
use std::path::Path;

/// Parse repeated `FIELD=KIND` arguments into form rules
pub fn parse_rules(specs: &[String]) -> anyhow::Result<FormRules> {
    let mut rules = FormRules::new();

    for spec in specs {
        let Some((field, kind)) = spec.split_once('=') else {
            bail!("Invalid rule '{}'. Expected FIELD=KIND", spec);
        };
        let field = field.trim();
        if field.is_empty() {
            bail!("Invalid rule '{}'. Field name is empty", spec);
        }

        let kind: FieldKind = kind
            .trim()
            .parse()
            .with_context(|| format!("Invalid rule '{}'", spec))?;
        rules = rules.field(field, kind);
    }

    Ok(rules)
}

/// Read a JSON object whose values are strings (numbers are stringified)
pub fn read_form(path: &Path) -> anyhow::Result<HashMap<String, String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))?;

    let Some(object) = value.as_object() else {
        bail!("{} must contain a JSON object", path.display());
    };

    object
        .iter()
        .map(|(field, value)| match value {
            serde_json::Value::String(s) => Ok((field.clone(), s.clone())),
            serde_json::Value::Number(n) => Ok((field.clone(), n.to_string())),
            serde_json::Value::Null => Ok((field.clone(), String::new())),
            other => bail!("Field '{}' must be a string, got {}", field, other),
        })
        .collect()
}

pub fn run(
    config: &ValidationConfig,
    input: &Path,
    rule_specs: &[String],
    locale: Option<Locale>,
) -> anyhow::Result<CommandOutput> {
    let rules = parse_rules(rule_specs)?;
    let data = read_form(input)?;

    let mut engine = config.engine()?;
    if let Some(locale) = locale {
        engine = engine.with_locale(locale);
    }

    let report = engine.validate_form(&rules, &data);
    tracing::info!(
        target: "muhandis_cli",
        fields = report.len(),
        errors = report.error_count(),
        "validated form"
    );

    let text = serde_json::to_string_pretty(&report.to_json())?;
    Ok(if report.is_valid() {
        CommandOutput::success(text)
    } else {
        CommandOutput::failure(text)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_form(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    fn specs(specs: &[&str]) -> Vec<String> {
        specs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_rules() {
        let rules = parse_rules(&specs(&["phone=saudi_phone", " otp = sms_code "])).unwrap();
        assert_eq!(rules.kind_of("phone"), Some(FieldKind::SaudiPhone));
        assert_eq!(rules.kind_of("otp"), Some(FieldKind::SmsCode));

        assert!(parse_rules(&specs(&["phone"])).is_err());
        assert!(parse_rules(&specs(&["=email"])).is_err());
        assert!(parse_rules(&specs(&["zip=postcode"])).is_err());
    }

    #[test]
    fn test_read_form() {
        let file = write_form(r#"{"name": "Ali", "otp": 1234, "note": null}"#);
        let data = read_form(file.path()).unwrap();
        assert_eq!(data["name"], "Ali");
        assert_eq!(data["otp"], "1234");
        assert_eq!(data["note"], "");

        let file = write_form(r#"["not", "an", "object"]"#);
        assert!(read_form(file.path()).is_err());

        let file = write_form(r#"{"tags": ["a"]}"#);
        assert!(read_form(file.path()).is_err());
    }

    #[test]
    fn test_run_form() {
        let file = write_form(r#"{"phone": "0512345678", "email": "bad"}"#);
        let output = run(
            &ValidationConfig::default(),
            file.path(),
            &specs(&["phone=saudi_phone", "email=email"]),
            Some(Locale::English),
        )
        .unwrap();

        assert!(!output.success);
        let report: serde_json::Value = serde_json::from_str(&output.text).unwrap();
        assert_eq!(report["valid"], false);
        assert_eq!(report["fields"]["phone"]["isValid"], true);
        assert_eq!(
            report["fields"]["email"]["error"],
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_run_form_missing_file() {
        let result = run(
            &ValidationConfig::default(),
            Path::new("/nonexistent/form.json"),
            &specs(&["email=email"]),
            None,
        );
        assert!(result.is_err());
    }
}
