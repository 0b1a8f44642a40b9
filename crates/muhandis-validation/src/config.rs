//! Environment-driven defaults for validation sessions

use crate::engine::ValidationEngine;
use crate::error::ConfigError;
use crate::locale::Locale;
use crate::options::{
    RuleOptions, DEFAULT_MIN_AGE, DEFAULT_NAME_MIN_LENGTH, DEFAULT_SMS_CODE_LENGTH,
};
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::str::FromStr;

pub const LOCALE_VAR: &str = "MUHANDIS_LOCALE";
pub const NAME_MIN_LENGTH_VAR: &str = "MUHANDIS_NAME_MIN_LENGTH";
pub const SMS_CODE_LENGTH_VAR: &str = "MUHANDIS_SMS_CODE_LENGTH";
pub const MIN_AGE_VAR: &str = "MUHANDIS_MIN_AGE";

/// Where a configuration value came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Value loaded from environment variable
    EnvVar(String),
    /// Default value used
    Default(String),
}

impl ConfigSource {
    pub fn is_env_var(&self) -> bool {
        matches!(self, ConfigSource::EnvVar(_))
    }

    pub fn is_default(&self) -> bool {
        matches!(self, ConfigSource::Default(_))
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::EnvVar(var) => write!(f, "Environment variable: {}", var),
            ConfigSource::Default(value) => write!(f, "Default value: {}", value),
        }
    }
}

/// Default locale and rule parameters for the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    pub locale: Locale,
    pub name_min_length: usize,
    pub sms_code_length: usize,
    pub min_age: u32,
    sources: HashMap<String, ConfigSource>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            name_min_length: DEFAULT_NAME_MIN_LENGTH,
            sms_code_length: DEFAULT_SMS_CODE_LENGTH,
            min_age: DEFAULT_MIN_AGE,
            sources: HashMap::new(),
        }
    }
}

impl ValidationConfig {
    /// Load configuration from `MUHANDIS_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(locale) = lookup(LOCALE_VAR) {
            config.locale = locale.parse()?;
        }

        if let Some(value) = lookup(NAME_MIN_LENGTH_VAR) {
            config.name_min_length = parse_number(NAME_MIN_LENGTH_VAR, &value)?;
        }

        if let Some(value) = lookup(SMS_CODE_LENGTH_VAR) {
            config.sms_code_length = parse_number(SMS_CODE_LENGTH_VAR, &value)?;
        }

        if let Some(value) = lookup(MIN_AGE_VAR) {
            config.min_age = parse_number(MIN_AGE_VAR, &value)?;
        }

        config.sources = [
            ("locale", LOCALE_VAR, config.locale.to_string()),
            ("name_min_length", NAME_MIN_LENGTH_VAR, DEFAULT_NAME_MIN_LENGTH.to_string()),
            ("sms_code_length", SMS_CODE_LENGTH_VAR, DEFAULT_SMS_CODE_LENGTH.to_string()),
            ("min_age", MIN_AGE_VAR, DEFAULT_MIN_AGE.to_string()),
        ]
        .into_iter()
        .map(|(field, var, default)| {
            let source = if lookup(var).is_some() {
                ConfigSource::EnvVar(var.to_string())
            } else {
                ConfigSource::Default(default)
            };
            (field.to_string(), source)
        })
        .collect();

        config.validate()?;
        Ok(config)
    }

    /// Check that the values form usable rule options
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rule_options().map(|_| ())
    }

    /// Source of each loaded value, keyed by field name
    pub fn config_sources(&self) -> &HashMap<String, ConfigSource> {
        &self.sources
    }

    pub fn rule_options(&self) -> Result<RuleOptions, ConfigError> {
        let options = RuleOptions::builder()
            .min_length(self.name_min_length)
            .expected_length(self.sms_code_length)
            .min_age(self.min_age)
            .build()?;
        Ok(options)
    }

    /// Engine bound to the configured locale and options
    pub fn engine(&self) -> Result<ValidationEngine, ConfigError> {
        Ok(ValidationEngine::new(self.locale).with_options(self.rule_options()?))
    }
}

fn parse_number<T: FromStr>(var: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::invalid_value(var, value, "a non-negative integer"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContractError;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = ValidationConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.locale, Locale::Arabic);
        assert_eq!(config.name_min_length, 2);
        assert_eq!(config.sms_code_length, 4);
        assert_eq!(config.min_age, 18);
        assert!(config.config_sources().values().all(ConfigSource::is_default));
    }

    #[test]
    fn test_values_from_variables() {
        let config = ValidationConfig::from_lookup(lookup_from(&[
            (LOCALE_VAR, "en"),
            (SMS_CODE_LENGTH_VAR, "6"),
            (MIN_AGE_VAR, " 21 "),
        ]))
        .unwrap();

        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.sms_code_length, 6);
        assert_eq!(config.min_age, 21);
        assert_eq!(config.name_min_length, 2);

        let sources = config.config_sources();
        assert!(sources["locale"].is_env_var());
        assert!(sources["sms_code_length"].is_env_var());
        assert!(sources["name_min_length"].is_default());
        assert_eq!(
            sources["min_age"].to_string(),
            "Environment variable: MUHANDIS_MIN_AGE"
        );
    }

    #[test]
    fn test_invalid_number() {
        let result = ValidationConfig::from_lookup(lookup_from(&[(MIN_AGE_VAR, "eighteen")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == MIN_AGE_VAR
        ));
    }

    #[test]
    fn test_invalid_locale_and_options() {
        let result = ValidationConfig::from_lookup(lookup_from(&[(LOCALE_VAR, "fr")]));
        assert!(matches!(
            result,
            Err(ConfigError::Contract(ContractError::UnknownLocale { .. }))
        ));

        let result = ValidationConfig::from_lookup(lookup_from(&[(SMS_CODE_LENGTH_VAR, "0")]));
        assert!(matches!(
            result,
            Err(ConfigError::Contract(ContractError::InvalidOptions { .. }))
        ));
    }

    #[test]
    fn test_engine_from_config() {
        let config = ValidationConfig::from_lookup(lookup_from(&[
            (LOCALE_VAR, "english"),
            (SMS_CODE_LENGTH_VAR, "6"),
        ]))
        .unwrap();
        let engine = config.engine().unwrap();

        assert_eq!(engine.locale(), Locale::English);
        assert_eq!(engine.options().expected_length(), 6);
    }
}
