//! Error types for caller mistakes and configuration problems.
//!
//! Neither type is used for rejected user input: that is reported through
//! [`ValidationOutcome`](crate::ValidationOutcome).

use thiserror::Error;

/// A caller broke the engine's contract (unknown rule, bad options).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("Unknown field kind: '{kind}'")]
    UnknownFieldKind { kind: String },

    #[error("Unknown locale: '{locale}'. Expected: en or ar")]
    UnknownLocale { locale: String },

    #[error("Invalid value for option '{option}': '{value}'. Expected: {expected}")]
    InvalidOptions {
        option: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl ContractError {
    /// Create an unknown field kind error
    pub fn unknown_kind(kind: impl Into<String>) -> Self {
        Self::UnknownFieldKind { kind: kind.into() }
    }

    /// Create an unknown locale error
    pub fn unknown_locale(locale: impl Into<String>) -> Self {
        Self::UnknownLocale {
            locale: locale.into(),
        }
    }

    /// Create an invalid options error
    pub fn invalid_option(
        option: &'static str,
        value: impl ToString,
        expected: &'static str,
    ) -> Self {
        Self::InvalidOptions {
            option,
            value: value.to_string(),
            expected,
        }
    }
}

/// Failure while loading [`ValidationConfig`](crate::ValidationConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for field '{field}': '{value}'. Expected: {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    #[error(transparent)]
    Contract(#[from] ContractError),
}

impl ConfigError {
    /// Create an invalid value error
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_error_display() {
        let error = ContractError::unknown_kind("postcode");
        assert_eq!(error.to_string(), "Unknown field kind: 'postcode'");

        let error = ContractError::invalid_option("expected_length", 0, "a positive length");
        assert_eq!(
            error.to_string(),
            "Invalid value for option 'expected_length': '0'. Expected: a positive length"
        );
    }

    #[test]
    fn test_config_error_wraps_contract_error() {
        let error: ConfigError = ContractError::unknown_locale("fr").into();
        assert!(matches!(error, ConfigError::Contract(ContractError::UnknownLocale { .. })));
        assert_eq!(error.to_string(), "Unknown locale: 'fr'. Expected: en or ar");
    }
}
