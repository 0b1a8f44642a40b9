//! Result of validating one field

use crate::locale::Locale;
use crate::messages::FailureReason;
use crate::options::RuleOptions;
use serde::Serialize;
use std::fmt;

/// Pass/fail outcome with a localized message.
///
/// Fields are private: an outcome is either valid with no message, or
/// invalid with exactly one message and its code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
            code: None,
        }
    }

    /// Failed outcome carrying the message for `reason` in `locale`
    pub fn invalid(reason: FailureReason, locale: Locale, options: &RuleOptions) -> Self {
        Self {
            is_valid: false,
            error: Some(reason.message(locale, options.field_name())),
            code: Some(reason.code()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Localized message, present iff the value was rejected
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Machine-readable failure code, present iff the value was rejected
    pub fn code(&self) -> Option<&'static str> {
        self.code
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!(self)
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(message) => f.write_str(message),
            None => f.write_str("valid"),
        }
    }
}
