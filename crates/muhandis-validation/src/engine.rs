//! Validation entry points
//!
//! The free functions are stateless. [`ValidationEngine`] binds a locale and
//! default options for the lifetime of one form session; it is a plain value
//! and can be shared across threads freely.

use crate::error::ContractError;
use crate::form::{FormReport, FormRules};
use crate::kind::FieldKind;
use crate::locale::Locale;
use crate::options::RuleOptions;
use crate::outcome::ValidationOutcome;
use crate::rules;
use std::collections::HashMap;

/// Validate `value` as `kind` with default options
pub fn validate(kind: FieldKind, value: &str, locale: Locale) -> ValidationOutcome {
    validate_with(kind, value, locale, &RuleOptions::default())
}

/// Validate `value` as `kind`
pub fn validate_with(
    kind: FieldKind,
    value: &str,
    locale: Locale,
    options: &RuleOptions,
) -> ValidationOutcome {
    let outcome = rules::rule_for(kind)(value, locale, options);

    if let Some(code) = outcome.code() {
        tracing::debug!(
            target: "muhandis::validation",
            kind = %kind,
            locale = %locale,
            code = code,
            "field rejected"
        );
    }

    outcome
}

/// String-keyed entry point. An unknown kind is a caller bug and is
/// returned as a [`ContractError`], never as a failed outcome.
pub fn validate_named(
    kind: &str,
    value: &str,
    locale: Locale,
    options: &RuleOptions,
) -> Result<ValidationOutcome, ContractError> {
    let kind: FieldKind = kind.parse()?;
    Ok(validate_with(kind, value, locale, options))
}

/// Locale and default options for one form session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationEngine {
    locale: Locale,
    options: RuleOptions,
}

impl ValidationEngine {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            options: RuleOptions::default(),
        }
    }

    /// Replace the default options used by [`ValidationEngine::validate`]
    pub fn with_options(mut self, options: RuleOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn options(&self) -> &RuleOptions {
        &self.options
    }

    pub fn validate(&self, kind: FieldKind, value: &str) -> ValidationOutcome {
        validate_with(kind, value, self.locale, &self.options)
    }

    /// Validate with options other than the session defaults
    pub fn validate_with(
        &self,
        kind: FieldKind,
        value: &str,
        options: &RuleOptions,
    ) -> ValidationOutcome {
        validate_with(kind, value, self.locale, options)
    }

    pub fn validate_form(&self, rules: &FormRules, data: &HashMap<String, String>) -> FormReport {
        rules.validate_with_defaults(data, self.locale, &self.options)
    }
}
