//! Whole-form validation
//!
//! A [`FormRules`] declares which rule applies to each field of a screen
//! (registration, profile, OTP). Validating a form runs every declared field
//! and collects one outcome per field into a [`FormReport`].

use crate::engine::validate_with;
use crate::kind::FieldKind;
use crate::locale::Locale;
use crate::options::RuleOptions;
use crate::outcome::ValidationOutcome;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldRule {
    kind: FieldKind,
    options: Option<RuleOptions>,
}

/// Field name to rule mapping for one form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormRules {
    fields: BTreeMap<String, FieldRule>,
}

impl FormRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `field` validated as `kind` with the form's default options.
    /// Declaring a field twice replaces the earlier rule.
    pub fn field(mut self, field: impl Into<String>, kind: FieldKind) -> Self {
        self.fields
            .insert(field.into(), FieldRule { kind, options: None });
        self
    }

    /// Declare `field` with its own options
    pub fn field_with(
        mut self,
        field: impl Into<String>,
        kind: FieldKind,
        options: RuleOptions,
    ) -> Self {
        self.fields.insert(
            field.into(),
            FieldRule {
                kind,
                options: Some(options),
            },
        );
        self
    }

    /// Rule declared for `field`
    pub fn kind_of(&self, field: &str) -> Option<FieldKind> {
        self.fields.get(field).map(|rule| rule.kind)
    }

    /// Declared field names, sorted
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn validate(&self, data: &HashMap<String, String>, locale: Locale) -> FormReport {
        self.validate_with_defaults(data, locale, &RuleOptions::default())
    }

    /// Validate using `defaults` for fields declared without their own options.
    /// Missing fields are validated as empty strings; undeclared fields are ignored.
    pub fn validate_with_defaults(
        &self,
        data: &HashMap<String, String>,
        locale: Locale,
        defaults: &RuleOptions,
    ) -> FormReport {
        let outcomes = self
            .fields
            .iter()
            .map(|(field, rule)| {
                let value = data.get(field).map(String::as_str).unwrap_or_default();
                let options = rule.options.as_ref().unwrap_or(defaults);
                (field.clone(), validate_with(rule.kind, value, locale, options))
            })
            .collect();

        FormReport { outcomes }
    }
}

/// Per-field outcomes of one form validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormReport {
    outcomes: BTreeMap<String, ValidationOutcome>,
}

impl FormReport {
    /// True when every declared field passed
    pub fn is_valid(&self) -> bool {
        self.outcomes.values().all(ValidationOutcome::is_valid)
    }

    pub fn outcome(&self, field: &str) -> Option<&ValidationOutcome> {
        self.outcomes.get(field)
    }

    /// Message to display next to `field`, if it failed
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.outcomes.get(field).and_then(ValidationOutcome::error)
    }

    /// Failed fields and their messages, sorted by field name
    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.outcomes
            .iter()
            .filter_map(|(field, outcome)| outcome.error().map(|error| (field.as_str(), error)))
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Number of fields validated
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Convert to a JSON-serializable format for API responses
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_valid(),
            "fields": self.outcomes,
        })
    }
}
