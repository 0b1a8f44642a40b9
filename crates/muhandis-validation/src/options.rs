//! Rule parameters with documented defaults

use crate::error::ContractError;
use chrono::NaiveDate;

pub const DEFAULT_NAME_MIN_LENGTH: usize = 2;
pub const DEFAULT_SMS_CODE_LENGTH: usize = 4;
pub const DEFAULT_MIN_AGE: u32 = 18;
pub const MAX_MIN_AGE: u32 = 150;

/// Rule-specific parameters. Each rule reads only the fields it cares about.
///
/// Built through [`RuleOptions::builder`], which rejects malformed values,
/// so a `RuleOptions` in hand is always usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOptions {
    field_name: Option<String>,
    min_length: usize,
    expected_length: usize,
    min_age: u32,
    reference_date: Option<NaiveDate>,
}

impl RuleOptions {
    pub fn builder() -> RuleOptionsBuilder {
        RuleOptionsBuilder::default()
    }

    /// Label prefixed to the "required" message, if any
    pub fn field_name(&self) -> Option<&str> {
        self.field_name.as_deref()
    }

    /// Minimum trimmed length for NAME (default 2)
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Exact length for SMS_CODE (default 4)
    pub fn expected_length(&self) -> usize {
        self.expected_length
    }

    /// Minimum age in whole years for AGE (default 18)
    pub fn min_age(&self) -> u32 {
        self.min_age
    }

    /// Date ages are computed against. `None` means today in local time.
    pub fn reference_date(&self) -> Option<NaiveDate> {
        self.reference_date
    }

    /// Copy of these options labelled with `field_name`
    pub fn with_field_name(&self, field_name: impl Into<String>) -> Self {
        Self {
            field_name: Some(field_name.into()),
            ..self.clone()
        }
    }
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            field_name: None,
            min_length: DEFAULT_NAME_MIN_LENGTH,
            expected_length: DEFAULT_SMS_CODE_LENGTH,
            min_age: DEFAULT_MIN_AGE,
            reference_date: None,
        }
    }
}

/// Builder for [`RuleOptions`]
#[derive(Debug, Clone, Default)]
pub struct RuleOptionsBuilder {
    field_name: Option<String>,
    min_length: Option<usize>,
    expected_length: Option<usize>,
    min_age: Option<u32>,
    reference_date: Option<NaiveDate>,
}

impl RuleOptionsBuilder {
    pub fn field_name(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = Some(field_name.into());
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn expected_length(mut self, expected_length: usize) -> Self {
        self.expected_length = Some(expected_length);
        self
    }

    pub fn min_age(mut self, min_age: u32) -> Self {
        self.min_age = Some(min_age);
        self
    }

    pub fn reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Validate the parameters and build the options
    pub fn build(self) -> Result<RuleOptions, ContractError> {
        let defaults = RuleOptions::default();

        let min_length = self.min_length.unwrap_or(defaults.min_length);
        if min_length == 0 {
            return Err(ContractError::invalid_option(
                "min_length",
                min_length,
                "a length of at least 1",
            ));
        }

        let expected_length = self.expected_length.unwrap_or(defaults.expected_length);
        if expected_length == 0 {
            return Err(ContractError::invalid_option(
                "expected_length",
                expected_length,
                "a code length of at least 1",
            ));
        }

        let min_age = self.min_age.unwrap_or(defaults.min_age);
        if min_age > MAX_MIN_AGE {
            return Err(ContractError::invalid_option(
                "min_age",
                min_age,
                "an age between 0 and 150",
            ));
        }

        if matches!(self.field_name.as_deref(), Some(name) if name.trim().is_empty()) {
            return Err(ContractError::invalid_option(
                "field_name",
                "",
                "a non-empty label",
            ));
        }

        Ok(RuleOptions {
            field_name: self.field_name,
            min_length,
            expected_length,
            min_age,
            reference_date: self.reference_date,
        })
    }
}
