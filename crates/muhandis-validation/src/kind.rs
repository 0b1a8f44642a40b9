//! The closed set of validation rules

use crate::error::ContractError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which rule to apply to a field. Each kind maps to exactly one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Required,
    Email,
    SaudiPhone,
    InternationalPhone,
    Password,
    SmsCode,
    SaudiNationalId,
    Iqama,
    Name,
    Age,
}

impl FieldKind {
    pub const ALL: [FieldKind; 10] = [
        FieldKind::Required,
        FieldKind::Email,
        FieldKind::SaudiPhone,
        FieldKind::InternationalPhone,
        FieldKind::Password,
        FieldKind::SmsCode,
        FieldKind::SaudiNationalId,
        FieldKind::Iqama,
        FieldKind::Name,
        FieldKind::Age,
    ];

    /// Stable identifier used by string-keyed callers
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Required => "required",
            FieldKind::Email => "email",
            FieldKind::SaudiPhone => "saudi_phone",
            FieldKind::InternationalPhone => "international_phone",
            FieldKind::Password => "password",
            FieldKind::SmsCode => "sms_code",
            FieldKind::SaudiNationalId => "saudi_national_id",
            FieldKind::Iqama => "iqama",
            FieldKind::Name => "name",
            FieldKind::Age => "age",
        }
    }
}

impl FromStr for FieldKind {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ContractError::unknown_kind(s))
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
