//! Supported message locales

use crate::error::ContractError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language used to render validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    #[serde(rename = "en")]
    English,
    #[default]
    #[serde(rename = "ar")]
    Arabic,
}

impl Locale {
    /// Every supported locale
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Arabic];

    /// Two-letter language code
    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Arabic => "ar",
        }
    }

    /// Whether text in this locale is laid out right-to-left
    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::Arabic)
    }
}

impl FromStr for Locale {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "ar" | "arabic" => Ok(Locale::Arabic),
            _ => Err(ContractError::unknown_locale(s)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!("English".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!("AR".parse::<Locale>().unwrap(), Locale::Arabic);
        assert_eq!(" arabic ".parse::<Locale>().unwrap(), Locale::Arabic);
    }

    #[test]
    fn test_parse_unknown_locale() {
        let error = "fr".parse::<Locale>().unwrap_err();
        assert_eq!(error, ContractError::unknown_locale("fr"));
    }

    #[test]
    fn test_locale_properties() {
        assert!(Locale::Arabic.is_rtl());
        assert!(!Locale::English.is_rtl());
        assert_eq!(Locale::default(), Locale::Arabic);
        assert_eq!(Locale::English.to_string(), "en");
        assert_eq!(serde_json::to_string(&Locale::Arabic).unwrap(), "\"ar\"");
    }
}
