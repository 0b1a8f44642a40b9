//! # muhandis-validation
//!
//! Field validation for the Muhandis engineering-services app.
//! Every rule is a pure function from a raw string to a localized
//! [`ValidationOutcome`]; user-input failures are data, never errors.

pub mod config;
pub mod engine;
pub mod error;
pub mod form;
pub mod kind;
pub mod locale;
pub mod messages;
pub mod options;
pub mod outcome;
pub mod rules;

// Re-exports for easy access
pub use config::{ConfigSource, ValidationConfig};
pub use engine::{validate, validate_named, validate_with, ValidationEngine};
pub use error::{ConfigError, ContractError};
pub use form::{FormReport, FormRules};
pub use kind::FieldKind;
pub use locale::Locale;
pub use messages::FailureReason;
pub use options::{RuleOptions, RuleOptionsBuilder};
pub use outcome::ValidationOutcome;
pub use rules::identity::{format_saudi_national_id, national_id_check_digit};
pub use rules::phone::format_saudi_phone;
