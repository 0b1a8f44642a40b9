use super::CommandOutput;
use muhandis_validation::{format_saudi_national_id, format_saudi_phone};

pub fn phone(value: &str) -> CommandOutput {
    CommandOutput::success(format_saudi_phone(value))
}

pub fn national_id(value: &str) -> CommandOutput {
    CommandOutput::success(format_saudi_national_id(value))
}
