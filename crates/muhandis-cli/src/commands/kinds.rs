use super::CommandOutput;
use muhandis_validation::FieldKind;

pub fn run() -> CommandOutput {
    let kinds: Vec<&str> = FieldKind::ALL.iter().map(FieldKind::as_str).collect();
    CommandOutput::success(kinds.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_kind() {
        let output = run();
        assert!(output.success);
        assert_eq!(output.text.lines().count(), FieldKind::ALL.len());
        assert!(output.text.lines().any(|line| line == "saudi_national_id"));
    }
}
