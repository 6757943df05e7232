use std::io::{self, Write};

use crate::error::Result;

/// Operator confirmation capability. Injectable so flows stay testable and
/// scriptable without a real console.
pub trait Confirmation {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Blocking y/n prompt on the controlling terminal.
pub struct ConsoleConfirmation;

impl Confirmation for ConsoleConfirmation {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        print!("{prompt} (y/n): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().to_lowercase() == "y")
    }
}

/// Pre-supplied answer for `--yes`/`--no` runs and for tests.
pub struct PresetAnswer(pub bool);

impl Confirmation for PresetAnswer {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_answer_returns_its_value() {
        assert!(PresetAnswer(true).confirm("create?").expect("confirm"));
        assert!(!PresetAnswer(false).confirm("create?").expect("confirm"));
    }
}
