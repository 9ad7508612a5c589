//! Line-oriented prompting over any reader/writer pair

use std::io::{BufRead, Write};

use crate::error::{SaveSmartError, SaveSmartResult};
use crate::message::ValidationMessage;

/// Asks questions and prints feedback for the onboarding steps
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line
    pub fn say(&mut self, text: impl AsRef<str>) -> SaveSmartResult<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Print an empty line
    pub fn blank(&mut self) -> SaveSmartResult<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Prompt and read one trimmed line
    pub fn ask(&mut self, prompt: &str) -> SaveSmartResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(SaveSmartError::Io(
                "Input ended before onboarding finished".into(),
            ));
        }

        Ok(line.trim().to_string())
    }

    /// Yes/no question; a blank answer takes the default
    pub fn confirm(&mut self, prompt: &str, default: bool) -> SaveSmartResult<bool> {
        let answer = self.ask(prompt)?.to_lowercase();
        Ok(match answer.as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        })
    }

    /// Print a validation message region, or a generic retry hint when
    /// the message is hidden. Returns whether anything specific was shown.
    pub fn alert(&mut self, message: &ValidationMessage) -> SaveSmartResult<bool> {
        match message.render() {
            Some(region) => {
                for line in region.to_string().lines() {
                    writeln!(self.output, "  ! {}", line)?;
                }
                Ok(true)
            }
            None => {
                writeln!(self.output, "  ! Please enter a valid value.")?;
                Ok(false)
            }
        }
    }

    /// Give back the writer (used by tests to inspect output)
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_trims() {
        let mut p = prompter("  Salary  \n");
        assert_eq!(p.ask("Name: ").unwrap(), "Salary");
        assert_eq!(String::from_utf8(p.into_output()).unwrap(), "Name: ");
    }

    #[test]
    fn test_ask_at_eof_is_error() {
        let mut p = prompter("");
        assert!(matches!(p.ask("Name: "), Err(SaveSmartError::Io(_))));
    }

    #[test]
    fn test_confirm_default() {
        let mut p = prompter("\nno\nY\n");
        assert!(p.confirm("? ", true).unwrap());
        assert!(!p.confirm("? ", true).unwrap());
        assert!(p.confirm("? ", false).unwrap());
    }

    #[test]
    fn test_alert_visible_and_hidden() {
        let mut p = prompter("");
        let shown = p
            .alert(&ValidationMessage::new("x").message("Name is required"))
            .unwrap();
        assert!(shown);
        let shown = p
            .alert(&ValidationMessage::new("x").message("Name is required").visible(false))
            .unwrap();
        assert!(!shown);

        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(
            out,
            "  ! Name is required\n  ! Please enter a valid value.\n"
        );
    }
}
