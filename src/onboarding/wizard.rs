//! Onboarding wizard orchestration
//!
//! Coordinates the multi-step onboarding flow and reports progress after
//! every step.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::completion::CompletionReport;
use crate::config::Settings;
use crate::display::{format_checklist, format_summary, ProgressIndicator};
use crate::error::SaveSmartResult;
use crate::models::FormState;

use super::prompt::Prompter;
use super::steps::{ExpensesSetupStep, GoalsSetupStep, IncomeSetupStep};

/// Result of running the onboarding wizard
#[derive(Debug, Clone)]
pub struct OnboardingOutcome {
    /// Whether the user confirmed the final summary
    pub completed: bool,
    /// The form as it stood when the wizard ended
    pub state: FormState,
}

/// The onboarding wizard
pub struct OnboardingWizard<R, W> {
    prompter: Prompter<R, W>,
    settings: Settings,
}

impl<R: BufRead, W: Write> OnboardingWizard<R, W> {
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            settings,
        }
    }

    /// Walk through every step, starting from an existing draft
    pub fn run(&mut self, initial: FormState) -> SaveSmartResult<OnboardingOutcome> {
        let p = &mut self.prompter;
        p.blank()?;
        p.say("===========================================")?;
        p.say("  Welcome to SaveSmart!")?;
        p.say("===========================================")?;
        p.blank()?;
        p.say("We'll set up your income, expenses and savings goals.")?;
        p.say("Press Ctrl+C at any time to cancel.")?;
        p.blank()?;

        if !p.confirm("Ready to begin? (yes/no) [yes]: ", true)? {
            p.say("Onboarding cancelled.")?;
            return Ok(OnboardingOutcome {
                completed: false,
                state: initial,
            });
        }

        let mut state = initial;

        IncomeSetupStep::run(&mut self.prompter, &mut state, &self.settings)?;
        self.show_progress(&state)?;

        ExpensesSetupStep::run(&mut self.prompter, &mut state)?;
        self.show_progress(&state)?;

        GoalsSetupStep::run(&mut self.prompter, &mut state, &self.settings)?;
        self.show_progress(&state)?;

        let p = &mut self.prompter;
        p.blank()?;
        p.say("===========================================")?;
        p.say("  Summary")?;
        p.say("===========================================")?;
        p.blank()?;
        p.say(format_summary(&state, &self.settings))?;

        let completed = p.confirm("Save this plan? (yes/no) [yes]: ", true)?;
        if completed {
            p.blank()?;
            p.say("Onboarding complete!")?;
            p.say("Run 'savesmart status' at any time to review your plan.")?;
        } else {
            p.say("Plan not saved.")?;
        }

        Ok(OnboardingOutcome { completed, state })
    }

    fn show_progress(&mut self, state: &FormState) -> SaveSmartResult<()> {
        let report = CompletionReport::from_state(state);
        debug!(percentage = report.percentage(), "onboarding progress");

        self.prompter.blank()?;
        self.prompter.say(format!(
            "Progress: {}",
            ProgressIndicator::from_report(&report).render_text()
        ))?;
        if !report.is_complete() {
            self.prompter.say(format_checklist(&report))?;
        }
        Ok(())
    }

    /// Give back the writer (used by tests to inspect output)
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::calculate_completion_percentage;
    use std::io::Cursor;

    fn wizard(input: &str) -> OnboardingWizard<Cursor<Vec<u8>>, Vec<u8>> {
        OnboardingWizard::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            Settings::default(),
        )
    }

    #[test]
    fn test_full_run() {
        let script = [
            "",               // ready
            "Salary",         // income name
            "3500",           // amount
            "monthly",        // frequency
            "no",             // another income
            "1,3",            // default categories
            "",               // custom categories
            "Emergency fund", // goal
            "10000",          // target
            "no",             // another goal
            "yes",            // save
        ]
        .join("\n")
            + "\n";

        let mut wizard = wizard(&script);
        let outcome = wizard.run(FormState::default()).unwrap();
        let output = String::from_utf8(wizard.into_output()).unwrap();

        assert!(outcome.completed);
        assert_eq!(calculate_completion_percentage(&outcome.state), 100);
        assert!(output.contains("Progress: [##########--------------------]  33%"));
        assert!(output.contains(" 67%"));
        assert!(output.contains("100%"));
        assert!(output.contains("Estimated annual income: $42000.00"));
        assert!(output.contains("Onboarding complete!"));
    }

    #[test]
    fn test_cancel_at_start_keeps_initial_state() {
        let mut initial = FormState::default();
        initial.goals.push(crate::models::Goal::new("Car", 100.0));

        let mut wizard = wizard("no\n");
        let outcome = wizard.run(initial.clone()).unwrap();
        assert!(!outcome.completed);
        assert_eq!(outcome.state, initial);
    }

    #[test]
    fn test_declining_summary() {
        let script = "\nSalary\n100\n\nno\n2\n\nTrip\n500\nno\nno\n";
        let mut wizard = wizard(script);
        let outcome = wizard.run(FormState::default()).unwrap();
        assert!(!outcome.completed);
        assert_eq!(outcome.state.income.sources.len(), 1);
    }

    #[test]
    fn test_truncated_input_is_error() {
        let mut wizard = wizard("\nSalary\n");
        assert!(wizard.run(FormState::default()).is_err());
    }
}
