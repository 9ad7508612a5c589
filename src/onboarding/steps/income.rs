//! Income setup step
//!
//! Collects one or more income sources through an `IncomeSourceInput`, so
//! the terminal flow validates exactly like any other form front end.

use std::io::{BufRead, Write};

use crate::binding::IncomeSourceInput;
use crate::config::Settings;
use crate::display::format_income_list;
use crate::error::SaveSmartResult;
use crate::models::{FormState, Frequency, IncomeSource, IncomeSourceId};
use crate::onboarding::prompt::Prompter;

/// Income setup step
pub struct IncomeSetupStep;

impl IncomeSetupStep {
    /// Run the income step, appending sources to the form
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        state: &mut FormState,
        settings: &Settings,
    ) -> SaveSmartResult<()> {
        prompter.blank()?;
        prompter.say("Step 1: Income")?;
        prompter.say("==============")?;
        prompter.blank()?;

        if !state.income.sources.is_empty() {
            prompter.say("You already have these income sources:")?;
            prompter.say(format_income_list(&state.income.sources, settings))?;
            if !prompter.confirm("Keep them? (yes/no) [yes]: ", true)? {
                state.income.sources.clear();
            }
        }

        if state.income.sources.iter().any(IncomeSource::is_complete)
            && !prompter.confirm("Add another income source? (yes/no) [no]: ", false)?
        {
            return Ok(());
        }

        loop {
            let source = Self::prompt_source(prompter, settings)?;
            prompter.say(format!(
                "Added {} ({} {}).",
                source.name,
                settings.format_amount(source.amount.unwrap_or_default()),
                source.frequency
            ))?;
            state.income.sources.push(source);

            if !prompter.confirm("Add another income source? (yes/no) [no]: ", false)? {
                return Ok(());
            }
        }
    }

    fn prompt_source<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        settings: &Settings,
    ) -> SaveSmartResult<IncomeSource> {
        let mut input = IncomeSourceInput::new(None).show_validation(settings.show_validation);

        loop {
            let name = prompter.ask("Income source name (e.g. Salary): ")?;
            input.set_name(name);
            if input.name_result().is_valid {
                break;
            }
            let [name_message, _] = input.messages();
            prompter.alert(&name_message)?;
        }

        loop {
            let amount = prompter.ask("Amount per payment: ")?;
            input.set_amount(amount);
            if input.amount_result().is_valid {
                break;
            }
            let [_, amount_message] = input.messages();
            prompter.alert(&amount_message)?;
        }

        let frequency = loop {
            let answer =
                prompter.ask("How often? (weekly, bi-weekly, monthly, annual) [monthly]: ")?;
            if answer.is_empty() {
                break Frequency::Monthly;
            }
            match answer.parse::<Frequency>() {
                Ok(frequency) => break frequency,
                Err(err) => prompter.say(format!("  ! {}", err))?,
            }
        };

        let update = input.set_frequency(frequency);
        let mut source = IncomeSource {
            id: Some(IncomeSourceId::new()),
            ..IncomeSource::default()
        };
        update.apply_to(&mut source);
        Ok(source)
    }
}
