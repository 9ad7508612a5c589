//! Income CLI commands
//!
//! Edits the draft's income sources. Every edit goes through an
//! `IncomeSourceInput`, so the CLI rejects exactly what the form would flag.

use clap::Subcommand;
use tracing::info;

use super::{ensure_removable, print_progress, reject_invalid_income};
use crate::binding::IncomeSourceInput;
use crate::config::Settings;
use crate::display::format_income_list;
use crate::error::{SaveSmartError, SaveSmartResult};
use crate::models::{FormState, Frequency, IncomeSource, IncomeSourceId};
use crate::storage::DraftStore;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Add an income source
    Add {
        /// Name of the income source (e.g., "Salary")
        name: String,

        /// Amount per payment (e.g., "2500" or "2500.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Payment frequency: weekly, bi-weekly, monthly or annual
        #[arg(short, long, default_value = "monthly")]
        frequency: Frequency,
    },

    /// Change fields of an existing income source
    Update {
        /// Income source name or ID
        source: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New amount per payment
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,

        /// New payment frequency
        #[arg(short, long)]
        frequency: Option<Frequency>,
    },

    /// Remove an income source
    Remove {
        /// Income source name or ID
        source: String,
    },

    /// List income sources
    List,
}

/// Reject a name already used by another income source
fn ensure_unique_name(
    state: &FormState,
    name: &str,
    editing: Option<usize>,
) -> SaveSmartResult<()> {
    let taken = state
        .income
        .sources
        .iter()
        .enumerate()
        .any(|(i, s)| Some(i) != editing && s.has_name(name));

    if taken {
        return Err(SaveSmartError::Duplicate {
            entity_type: "Income source",
            identifier: name.trim().to_string(),
        });
    }
    Ok(())
}

/// Handle an income command
pub fn handle_income_command(
    store: &DraftStore,
    settings: &Settings,
    cmd: IncomeCommands,
) -> SaveSmartResult<()> {
    let mut state = store.load()?;

    match cmd {
        IncomeCommands::Add {
            name,
            amount,
            frequency,
        } => {
            let mut input = IncomeSourceInput::new(None).show_validation(true);
            input.set_name(name);
            input.set_amount(amount);
            let update = input.set_frequency(frequency);
            reject_invalid_income(&input)?;

            ensure_unique_name(&state, &update.name, None)?;

            let mut source = IncomeSource {
                id: Some(IncomeSourceId::new()),
                ..IncomeSource::default()
            };
            update.apply_to(&mut source);

            let id = source.id.map(|id| id.to_string()).unwrap_or_default();
            println!(
                "Added income source '{}' ({}): {} {}",
                source.name,
                id,
                settings.format_amount(source.amount.unwrap_or_default()),
                source.frequency
            );
            info!(income_source = %id, "added income source");

            state.income.sources.push(source);
            store.save(&mut state)?;
            print_progress(&state);
        }

        IncomeCommands::Update {
            source,
            name,
            amount,
            frequency,
        } => {
            if name.is_none() && amount.is_none() && frequency.is_none() {
                return Err(SaveSmartError::Validation(
                    "Nothing to update. Pass --name, --amount or --frequency".into(),
                ));
            }

            let index = state
                .find_income_source(&source)
                .ok_or_else(|| SaveSmartError::income_source_not_found(&source))?;

            let mut input =
                IncomeSourceInput::new(Some(&state.income.sources[index])).show_validation(true);
            if let Some(name) = name {
                input.set_name(name);
            }
            if let Some(amount) = amount {
                input.set_amount(amount);
            }
            if let Some(frequency) = frequency {
                input.set_frequency(frequency);
            }
            reject_invalid_income(&input)?;
            ensure_unique_name(&state, input.name(), Some(index))?;

            let record = &mut state.income.sources[index];
            input.current_update().apply_to(record);
            println!(
                "Updated income source '{}': {} {}",
                record.name,
                settings.format_amount(record.amount.unwrap_or_default()),
                record.frequency
            );

            store.save(&mut state)?;
            print_progress(&state);
        }

        IncomeCommands::Remove { source } => {
            let index = state
                .find_income_source(&source)
                .ok_or_else(|| SaveSmartError::income_source_not_found(&source))?;

            ensure_removable(&state)?;

            let removed = state.income.sources.remove(index);
            println!("Removed income source '{}'", removed.name);

            store.save(&mut state)?;
            print_progress(&state);
        }

        IncomeCommands::List => {
            println!("{}", format_income_list(&state.income.sources, settings));
        }
    }

    Ok(())
}
