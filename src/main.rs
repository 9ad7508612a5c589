use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use savesmart::cli::{
    handle_expense_command, handle_export_command, handle_goal_command, handle_income_command,
    handle_status_command, ExpenseCommands, ExportFormatArg, GoalCommands, IncomeCommands,
};
use savesmart::config::{SaveSmartPaths, Settings};
use savesmart::onboarding::OnboardingWizard;
use savesmart::storage::DraftStore;

#[derive(Parser)]
#[command(
    name = "savesmart",
    version,
    about = "Plan your income, expenses and savings goals",
    long_about = "SaveSmart walks you through describing your income sources, \
                  the expenses you track and what you are saving for, and \
                  shows how complete your plan is as you go."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through onboarding interactively
    Onboard,

    /// Show the current plan and how complete it is
    Status,

    /// Income source commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expense category commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Export the plan
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormatArg,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete the saved plan
    Reset {
        /// Skip the confirmation notice
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SaveSmartPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    savesmart::telemetry::init(&settings)?;

    let store = DraftStore::new(paths.draft_file());

    match cli.command {
        Some(Commands::Onboard) => {
            let draft = store.load()?;
            let stdin = io::stdin();
            let mut wizard = OnboardingWizard::new(stdin.lock(), io::stdout(), settings.clone());
            let outcome = wizard.run(draft)?;
            if outcome.completed {
                let mut state = outcome.state;
                store.save(&mut state)?;
                if !paths.settings_file().exists() {
                    settings.save(&paths)?;
                }
            }
        }
        Some(Commands::Status) => handle_status_command(&store, &settings)?,
        Some(Commands::Income(cmd)) => handle_income_command(&store, &settings, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&store, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&store, &settings, cmd)?,
        Some(Commands::Export { format, output }) => {
            handle_export_command(&store, format, output)?
        }
        Some(Commands::Reset { yes }) => {
            if !yes {
                println!(
                    "This deletes your saved plan at {}.",
                    store.path().display()
                );
                println!("Re-run with --yes to confirm.");
            } else if store.clear()? {
                println!("Saved plan deleted.");
            } else {
                println!("No saved plan to delete.");
            }
        }
        Some(Commands::Config) => {
            println!("SaveSmart Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Draft file:     {}", paths.draft_file().display());
            println!();
            println!("Settings:");
            println!("  Show validation: {}", settings.show_validation);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Log level:       {}", settings.log_level);
        }
        None => {
            println!("SaveSmart - plan your income, expenses and savings goals");
            println!();
            println!("Run 'savesmart --help' for usage information.");
            println!("Run 'savesmart onboard' to get started.");
        }
    }

    Ok(())
}
