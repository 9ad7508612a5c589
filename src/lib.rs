//! SaveSmart - onboarding engine for a personal finance planner
//!
//! This library validates and scores the SaveSmart onboarding form: the
//! user's income sources, the expense categories they track and their
//! savings goals.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `validation`: Field rules (`income.name`, `income.amount`, ...)
//! - `binding`: Editable drafts that revalidate and emit partial updates
//! - `completion`: The three-group completion score
//! - `message`: Validation message presentation
//! - `models`: Form records (income sources, expenses, goals)
//! - `storage`: JSON persistence of the onboarding draft
//! - `onboarding`: Interactive terminal wizard
//! - `display`, `export`, `cli`: Terminal output and commands
//! - `config`, `error`, `telemetry`: Paths, settings, errors and logging
//!
//! # Example
//!
//! ```rust
//! use savesmart::binding::IncomeSourceInput;
//! use savesmart::completion::calculate_completion_percentage;
//! use savesmart::models::{FormState, IncomeSource};
//!
//! let mut input = IncomeSourceInput::new(None);
//! input.set_name("Salary");
//! let update = input.set_amount("12.");
//! assert_eq!(update.amount, None);
//!
//! let update = input.set_amount("3200");
//! let mut source = IncomeSource::default();
//! update.apply_to(&mut source);
//!
//! let mut state = FormState::default();
//! state.income.sources.push(source);
//! assert_eq!(calculate_completion_percentage(&state), 33);
//! ```

pub mod binding;
pub mod cli;
pub mod completion;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod message;
pub mod models;
pub mod onboarding;
pub mod storage;
pub mod telemetry;
pub mod validation;

pub use error::{SaveSmartError, SaveSmartResult};
