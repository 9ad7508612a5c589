//! Interactive onboarding
//!
//! A terminal rendition of the onboarding form: income, expense categories
//! and savings goals, with the completion score shown after each step.

pub mod prompt;
pub mod steps;
pub mod wizard;

pub use prompt::Prompter;
pub use wizard::{OnboardingOutcome, OnboardingWizard};
