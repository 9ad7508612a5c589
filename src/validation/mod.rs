//! Field validation engine
//!
//! Pure, deterministic checks used by the input bindings and the CLI.
//! A failing check is an ordinary value shown next to the field; it is
//! never raised as an error and never logged.

pub mod number;
pub mod rules;

pub use number::{format_amount, parse_amount, parse_number};
pub use rules::{
    validate, validate_custom_category, validate_goal_description, validate_goal_target,
    validate_income_amount, validate_income_name, FieldValue, RuleKey, ValidationError,
    ValidationErrorKind, ValidationResult,
};
