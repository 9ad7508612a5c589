//! Validation rules keyed by field
//!
//! Each rule is a pure check over one field value. Rules are looked up by
//! their string key (`income.amount`); unknown keys are a configuration
//! error rather than a silent pass.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{SaveSmartError, SaveSmartResult};

/// The two ways a field can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Required text is blank after trimming
    EmptyField,
    /// Amount is missing, zero or negative
    NonPositiveAmount,
}

/// A failed check together with the message shown next to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub message: &'static str,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

/// Outcome of running one rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<ValidationError>,
}

impl ValidationResult {
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub const fn invalid(kind: ValidationErrorKind, message: &'static str) -> Self {
        Self {
            is_valid: false,
            error: Some(ValidationError { kind, message }),
        }
    }

    /// The failure kind, if any
    pub fn kind(&self) -> Option<ValidationErrorKind> {
        self.error.map(|e| e.kind)
    }

    /// The failure message, if any
    pub fn message(&self) -> Option<&'static str> {
        self.error.map(|e| e.message)
    }

    /// Turn a failure into a `SaveSmartError::Validation`
    pub fn into_result(self) -> SaveSmartResult<()> {
        match self.error {
            Some(err) => Err(SaveSmartError::Validation(err.message.to_string())),
            None => Ok(()),
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

/// A raw field value handed to a rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Option<f64>> for FieldValue<'_> {
    fn from(value: Option<f64>) -> Self {
        Self::Number(value.unwrap_or(f64::NAN))
    }
}

/// Every rule the engine knows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKey {
    IncomeName,
    IncomeAmount,
    GoalDescription,
    GoalTargetAmount,
    ExpenseCustomCategory,
}

impl RuleKey {
    pub const ALL: [RuleKey; 5] = [
        RuleKey::IncomeName,
        RuleKey::IncomeAmount,
        RuleKey::GoalDescription,
        RuleKey::GoalTargetAmount,
        RuleKey::ExpenseCustomCategory,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IncomeName => "income.name",
            Self::IncomeAmount => "income.amount",
            Self::GoalDescription => "goal.description",
            Self::GoalTargetAmount => "goal.targetAmount",
            Self::ExpenseCustomCategory => "expenses.customCategory",
        }
    }

    const fn is_numeric(self) -> bool {
        matches!(self, Self::IncomeAmount | Self::GoalTargetAmount)
    }

    /// Run this rule against a value of the matching shape
    pub fn validate<'a>(self, value: impl Into<FieldValue<'a>>) -> SaveSmartResult<ValidationResult> {
        match (value.into(), self.is_numeric()) {
            (FieldValue::Text(text), false) => Ok(self.check_text(text)),
            (FieldValue::Number(number), true) => Ok(self.check_number(number)),
            (_, true) => Err(SaveSmartError::RuleValueMismatch {
                rule: self.as_str(),
                expected: "numeric",
            }),
            (_, false) => Err(SaveSmartError::RuleValueMismatch {
                rule: self.as_str(),
                expected: "text",
            }),
        }
    }

    fn check_text(self, text: &str) -> ValidationResult {
        if !text.trim().is_empty() {
            return ValidationResult::valid();
        }
        let message = match self {
            Self::IncomeName => "Income source name is required",
            Self::GoalDescription => "Goal description is required",
            _ => "Category name is required",
        };
        ValidationResult::invalid(ValidationErrorKind::EmptyField, message)
    }

    fn check_number(self, number: f64) -> ValidationResult {
        // NaN compares false, so it falls through to the failure branch
        if number > 0.0 {
            return ValidationResult::valid();
        }
        let message = match self {
            Self::GoalTargetAmount => "Target amount must be greater than zero",
            _ => "Amount must be greater than zero",
        };
        ValidationResult::invalid(ValidationErrorKind::NonPositiveAmount, message)
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKey {
    type Err = SaveSmartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| SaveSmartError::UnknownRule(s.to_string()))
    }
}

/// Validate a value against the rule named by `rule_key`
pub fn validate<'a>(rule_key: &str, value: impl Into<FieldValue<'a>>) -> SaveSmartResult<ValidationResult> {
    rule_key.parse::<RuleKey>()?.validate(value)
}

/// `income.name` on a text value
pub fn validate_income_name(name: &str) -> ValidationResult {
    RuleKey::IncomeName.check_text(name)
}

/// `income.amount` on a parsed number
pub fn validate_income_amount(amount: f64) -> ValidationResult {
    RuleKey::IncomeAmount.check_number(amount)
}

/// `goal.description` on a text value
pub fn validate_goal_description(description: &str) -> ValidationResult {
    RuleKey::GoalDescription.check_text(description)
}

/// `goal.targetAmount` on a parsed number
pub fn validate_goal_target(target: f64) -> ValidationResult {
    RuleKey::GoalTargetAmount.check_number(target)
}

/// `expenses.customCategory` on a text value
pub fn validate_custom_category(name: &str) -> ValidationResult {
    RuleKey::ExpenseCustomCategory.check_text(name)
}
