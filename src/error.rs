//! Custom error types for SaveSmart
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Field validation failures are not errors:
//! they are values carried by `ValidationResult`.

use thiserror::Error;

/// The main error type for SaveSmart operations
#[derive(Error, Debug)]
pub enum SaveSmartError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// User input rejected by a validation rule
    #[error("Validation error: {0}")]
    Validation(String),

    /// A validation rule key that the engine does not know
    #[error("Unknown validation rule: {0}")]
    UnknownRule(String),

    /// A rule was handed a value of the wrong shape
    #[error("Validation rule '{rule}' expects a {expected} value")]
    RuleValueMismatch {
        rule: &'static str,
        expected: &'static str,
    },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Logging setup errors
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

impl SaveSmartError {
    /// Create a "not found" error for income sources
    pub fn income_source_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Income source",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for goals
    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Goal",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expense categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for SaveSmartError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SaveSmartError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for SaveSmart operations
pub type SaveSmartResult<T> = Result<T, SaveSmartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SaveSmartError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = SaveSmartError::income_source_not_found("Salary");
        assert_eq!(err.to_string(), "Income source not found: Salary");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_unknown_rule_error() {
        let err = SaveSmartError::UnknownRule("income.currency".into());
        assert_eq!(err.to_string(), "Unknown validation rule: income.currency");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_rule_value_mismatch_error() {
        let err = SaveSmartError::RuleValueMismatch {
            rule: "income.amount",
            expected: "numeric",
        };
        assert_eq!(
            err.to_string(),
            "Validation rule 'income.amount' expects a numeric value"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SaveSmartError = io_err.into();
        assert!(matches!(err, SaveSmartError::Io(_)));
    }
}
