//! Strongly-typed ID wrappers for onboarding records
//!
//! Records get their ids from the form controller when they are first
//! saved. Newtypes keep income source and goal ids from being mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Check whether a user-supplied reference is this id.
            ///
            /// Accepts the full UUID (with or without the display prefix)
            /// or the short display form. Partial prefixes never match.
            pub fn matches(&self, reference: &str) -> bool {
                let reference = reference.trim().to_lowercase();
                if reference == self.to_string() {
                    return true;
                }
                let stripped = reference.strip_prefix($display_prefix).unwrap_or(reference.as_str());
                Uuid::parse_str(stripped).is_ok_and(|uuid| uuid == self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(IncomeSourceId, "inc-");
define_id!(GoalId, "goal-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = IncomeSourceId::new();
        let display = id.to_string();
        assert!(display.starts_with("inc-"));
        assert_eq!(display.len(), 12);

        let goal = GoalId::new();
        assert!(goal.to_string().starts_with("goal-"));
    }

    #[test]
    fn test_matches_full_and_display_forms_only() {
        let id = IncomeSourceId::new();
        let uuid = id.as_uuid().to_string();
        assert!(id.matches(&id.to_string()));
        assert!(id.matches(&id.to_string().to_uppercase()));
        assert!(id.matches(&uuid));
        assert!(id.matches(&format!("inc-{}", uuid)));
        assert!(!id.matches(&uuid[..4]));
        assert!(!id.matches(&uuid[..1]));
        assert!(!id.matches(&id.to_string()[..6]));
        assert!(!id.matches(""));
        assert!(!id.matches("inc-"));
    }

    #[test]
    fn test_from_str_with_prefix() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: GoalId = format!("goal-{}", uuid_str).parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
    }

    #[test]
    fn test_id_serialization() {
        let id = GoalId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: GoalId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
