//! Income source model
//!
//! One recurring income stream entered during onboarding: a name, an amount
//! and how often it is paid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::IncomeSourceId;
use crate::error::SaveSmartError;

/// How often an income source pays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Weekly,
    BiWeekly,
    #[default]
    Monthly,
    Annual,
}

impl Frequency {
    /// All frequencies, in the order they are offered to the user
    pub const ALL: [Frequency; 4] = [
        Frequency::Weekly,
        Frequency::BiWeekly,
        Frequency::Monthly,
        Frequency::Annual,
    ];

    /// Number of payouts per year
    pub const fn annual_multiplier(self) -> u32 {
        match self {
            Self::Weekly => 52,
            Self::BiWeekly => 26,
            Self::Monthly => 12,
            Self::Annual => 1,
        }
    }

    /// The wire spelling of this frequency
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::BiWeekly => "bi-weekly",
            Self::Monthly => "monthly",
            Self::Annual => "annual",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = SaveSmartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "w" => Ok(Self::Weekly),
            "bi-weekly" | "biweekly" | "fortnightly" | "b" => Ok(Self::BiWeekly),
            "monthly" | "m" => Ok(Self::Monthly),
            "annual" | "annually" | "yearly" | "a" => Ok(Self::Annual),
            other => Err(SaveSmartError::Validation(format!(
                "Unknown frequency '{}'. Expected weekly, bi-weekly, monthly or annual",
                other
            ))),
        }
    }
}

/// A single income source in the onboarding form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSource {
    /// Caller-assigned id; `None` until the form controller assigns one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<IncomeSourceId>,
    #[serde(default)]
    pub name: String,
    /// `None` until a parseable number has been entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default)]
    pub frequency: Frequency,
}

impl IncomeSource {
    /// Create an income source with a freshly assigned id
    pub fn new(name: impl Into<String>, amount: f64, frequency: Frequency) -> Self {
        Self {
            id: Some(IncomeSourceId::new()),
            name: name.into(),
            amount: Some(amount),
            frequency,
        }
    }

    /// Name is non-blank and the amount is strictly positive
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && self.amount.is_some_and(|a| a > 0.0)
    }

    /// Yearly total of this source, if an amount is known
    pub fn annual_amount(&self) -> Option<f64> {
        self.amount
            .map(|a| a * f64::from(self.frequency.annual_multiplier()))
    }

    /// Case-insensitive name comparison, ignoring surrounding whitespace
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }

    /// Whether the reference is this source's full or display id
    pub fn has_id(&self, reference: &str) -> bool {
        self.id.is_some_and(|id| id.matches(reference))
    }
}
