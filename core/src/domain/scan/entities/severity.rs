use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Risk level, ordered `safe < mild < moderate < severe`.
///
/// `Safe` is only ever a verdict; users assign one of the other three.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Safe,
    #[serde(alias = "low")]
    Mild,
    #[serde(alias = "medium")]
    Moderate,
    #[serde(alias = "high")]
    Severe,
}

impl Severity {
    /// Applied to a detected allergen the profile gives no explicit level.
    pub const DEFAULT: Severity = Severity::Moderate;

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Safe => "safe",
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }

    pub fn is_assignable(&self) -> bool {
        *self != Severity::Safe
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::DEFAULT
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "safe" => Ok(Severity::Safe),
            "mild" | "low" => Ok(Severity::Mild),
            "moderate" | "medium" => Ok(Severity::Moderate),
            "severe" | "high" => Ok(Severity::Severe),
            other => Err(CoreError::InvalidSeverity(other.to_string())),
        }
    }
}
