//! Task priority levels and their ranking weights.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority assigned to a task.
///
/// Deserialization is lenient: an unrecognized label degrades to
/// [`Priority::Low`] rather than failing, so a stored record with a stray
/// priority still loads and ranks last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Priority {
    /// Most urgent work.
    High,
    /// Default priority.
    #[default]
    Medium,
    /// Least urgent work, and the fallback for unknown labels.
    Low,
}

impl Priority {
    /// All priorities, highest first.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Returns the display and storage label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Returns the ranking weight: High 3, Medium 2, Low 1.
    #[must_use]
    pub const fn weight(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Parses a priority label, mapping anything unrecognized to `Low`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            _ => Self::Low,
        }
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<&str> for Priority {
    fn from(value: &str) -> Self {
        Self::from_label(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
