// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule severity levels.

use serde::{Deserialize, Serialize};

/// Enforcement level of a rule.
///
/// Levels follow the conventional 0/1/2 numbering: `error` blocks the
/// commit, `warning` reports but allows it, `off` disables the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Off,
    Warning,
    Error,
}

impl Severity {
    /// Get the string representation of the severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Get the numeric level (0 = off, 1 = warning, 2 = error).
    pub fn level(&self) -> u8 {
        match self {
            Severity::Off => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }

    /// Whether the rule is enforced at all.
    pub fn is_enforced(&self) -> bool {
        !matches!(self, Severity::Off)
    }

    /// Whether a violation blocks the commit.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl std::str::FromStr for Severity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" | "0" => Ok(Severity::Off),
            "warning" | "warn" | "1" => Ok(Severity::Warning),
            "error" | "2" => Ok(Severity::Error),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_levels() {
        assert_eq!(Severity::Off.level(), 0);
        assert_eq!(Severity::Warning.level(), 1);
        assert_eq!(Severity::Error.level(), 2);
    }

    #[test]
    fn test_severity_enforcement() {
        assert!(!Severity::Off.is_enforced());
        assert!(Severity::Warning.is_enforced());
        assert!(!Severity::Warning.is_blocking());
        assert!(Severity::Error.is_blocking());
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!("error".parse::<Severity>(), Ok(Severity::Error));
        assert_eq!("WARNING".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("0".parse::<Severity>(), Ok(Severity::Off));
        assert!("loud".parse::<Severity>().is_err());
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Error.to_string(), "error");
    }
}
