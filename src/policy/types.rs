// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit type vocabulary.

use serde::{Deserialize, Serialize};

/// Commit type tag allowed by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Build,
    Chore,
    Ci,
    Docs,
    Feat,
    Fix,
    Perf,
    Refactor,
    Revert,
    Style,
    Test,
    Example,
    Oep,
}

impl CommitType {
    /// Get the string representation of the commit type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Build => "build",
            CommitType::Chore => "chore",
            CommitType::Ci => "ci",
            CommitType::Docs => "docs",
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Perf => "perf",
            CommitType::Refactor => "refactor",
            CommitType::Revert => "revert",
            CommitType::Style => "style",
            CommitType::Test => "test",
            CommitType::Example => "example",
            CommitType::Oep => "oep",
        }
    }

    /// Get a description of the commit type.
    pub fn description(&self) -> &'static str {
        match self {
            CommitType::Build => "Build system or dependency changes",
            CommitType::Chore => "Build process or auxiliary tool changes",
            CommitType::Ci => "CI configuration changes",
            CommitType::Docs => "Documentation only changes",
            CommitType::Feat => "A new feature",
            CommitType::Fix => "A bug fix",
            CommitType::Perf => "Performance improvements",
            CommitType::Refactor => "Code refactoring (no feature/fix)",
            CommitType::Revert => "Reverting a previous commit",
            CommitType::Style => "Code style changes (formatting, whitespace)",
            CommitType::Test => "Adding or updating tests",
            CommitType::Example => "Example code changes",
            CommitType::Oep => "An enhancement proposal",
        }
    }

    /// Get all commit types.
    pub fn all() -> &'static [CommitType] {
        &[
            CommitType::Build,
            CommitType::Chore,
            CommitType::Ci,
            CommitType::Docs,
            CommitType::Feat,
            CommitType::Fix,
            CommitType::Perf,
            CommitType::Refactor,
            CommitType::Revert,
            CommitType::Style,
            CommitType::Test,
            CommitType::Example,
            CommitType::Oep,
        ]
    }
}

impl std::str::FromStr for CommitType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "build" => Ok(CommitType::Build),
            "chore" => Ok(CommitType::Chore),
            "ci" => Ok(CommitType::Ci),
            "docs" => Ok(CommitType::Docs),
            "feat" => Ok(CommitType::Feat),
            "fix" => Ok(CommitType::Fix),
            "perf" => Ok(CommitType::Perf),
            "refactor" => Ok(CommitType::Refactor),
            "revert" => Ok(CommitType::Revert),
            "style" => Ok(CommitType::Style),
            "test" => Ok(CommitType::Test),
            "example" => Ok(CommitType::Example),
            "oep" => Ok(CommitType::Oep),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
