// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule outcome type.

/// Outcome of evaluating a rule against a commit subject.
///
/// A rejected commit is a `Fail` value, never an error: rules are total
/// functions and the engine decides how to surface the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The rule is satisfied.
    Pass,
    /// The rule rejected the subject, with advice for the author.
    Fail(String),
}

impl RuleOutcome {
    /// Create a failing outcome with the given advice.
    pub fn fail(message: impl Into<String>) -> Self {
        RuleOutcome::Fail(message.into())
    }

    /// Whether the rule passed.
    pub fn is_pass(&self) -> bool {
        matches!(self, RuleOutcome::Pass)
    }

    /// Whether the rule rejected the subject.
    pub fn is_fail(&self) -> bool {
        matches!(self, RuleOutcome::Fail(_))
    }

    /// The advice message, if the rule failed.
    pub fn message(&self) -> Option<&str> {
        match self {
            RuleOutcome::Pass => None,
            RuleOutcome::Fail(message) => Some(message),
        }
    }
}
