// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Custom rule registration.
//!
//! Rules are registered once at process start and the resulting table
//! is immutable; the lint engine reads it for every commit it lints.

use lazy_static::lazy_static;

use crate::error::{RegistryError, Result};
use crate::policy::Severity;

use super::outcome::RuleOutcome;
use super::review_fixup::ReviewFixup;

/// Trait for custom lint rules.
///
/// Implementations must be pure: the outcome depends only on the
/// subject text, with no side effects, so rules are safe to evaluate
/// from any number of concurrent lint passes.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// The rule name used to bind severity configuration.
    fn name(&self) -> &'static str;

    /// Evaluate the rule against a commit subject line.
    ///
    /// The subject is assumed already extracted and trimmed by the
    /// caller.
    fn evaluate(&self, subject: &str) -> RuleOutcome;
}

/// A rule together with its configured severity.
#[derive(Debug)]
pub struct RegisteredRule {
    severity: Severity,
    rule: Box<dyn Rule>,
}

impl RegisteredRule {
    /// The rule name.
    pub fn name(&self) -> &'static str {
        self.rule.name()
    }

    /// The configured severity.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Evaluate the rule against a commit subject line.
    pub fn evaluate(&self, subject: &str) -> RuleOutcome {
        self.rule.evaluate(subject)
    }
}

/// Registry of custom rules keyed by name.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    entries: Vec<RegisteredRule>,
}

impl RuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding this policy's custom rules.
    pub fn with_defaults() -> Self {
        Self {
            entries: vec![RegisteredRule {
                severity: Severity::Error,
                rule: Box::new(ReviewFixup),
            }],
        }
    }

    /// Register a rule. Names must be unique.
    pub fn register(&mut self, severity: Severity, rule: Box<dyn Rule>) -> Result<()> {
        if self.get(rule.name()).is_some() {
            return Err(RegistryError::DuplicateRule {
                name: rule.name().to_string(),
            }
            .into());
        }

        tracing::debug!("Registered custom rule: {}", rule.name());
        self.entries.push(RegisteredRule { severity, rule });
        Ok(())
    }

    /// Get a rule by name.
    pub fn get(&self, name: &str) -> Option<&RegisteredRule> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Get a rule by name, failing if it is not registered.
    pub fn lookup(&self, name: &str) -> Result<&RegisteredRule> {
        self.get(name).ok_or_else(|| {
            RegistryError::UnknownRule {
                name: name.to_string(),
            }
            .into()
        })
    }

    /// Iterate over the registered rules.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredRule> {
        self.entries.iter()
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

lazy_static! {
    /// Process-wide registry holding this policy's custom rules.
    static ref REGISTRY: RuleRegistry = RuleRegistry::with_defaults();
}

/// Get the process-wide rule registry.
pub fn registry() -> &'static RuleRegistry {
    &REGISTRY
}
