// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Policy schema definitions.
//!
//! The policy is a static rule table: every rule's shape (severity plus
//! fixed parameters) is known at compile time, and the whole object is
//! defined once and read-only for the life of the process. The lint
//! engine consumes it either as the typed structs below or flattened
//! into the name-keyed [`RuleEntry`] table.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

use super::severity::Severity;
use super::types::CommitType;

/// The complete linting policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintPolicy {
    /// Whether the engine's built-in ignore patterns apply. This policy
    /// disables them; only the predicates in [`crate::ignore`] exempt a
    /// message.
    pub default_ignores: bool,

    /// Severity of the custom review-fixup rule
    /// ([`crate::rules::ReviewFixup`]).
    pub review_fixup: Severity,

    /// Allowed commit type tags.
    pub types: TypeRules,

    /// Header (first line) constraints.
    pub header: HeaderRules,

    /// Subject constraints.
    pub subject: SubjectRules,

    /// Body constraints.
    pub body: BodyRules,

    /// Footer constraints.
    pub footer: FooterRules,

    /// Scope constraints.
    pub scope: ScopeRules,
}

impl Default for LintPolicy {
    fn default() -> Self {
        Self {
            default_ignores: false,
            review_fixup: Severity::Error,
            types: TypeRules::default(),
            header: HeaderRules::default(),
            subject: SubjectRules::default(),
            body: BodyRules::default(),
            footer: FooterRules::default(),
            scope: ScopeRules::default(),
        }
    }
}

/// Commit type rule configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeRules {
    /// Severity of the type-enum rule.
    pub severity: Severity,

    /// Allowed type tags.
    pub allowed: Vec<CommitType>,
}

impl Default for TypeRules {
    fn default() -> Self {
        Self {
            severity: Severity::Error,
            allowed: CommitType::all().to_vec(),
        }
    }
}

/// Header (first line) rule configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderRules {
    /// The header must carry no leading or trailing whitespace.
    pub trim: Severity,

    /// Maximum header length.
    pub max_length: LimitRule,
}

impl Default for HeaderRules {
    fn default() -> Self {
        Self {
            trim: Severity::Warning,
            max_length: LimitRule {
                severity: Severity::Warning,
                limit: 100,
            },
        }
    }
}

/// Subject rule configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubjectRules {
    /// The subject must not be empty.
    pub not_empty: Severity,

    /// Minimum subject length.
    pub min_length: LimitRule,

    /// Maximum subject length.
    pub max_length: LimitRule,

    /// Cases the subject must not use.
    pub case: ForbiddenCaseRule,

    /// The subject must not end with a full stop.
    pub full_stop: FullStopRule,
}

impl Default for SubjectRules {
    fn default() -> Self {
        Self {
            not_empty: Severity::Error,
            min_length: LimitRule {
                severity: Severity::Error,
                limit: 5,
            },
            max_length: LimitRule {
                severity: Severity::Error,
                limit: 80,
            },
            case: ForbiddenCaseRule {
                severity: Severity::Warning,
                forbidden: vec![
                    TextCase::SentenceCase,
                    TextCase::StartCase,
                    TextCase::PascalCase,
                    TextCase::UpperCase,
                ],
            },
            full_stop: FullStopRule {
                severity: Severity::Error,
                punctuation: '.',
            },
        }
    }
}

/// Body rule configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyRules {
    /// The body must be preceded by a blank line.
    pub leading_blank: Severity,

    /// Maximum body line length.
    pub max_line_length: LimitRule,
}

impl Default for BodyRules {
    fn default() -> Self {
        Self {
            leading_blank: Severity::Error,
            max_line_length: LimitRule {
                severity: Severity::Error,
                limit: 100,
            },
        }
    }
}

/// Footer rule configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterRules {
    /// The footer should be preceded by a blank line.
    pub leading_blank: Severity,

    /// Maximum footer line length.
    pub max_line_length: LimitRule,
}

impl Default for FooterRules {
    fn default() -> Self {
        Self {
            leading_blank: Severity::Warning,
            max_line_length: LimitRule {
                severity: Severity::Warning,
                limit: 100,
            },
        }
    }
}

/// Scope rule configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeRules {
    /// Case the scope must use.
    pub case: RequiredCaseRule,
}

impl Default for ScopeRules {
    fn default() -> Self {
        Self {
            case: RequiredCaseRule {
                severity: Severity::Error,
                required: TextCase::LowerCase,
            },
        }
    }
}

/// A rule with a numeric length limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitRule {
    pub severity: Severity,
    pub limit: usize,
}

/// A rule forbidding trailing punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullStopRule {
    pub severity: Severity,
    pub punctuation: char,
}

/// A case rule listing cases the text must not use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForbiddenCaseRule {
    pub severity: Severity,
    pub forbidden: Vec<TextCase>,
}

/// A case rule requiring one case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredCaseRule {
    pub severity: Severity,
    pub required: TextCase,
}

/// Text case vocabulary used by the case rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextCase {
    LowerCase,
    UpperCase,
    SentenceCase,
    StartCase,
    PascalCase,
}

impl TextCase {
    /// Get the string representation of the case.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextCase::LowerCase => "lower-case",
            TextCase::UpperCase => "upper-case",
            TextCase::SentenceCase => "sentence-case",
            TextCase::StartCase => "start-case",
            TextCase::PascalCase => "pascal-case",
        }
    }
}

/// Whether a rule's parameters state what the message must match
/// (`always`) or must not match (`never`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    Always,
    Never,
}

/// Constraint parameters attached to a rule table entry.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleParams {
    /// No parameters beyond the severity.
    None,
    /// Numeric length limit.
    Limit(usize),
    /// Trailing punctuation character.
    Punctuation(char),
    /// Allowed commit type tags.
    AllowedTypes(Vec<CommitType>),
    /// Cases the text must not use.
    ForbiddenCases(Vec<TextCase>),
    /// Case the text must use.
    RequiredCase(TextCase),
}

/// A single named entry in the flattened rule table.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleEntry {
    /// Rule name as the lint engine knows it.
    pub name: &'static str,
    /// Enforcement level.
    pub severity: Severity,
    /// Match polarity of the parameters.
    pub when: Applicability,
    /// Constraint parameters.
    pub params: RuleParams,
}

impl LintPolicy {
    /// Flatten the policy into the name-keyed rule table read by the
    /// lint engine. The order is fixed.
    pub fn entries(&self) -> Vec<RuleEntry> {
        vec![
            RuleEntry {
                name: "type-enum",
                severity: self.types.severity,
                when: Applicability::Always,
                params: RuleParams::AllowedTypes(self.types.allowed.clone()),
            },
            RuleEntry {
                name: "code-review-rule",
                severity: self.review_fixup,
                when: Applicability::Always,
                params: RuleParams::None,
            },
            RuleEntry {
                name: "header-max-length",
                severity: self.header.max_length.severity,
                when: Applicability::Always,
                params: RuleParams::Limit(self.header.max_length.limit),
            },
            RuleEntry {
                name: "header-trim",
                severity: self.header.trim,
                when: Applicability::Always,
                params: RuleParams::None,
            },
            RuleEntry {
                name: "subject-empty",
                severity: self.subject.not_empty,
                when: Applicability::Never,
                params: RuleParams::None,
            },
            RuleEntry {
                name: "subject-min-length",
                severity: self.subject.min_length.severity,
                when: Applicability::Always,
                params: RuleParams::Limit(self.subject.min_length.limit),
            },
            RuleEntry {
                name: "subject-max-length",
                severity: self.subject.max_length.severity,
                when: Applicability::Always,
                params: RuleParams::Limit(self.subject.max_length.limit),
            },
            RuleEntry {
                name: "subject-case",
                severity: self.subject.case.severity,
                when: Applicability::Never,
                params: RuleParams::ForbiddenCases(self.subject.case.forbidden.clone()),
            },
            RuleEntry {
                name: "subject-full-stop",
                severity: self.subject.full_stop.severity,
                when: Applicability::Never,
                params: RuleParams::Punctuation(self.subject.full_stop.punctuation),
            },
            RuleEntry {
                name: "scope-case",
                severity: self.scope.case.severity,
                when: Applicability::Always,
                params: RuleParams::RequiredCase(self.scope.case.required),
            },
            RuleEntry {
                name: "body-leading-blank",
                severity: self.body.leading_blank,
                when: Applicability::Always,
                params: RuleParams::None,
            },
            RuleEntry {
                name: "body-max-line-length",
                severity: self.body.max_line_length.severity,
                when: Applicability::Always,
                params: RuleParams::Limit(self.body.max_line_length.limit),
            },
            RuleEntry {
                name: "footer-leading-blank",
                severity: self.footer.leading_blank,
                when: Applicability::Always,
                params: RuleParams::None,
            },
            RuleEntry {
                name: "footer-max-line-length",
                severity: self.footer.max_line_length.severity,
                when: Applicability::Always,
                params: RuleParams::Limit(self.footer.max_line_length.limit),
            },
        ]
    }

    /// Look up a single rule entry by name.
    pub fn rule(&self, name: &str) -> Option<RuleEntry> {
        self.entries().into_iter().find(|entry| entry.name == name)
    }

    /// Parse a policy from TOML.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content).map_err(ConfigError::from)?)
    }

    /// Serialize the policy to TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self).map_err(ConfigError::from)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_values() {
        let policy = LintPolicy::default();
        assert!(!policy.default_ignores);
        assert_eq!(policy.review_fixup, Severity::Error);
        assert_eq!(policy.subject.max_length.limit, 80);
        assert_eq!(policy.subject.min_length.limit, 5);
        assert_eq!(policy.types.allowed.len(), 13);
    }

    #[test]
    fn test_severity_asymmetry_preserved() {
        // Header length is a warning while subject length is an error,
        // and body lines are errors while footer lines are warnings.
        // Intentional policy, not a normalization target.
        let policy = LintPolicy::default();
        assert_eq!(policy.header.max_length.severity, Severity::Warning);
        assert_eq!(policy.subject.max_length.severity, Severity::Error);
        assert_eq!(policy.body.max_line_length.severity, Severity::Error);
        assert_eq!(policy.footer.max_line_length.severity, Severity::Warning);
    }

    #[test]
    fn test_rule_table_entries() {
        let policy = LintPolicy::default();
        let entries = policy.entries();
        assert_eq!(entries.len(), 14);

        let type_enum = policy.rule("type-enum").unwrap();
        assert_eq!(type_enum.severity, Severity::Error);
        assert!(matches!(
            type_enum.params,
            RuleParams::AllowedTypes(ref allowed) if allowed.len() == 13
        ));

        let full_stop = policy.rule("subject-full-stop").unwrap();
        assert_eq!(full_stop.when, Applicability::Never);
        assert_eq!(full_stop.params, RuleParams::Punctuation('.'));

        let scope_case = policy.rule("scope-case").unwrap();
        assert_eq!(
            scope_case.params,
            RuleParams::RequiredCase(TextCase::LowerCase)
        );
    }

    #[test]
    fn test_rule_lookup_unknown() {
        let policy = LintPolicy::default();
        assert!(policy.rule("signed-off-by").is_none());
    }

    #[test]
    fn test_subject_case_forbidden_list() {
        let policy = LintPolicy::default();
        let case = policy.rule("subject-case").unwrap();
        assert_eq!(case.severity, Severity::Warning);
        assert_eq!(
            case.params,
            RuleParams::ForbiddenCases(vec![
                TextCase::SentenceCase,
                TextCase::StartCase,
                TextCase::PascalCase,
                TextCase::UpperCase,
            ])
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let policy = LintPolicy::default();
        let toml_str = policy.to_toml().unwrap();
        let parsed = LintPolicy::from_toml(&toml_str).unwrap();
        assert_eq!(parsed, policy);
    }

    #[test]
    fn test_from_toml_partial_overrides() {
        let policy = LintPolicy::from_toml(
            r#"
            [subject.max_length]
            severity = "warning"
            limit = 72
            "#,
        )
        .unwrap();
        assert_eq!(policy.subject.max_length.severity, Severity::Warning);
        assert_eq!(policy.subject.max_length.limit, 72);
        // Unspecified fields keep the policy defaults.
        assert_eq!(policy.subject.min_length.limit, 5);
        assert!(!policy.default_ignores);
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(LintPolicy::from_toml("default_ignores = \"maybe\"").is_err());
    }

    #[test]
    fn test_json_serialization_shape() {
        let policy = LintPolicy::default();
        let json = serde_json::to_value(&policy).unwrap();
        assert_eq!(json["review_fixup"], "error");
        assert_eq!(json["scope"]["case"]["required"], "lower-case");
        assert_eq!(json["types"]["allowed"][0], "build");
        assert_eq!(json["subject"]["full_stop"]["punctuation"], ".");
    }
}
