// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default policy values.

use super::schema::LintPolicy;

/// Get the default policy.
pub fn default_policy() -> LintPolicy {
    LintPolicy::default()
}

/// TOML snapshot of the default policy.
pub fn example_policy() -> &'static str {
    r#"# Commit policy
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# The engine's built-in ignore patterns are disabled; only the explicit
# merge-commit predicates exempt a message.
default_ignores = false

# Custom rule: reject unsquashed code-review fixup commits.
review_fixup = "error"

[types]
severity = "error"
allowed = ["build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test", "example", "oep"]

[header]
trim = "warning"
max_length = { severity = "warning", limit = 100 }

[subject]
not_empty = "error"
min_length = { severity = "error", limit = 5 }
max_length = { severity = "error", limit = 80 }
case = { severity = "warning", forbidden = ["sentence-case", "start-case", "pascal-case", "upper-case"] }
full_stop = { severity = "error", punctuation = "." }

[body]
leading_blank = "error"
max_line_length = { severity = "error", limit = 100 }

[footer]
leading_blank = "warning"
max_line_length = { severity = "warning", limit = 100 }

[scope]
case = { severity = "error", required = "lower-case" }
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = default_policy();
        assert_eq!(policy.subject.max_length.limit, 80);
        assert!(!policy.default_ignores);
    }

    #[test]
    fn test_example_policy_parseable() {
        let example = example_policy();
        let policy = LintPolicy::from_toml(example).expect("Example policy should parse");
        assert_eq!(policy, LintPolicy::default());
    }
}
