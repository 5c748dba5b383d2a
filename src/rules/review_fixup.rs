// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Custom rule rejecting unsquashed code-review fixup commits.

use super::outcome::RuleOutcome;
use super::registry::Rule;

/// Subject substrings that mark a commit as a review fixup.
///
/// Matched literally and case-sensitively, first match wins. The
/// advice is the same whichever marker hits.
const REVIEW_FIXUP_MARKERS: [&str; 4] = [
    "code-review",
    "review comment",
    "address comment",
    "addressed comment",
];

/// Advice returned when a review-fixup subject is rejected.
const REVIEW_FIXUP_ADVICE: &str =
    "Please don't merge code-review commits, instead squash them in the parent commit";

/// Rejects commits whose subject line indicates a standalone
/// code-review fixup. Such commits belong squashed into their parent
/// commit, not merged on their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewFixup;

impl ReviewFixup {
    /// Rule name as the lint engine knows it.
    pub const NAME: &'static str = "code-review-rule";
}

impl Rule for ReviewFixup {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn evaluate(&self, subject: &str) -> RuleOutcome {
        for marker in REVIEW_FIXUP_MARKERS {
            if subject.contains(marker) {
                return RuleOutcome::fail(REVIEW_FIXUP_ADVICE);
            }
        }
        RuleOutcome::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(subject: &str) -> RuleOutcome {
        ReviewFixup.evaluate(subject)
    }

    #[test]
    fn test_each_marker_fails() {
        for marker in REVIEW_FIXUP_MARKERS {
            let subject = format!("fix: {} cleanup", marker);
            let outcome = evaluate(&subject);
            assert!(outcome.is_fail(), "expected '{}' to fail", subject);
            assert_eq!(outcome.message(), Some(REVIEW_FIXUP_ADVICE));
        }
    }

    #[test]
    fn test_clean_subject_passes() {
        assert!(evaluate("feat(auth): add token refresh").is_pass());
        assert!(evaluate("docs: describe the release process").is_pass());
    }

    #[test]
    fn test_address_comment_fails() {
        let outcome = evaluate("fix(parser): address comment from reviewer");
        assert!(outcome.is_fail());
        assert!(outcome
            .message()
            .unwrap()
            .contains("don't merge code-review commits"));
    }

    #[test]
    fn test_code_review_fails() {
        assert!(evaluate("chore: code-review cleanup").is_fail());
    }

    #[test]
    fn test_marker_alone_fails() {
        assert!(evaluate("review comment").is_fail());
    }

    #[test]
    fn test_containment_is_case_sensitive() {
        // Capitalized variants do not match the literal markers.
        assert!(evaluate("Code-Review fix").is_pass());
        assert!(evaluate("fix: Address Comment from reviewer").is_pass());
    }

    #[test]
    fn test_no_word_boundary() {
        // Plain containment, not a word match.
        assert!(evaluate("fix: re-run the code-reviewer bot").is_fail());
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let subject = "chore: addressed comments from review";
        assert_eq!(evaluate(subject), evaluate(subject));
    }

    #[test]
    fn test_empty_subject_passes() {
        assert!(evaluate("").is_pass());
    }

    #[test]
    fn test_rule_name() {
        assert_eq!(ReviewFixup.name(), "code-review-rule");
    }
}
