// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message linting policy for conventional commits.
//!
//! This crate is the declarative half of a commit-message linter: the
//! rule table (allowed commit types, subject/body/footer shape
//! constraints, severities), the ignore predicates that exempt merge
//! commits, and one custom rule that rejects commits whose subject line
//! indicates an unsquashed code-review fixup.
//!
//! It is consumed by an external lint engine at commit-hook time. The
//! engine parses commit messages, schedules rule execution, and decides
//! how to surface failures; this crate only defines what the rules are.
//!
//! # Example
//!
//! ```
//! use commit_policy::policy::LintPolicy;
//! use commit_policy::{ignore, rules};
//!
//! let policy = LintPolicy::default();
//! assert!(!policy.default_ignores);
//!
//! // Merge commits are exempt from every rule.
//! assert!(ignore::is_ignored("Merge pull request #42 from foo/bar"));
//!
//! // The custom rule rejects review-fixup subjects.
//! let rule = rules::registry().get("code-review-rule").unwrap();
//! let outcome = rule.evaluate("fix(parser): address comment from reviewer");
//! assert!(outcome.is_fail());
//! ```

// Module declarations
pub mod error;
pub mod ignore;
pub mod policy;
pub mod rules;

// Re-exports for convenience
pub use error::{PolicyError, Result};
pub use policy::LintPolicy;
