// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Ignore predicates that exempt merge commits from linting.
//!
//! A predicate receives the full commit message text, not just the
//! subject. Any match exempts the message from every rule, including
//! the custom ones. The engine's built-in ignore patterns are disabled
//! by the policy (`default_ignores = false`), so this list is the
//! complete set of exemptions.

/// A predicate over the full commit message text.
pub type IgnorePredicate = fn(&str) -> bool;

/// Ordered list of ignore predicates, evaluated with short-circuit
/// any-match-exempts semantics.
pub const IGNORES: [IgnorePredicate; 3] = [is_bors_merge, is_github_merge, is_plain_merge];

/// Merge commits created by bors.
fn is_bors_merge(message: &str) -> bool {
    message.starts_with("chore(bors): merge pull request #")
}

/// Merge commits created by the GitHub merge button.
fn is_github_merge(message: &str) -> bool {
    message.starts_with("Merge pull request #")
}

/// Plain merge commits referencing a pull request number.
fn is_plain_merge(message: &str) -> bool {
    message.starts_with("Merge #")
}

/// Whether the commit message is exempt from all rules.
pub fn is_ignored(message: &str) -> bool {
    IGNORES.iter().any(|ignore| ignore(message))
}
