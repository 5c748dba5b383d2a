// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Linting policy module.
//!
//! This module defines the declarative rule table: allowed commit
//! types, message-shape constraints with their severities, and the
//! flattened name-keyed view the lint engine reads.

pub mod default;
mod schema;
mod severity;
mod types;

pub use default::{default_policy, example_policy};
pub use schema::*;
pub use severity::Severity;
pub use types::CommitType;
