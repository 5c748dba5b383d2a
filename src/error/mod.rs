// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the commit policy.
//!
//! This module defines the error taxonomy for the crate, with proper
//! error categorization. Note that a rule rejecting a commit is not an
//! error: rejection is the `Fail` variant of
//! [`RuleOutcome`](crate::rules::RuleOutcome). Errors here cover misuse
//! of the registry and policy (de)serialization failures.

use thiserror::Error;

/// The main error type for commit policy operations.
#[derive(Error, Debug)]
pub enum PolicyError {
    // Registry errors
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    // Policy serialization errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Rule registry errors.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Rule already registered: '{name}'")]
    DuplicateRule { name: String },

    #[error("Unknown rule: '{name}'")]
    UnknownRule { name: String },
}

/// Policy serialization errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse policy: {message}")]
    ParseError { message: String },

    #[error("Failed to serialize policy: {message}")]
    SerializeError { message: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError {
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::SerializeError {
            message: err.to_string(),
        }
    }
}

/// Result type alias for commit policy operations.
pub type Result<T> = std::result::Result<T, PolicyError>;
