//! Domain error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// A single business-rule violation, as reported by a validator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Domain-level error.
///
/// Keep this focused on deterministic business failures. Storage and transport
/// problems are reported by the gateway layer, not here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more business rules failed. The list keeps validator order.
    #[error("{}", first_message(.0))]
    Validation(Vec<ValidationError>),

    /// An identifier was invalid (e.g. blank).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Two money values in different currencies were combined or compared.
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch { left: String, right: String },

    /// A money amount or currency could not be parsed.
    #[error("invalid money: {0}")]
    InvalidMoney(String),
}

fn first_message(errors: &[ValidationError]) -> &str {
    errors
        .first()
        .map(|e| e.message.as_str())
        .unwrap_or("validation failed")
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(vec![ValidationError::new(msg)])
    }

    pub fn with_errors(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_money(msg: impl Into<String>) -> Self {
        Self::InvalidMoney(msg.into())
    }

    /// The violations carried by this error.
    ///
    /// Non-validation variants are reported as a single violation built from
    /// their display message, so any domain error can be folded into a
    /// notification.
    pub fn errors(&self) -> Vec<ValidationError> {
        match self {
            DomainError::Validation(errors) => errors.clone(),
            other => vec![ValidationError::new(other.to_string())],
        }
    }
}
