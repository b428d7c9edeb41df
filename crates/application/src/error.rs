//! Use-case error model.

use thiserror::Error;

use catalog_core::{DomainError, Notification, ValidationError};

use crate::gateway::GatewayError;

/// Why a use case did not complete.
#[derive(Debug, Error)]
pub enum UseCaseError {
    /// Every business-rule violation found in one request.
    #[error("{message}")]
    Notification {
        message: String,
        errors: Vec<ValidationError>,
    },

    /// A required aggregate does not exist. Raised immediately.
    #[error("{aggregate} with ID {id} was not found")]
    NotFound { aggregate: &'static str, id: String },

    /// A domain error outside the notification protocol.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Gateway failures are passed through unchanged.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl UseCaseError {
    pub fn notification(message: impl Into<String>, notification: Notification) -> Self {
        Self::Notification {
            message: message.into(),
            errors: notification.into_errors(),
        }
    }

    pub fn not_found(aggregate: &'static str, id: impl core::fmt::Display) -> Self {
        Self::NotFound {
            aggregate,
            id: id.to_string(),
        }
    }

    /// Validation errors carried by a notification failure (empty otherwise).
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            UseCaseError::Notification { errors, .. } => errors,
            _ => &[],
        }
    }

    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors().first()
    }
}
