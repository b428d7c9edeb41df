//! Validation handlers: where business-rule violations are reported.
//!
//! Two strategies share one contract:
//!
//! - [`Notification`] collects every error and never fails. Use cases open one
//!   per request so callers see all problems at once.
//! - [`ThrowsValidationHandler`] fails on the first appended error. Aggregates
//!   validate themselves with it, so an invalid aggregate is never returned.
//!
//! Validators report through `append(..)?`. With a notification the `?` never
//! fires and checking continues; with the throwing handler the first violation
//! short-circuits the validator.

use crate::error::{DomainError, DomainResult, ValidationError};

/// Error sink shared by validators and use cases.
pub trait ValidationHandler {
    /// Record a single violation.
    fn append(&mut self, error: ValidationError) -> DomainResult<()>;

    /// Merge every violation held by `other`.
    fn append_all<H: ValidationHandler>(&mut self, other: &H) -> DomainResult<()>;

    /// Run a fallible unit of work.
    ///
    /// Returns `Ok(Some(value))` on success. When the work fails, its
    /// violations are handed to this handler: an accumulating handler keeps
    /// them and returns `Ok(None)`, a throwing handler returns them as `Err`.
    fn validate<T, F>(&mut self, work: F) -> DomainResult<Option<T>>
    where
        F: FnOnce() -> DomainResult<T>;

    /// Violations recorded so far, in the order they were appended.
    fn errors(&self) -> &[ValidationError];

    fn has_error(&self) -> bool {
        !self.errors().is_empty()
    }

    fn first_error(&self) -> Option<&ValidationError> {
        self.errors().first()
    }
}

/// Accumulating handler: keeps every violation and never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn with_error(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) -> DomainResult<()> {
        self.errors.push(error);
        Ok(())
    }

    fn append_all<H: ValidationHandler>(&mut self, other: &H) -> DomainResult<()> {
        self.errors.extend_from_slice(other.errors());
        Ok(())
    }

    fn validate<T, F>(&mut self, work: F) -> DomainResult<Option<T>>
    where
        F: FnOnce() -> DomainResult<T>,
    {
        match work() {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                self.errors.extend(err.errors());
                Ok(None)
            }
        }
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

/// Fail-fast handler: the first appended violation becomes an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThrowsValidationHandler;

impl ValidationHandler for ThrowsValidationHandler {
    fn append(&mut self, error: ValidationError) -> DomainResult<()> {
        Err(DomainError::with_errors(vec![error]))
    }

    fn append_all<H: ValidationHandler>(&mut self, other: &H) -> DomainResult<()> {
        if other.has_error() {
            return Err(DomainError::with_errors(other.errors().to_vec()));
        }
        Ok(())
    }

    fn validate<T, F>(&mut self, work: F) -> DomainResult<Option<T>>
    where
        F: FnOnce() -> DomainResult<T>,
    {
        work().map(Some)
    }

    fn errors(&self) -> &[ValidationError] {
        &[]
    }
}

/// Business rules of one aggregate type, reported into a handler.
pub trait Validator {
    fn validate<H: ValidationHandler>(&self, handler: &mut H) -> DomainResult<()>;
}

/// Check a required text field whose trimmed length must lie in `min..=max`.
///
/// The length check is skipped when the value is missing or blank.
pub fn check_text_length<H: ValidationHandler>(
    handler: &mut H,
    field: &str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> DomainResult<()> {
    let Some(value) = value else {
        return handler.append(ValidationError::new(format!("'{field}' should not be null")));
    };
    if value.trim().is_empty() {
        return handler.append(ValidationError::new(format!("'{field}' should not be empty")));
    }
    let length = value.trim().chars().count();
    if length < min || length > max {
        return handler.append(ValidationError::new(format!(
            "'{field}' must be between {min} and {max} characters"
        )));
    }
    Ok(())
}

/// Check a required, non-blank text field.
pub fn check_required_text<H: ValidationHandler>(
    handler: &mut H,
    field: &str,
    value: Option<&str>,
) -> DomainResult<()> {
    match value {
        None => handler.append(ValidationError::new(format!("'{field}' should not be null"))),
        Some(v) if v.trim().is_empty() => {
            handler.append(ValidationError::new(format!("'{field}' should not be empty")))
        }
        Some(_) => Ok(()),
    }
}
