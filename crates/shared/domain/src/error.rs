//! Domain-level errors.
//!
//! Validation failures are ordinary values: every violated rule becomes a
//! [`Violation`], and one validation call returns all of them together as
//! [`Violations`]. They are independent of transport concerns.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Category of a single rule failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required field is absent from the input
    MissingField,
    /// A field is present but has the wrong type, length or format
    FormatViolation,
    /// A password is well-formed but fails a strength sub-rule
    PasswordPolicyViolation,
    /// Every referenced field is valid on its own but a multi-field invariant fails
    CrossFieldViolation,
}

impl ViolationKind {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::MissingField => "missing_field",
            ViolationKind::FormatViolation => "format_violation",
            ViolationKind::PasswordPolicyViolation => "password_policy_violation",
            ViolationKind::CrossFieldViolation => "cross_field_violation",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single reported rule failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Field path; cross-field violations name every field involved, comma separated
    pub field: &'static str,
    pub kind: ViolationKind,
    pub message: Cow<'static, str>,
}

impl Violation {
    pub fn new(
        field: &'static str,
        kind: ViolationKind,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every violation found by one validation call, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// Violations reported against `field` (exact path match)
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.0.iter().filter(move |v| v.field == field)
    }

    /// Whether any violation of `kind` was reported against `field`
    pub fn contains(&self, field: &str, kind: ViolationKind) -> bool {
        self.for_field(field).any(|v| v.kind == kind)
    }

    /// `Ok(())` when empty, otherwise `Err(self)`
    pub fn into_result(self) -> Result<(), Violations> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn into_vec(self) -> Vec<Violation> {
        self.0
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.0.len())?;
        for violation in &self.0 {
            write!(f, "; {}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

impl From<Violation> for Violations {
    fn from(violation: Violation) -> Self {
        Self(vec![violation])
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Bridge for callers built around the `validator` crate (e.g. validated
/// JSON extractors).
impl From<Violations> for validator::ValidationErrors {
    fn from(violations: Violations) -> Self {
        let mut errors = validator::ValidationErrors::new();
        for violation in violations {
            let mut error = validator::ValidationError::new(violation.kind.code());
            error.message = Some(violation.message);
            errors.add(violation.field, error);
        }
        errors
    }
}

/// Domain-specific errors.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// One or more rules rejected the input
    #[error("Validation error: {0}")]
    Validation(Violations),

    /// Internal domain error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }

    /// Violations carried by this error, if any
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            DomainError::Validation(violations) => Some(violations),
            _ => None,
        }
    }
}

impl From<Violations> for DomainError {
    fn from(violations: Violations) -> Self {
        DomainError::Validation(violations)
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
