//! Validation error types
//!
//! Two layers:
//! - [`ValidationError`]: a value could not be parsed or a required field is missing
//! - [`FieldError`]: inline, per-field problems on the customer form

use std::fmt;
use thiserror::Error;

/// Error raised while parsing or completing reservation data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Plan id outside the catalog
    #[error("Unknown plan: {0}")]
    UnknownPlan(String),

    /// Time outside the fixed slot list
    #[error("Unknown time slot: {0}")]
    UnknownTimeSlot(String),

    /// Date that could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Date strictly before today
    #[error("Date {0} is in the past")]
    PastDate(String),

    /// Field path not present on the draft
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Field value of the wrong shape (e.g. a non-boolean flag)
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Required field not filled in yet
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// One or more customer fields failed their checks
    #[error("Invalid customer data: {}", join_field_errors(.0))]
    Customer(Vec<FieldError>),
}

/// Customer form fields that carry their own checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerField {
    Name,
    Phone,
    Email,
    Address,
}

impl CustomerField {
    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Address => "address",
        }
    }
}

/// What went wrong with a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// Empty after trimming
    Required,
    /// Does not look like a phone number
    InvalidPhone,
    /// Does not look like an email address
    InvalidEmail,
}

/// Inline message for one customer field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: CustomerField,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: CustomerField, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }

    /// Short message shown next to the input
    pub fn message(&self) -> &'static str {
        match self.kind {
            FieldErrorKind::Required => "Required",
            FieldErrorKind::InvalidPhone => "Invalid phone number",
            FieldErrorKind::InvalidEmail => "Invalid email address",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.as_str(), self.message())
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
