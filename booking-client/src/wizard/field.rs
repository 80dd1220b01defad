//! Field-level edits of the draft

use chrono::{DateTime, NaiveDate};
use shared::calendar::is_available;
use shared::{PlanId, ReservationDraft, TimeSlot, ValidationError};

/// One edit to the draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Plan(Option<PlanId>),
    Date(Option<NaiveDate>),
    Time(Option<TimeSlot>),
    Name(String),
    Phone(String),
    Email(String),
    Address(String),
    SpecialInstructions(String),
    AccessibilityNeeds(bool),
    AcceptedTerms(bool),
}

impl FieldUpdate {
    /// Parse a dotted field path and its raw value.
    ///
    /// Top-level paths are `plan`, `date`, `time` and `acceptedTerms`; customer
    /// fields live under `customer.` in camelCase or snake_case. An empty value
    /// clears `plan`, `date` and `time`.
    pub fn from_path(path: &str, value: &str) -> Result<Self, ValidationError> {
        let raw = value.trim();
        let update = match path.trim() {
            "plan" => Self::Plan(optional(raw, |s| s.parse())?),
            "date" => Self::Date(optional(raw, parse_date)?),
            "time" => Self::Time(optional(raw, |s| s.parse())?),
            "acceptedTerms" | "accepted_terms" => Self::AcceptedTerms(parse_flag(path, raw)?),
            "customer.name" => Self::Name(value.to_string()),
            "customer.phone" => Self::Phone(value.to_string()),
            "customer.email" => Self::Email(value.to_string()),
            "customer.address" => Self::Address(value.to_string()),
            "customer.specialInstructions" | "customer.special_instructions" => {
                Self::SpecialInstructions(value.to_string())
            }
            "customer.accessibilityNeeds" | "customer.accessibility_needs" => {
                Self::AccessibilityNeeds(parse_flag(path, raw)?)
            }
            other => return Err(ValidationError::UnknownField(other.to_string())),
        };
        Ok(update)
    }

    /// Apply to a draft. Past dates are ignored; a new date clears the time.
    pub fn apply(self, draft: &mut ReservationDraft, today: NaiveDate) {
        match self {
            Self::Plan(plan) => draft.plan = plan,
            Self::Date(Some(date)) if !is_available(date, today) => {
                tracing::debug!(%date, "Ignoring unavailable date");
            }
            Self::Date(date) => draft.select_date(date),
            Self::Time(time) => draft.time = time,
            Self::Name(v) => draft.customer.name = v,
            Self::Phone(v) => draft.customer.phone = v,
            Self::Email(v) => draft.customer.email = v,
            Self::Address(v) => draft.customer.address = v,
            Self::SpecialInstructions(v) => draft.customer.special_instructions = v,
            Self::AccessibilityNeeds(v) => draft.customer.accessibility_needs = v,
            Self::AcceptedTerms(v) => draft.accepted_terms = v,
        }
    }
}

fn optional<T>(
    raw: &str,
    parse: impl FnOnce(&str) -> Result<T, ValidationError>,
) -> Result<Option<T>, ValidationError> {
    if raw.is_empty() {
        Ok(None)
    } else {
        parse(raw).map(Some)
    }
}

/// `YYYY-MM-DD` or a full RFC 3339 timestamp (date taken in its own offset)
fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

fn parse_flag(path: &str, raw: &str) -> Result<bool, ValidationError> {
    match raw {
        "true" | "1" | "on" => Ok(true),
        "false" | "0" | "off" | "" => Ok(false),
        _ => Err(ValidationError::InvalidValue {
            field: path.to_string(),
            value: raw.to_string(),
        }),
    }
}
