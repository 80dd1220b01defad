//! Reservation draft and its wire payload
//!
//! [`ReservationDraft`] is the mutable aggregate the wizard fills in step by
//! step. [`ReservationPayload`] is the complete, transport-ready form sent to
//! the proxy and forwarded to the webhook:
//!
//! ```json
//! {
//!     "plan": "standard",
//!     "date": "2026-10-20T00:00:00Z",
//!     "time": "10:00",
//!     "customer": {
//!         "name": "Ana",
//!         "phone": "+34 600 123 456",
//!         "address": "Calle Mayor 1",
//!         "accessibilityNeeds": false
//!     }
//! }
//! ```

use crate::error::ValidationError;
use crate::plan::PlanId;
use crate::slot::TimeSlot;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer section of the draft, as typed into the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    /// Optional; empty means not provided
    pub email: String,
    pub address: String,
    /// Optional; empty means not provided
    pub special_instructions: String,
    pub accessibility_needs: bool,
}

/// In-progress reservation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationDraft {
    pub plan: Option<PlanId>,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
    pub customer: CustomerInfo,
    /// Terms and conditions accepted on the confirm step (never sent)
    pub accepted_terms: bool,
}

impl ReservationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the date; a different date clears the chosen time
    pub fn select_date(&mut self, date: Option<NaiveDate>) {
        if self.date != date {
            self.time = None;
        }
        self.date = date;
    }

    /// Build the wire payload; plan, date and time must be set
    pub fn to_payload(&self) -> Result<ReservationPayload, ValidationError> {
        ReservationPayload::try_from(self)
    }
}

/// Customer section of the payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    #[serde(default)]
    pub accessibility_needs: bool,
}

impl From<&CustomerInfo> for CustomerPayload {
    fn from(info: &CustomerInfo) -> Self {
        Self {
            name: info.name.trim().to_string(),
            phone: info.phone.trim().to_string(),
            email: non_empty(&info.email),
            address: info.address.trim().to_string(),
            special_instructions: non_empty(&info.special_instructions),
            accessibility_needs: info.accessibility_needs,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Complete reservation as sent over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationPayload {
    pub plan: PlanId,
    /// Midnight UTC of the booked day
    pub date: DateTime<Utc>,
    pub time: TimeSlot,
    pub customer: CustomerPayload,
}

impl ReservationPayload {
    /// Booked calendar day
    pub fn service_date(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

impl TryFrom<&ReservationDraft> for ReservationPayload {
    type Error = ValidationError;

    fn try_from(draft: &ReservationDraft) -> Result<Self, Self::Error> {
        let plan = draft.plan.ok_or(ValidationError::MissingField("plan"))?;
        let date = draft.date.ok_or(ValidationError::MissingField("date"))?;
        let time = draft.time.ok_or(ValidationError::MissingField("time"))?;

        Ok(Self {
            plan,
            date: date.and_time(NaiveTime::MIN).and_utc(),
            time,
            customer: CustomerPayload::from(&draft.customer),
        })
    }
}
