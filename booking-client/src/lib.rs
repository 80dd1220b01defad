//! Booking Client - reservation wizard and proxy client
//!
//! Drives the five-step booking wizard and submits the finished reservation
//! to the reservation proxy over HTTP.

pub mod config;
pub mod error;
pub mod http;
pub mod outcome;
pub mod wizard;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{ReservationClient, ReservationGateway};
pub use outcome::{ProxyOutcome, SubmissionReceipt, normalize_response};
pub use wizard::{
    Clock, FailureKind, FieldUpdate, FixedClock, SubmissionFailure, SystemClock, Wizard, WizardState,
};

// Re-export shared types for convenience
pub use shared::{PlanId, ReservationDraft, ReservationPayload, Step, TimeSlot};
