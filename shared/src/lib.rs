//! Shared types for the Limpieza Fácil booking core
//!
//! Domain model and pure logic used by both the booking client and the
//! reservation proxy: plan catalog, time slots, the reservation draft and its
//! wire payload, calendar math, step validation and the proxy's reply shapes.

pub mod calendar;
pub mod error;
pub mod plan;
pub mod reservation;
pub mod response;
pub mod slot;
pub mod step;
pub mod validation;

// Re-exports
pub use calendar::{CalendarMonthView, DayCell, MonthRef};
pub use error::{CustomerField, FieldError, FieldErrorKind, ValidationError};
pub use plan::{PLANS, PlanId, PlanInfo};
pub use reservation::{CustomerInfo, CustomerPayload, ReservationDraft, ReservationPayload};
pub use response::{DEFAULT_ID_PREFIX, ErrorReply, ReservationReply, fallback_reservation_id};
pub use slot::{DayPeriod, TimeSlot};
pub use step::Step;
