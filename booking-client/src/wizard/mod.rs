//! Booking wizard
//!
//! [`Wizard`] owns the [`WizardState`], the calendar cursor and the gateway
//! used to submit. All mutation goes through `&mut self`, so a wizard can
//! never have two submissions in flight.

mod clock;
mod field;
mod state;

pub use clock::{Clock, FixedClock, SystemClock};
pub use field::FieldUpdate;
pub use state::{FailureKind, SubmissionFailure, WizardState};

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use shared::slot::available_slots;
use shared::validation::customer_errors;
use shared::{CalendarMonthView, DayPeriod, FieldError, MonthRef, Step, TimeSlot, ValidationError};

use crate::ReservationGateway;

/// Interactive booking flow bound to a submission gateway
pub struct Wizard<G: ReservationGateway> {
    state: WizardState,
    gateway: G,
    clock: Arc<dyn Clock>,
    visible_month: MonthRef,
}

impl<G: ReservationGateway> Wizard<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_clock(gateway, Arc::new(SystemClock))
    }

    pub fn with_clock(gateway: G, clock: Arc<dyn Clock>) -> Self {
        let visible_month = MonthRef::containing(clock.today());
        Self {
            state: WizardState::default(),
            gateway,
            clock,
            visible_month,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> Option<Step> {
        self.state.step()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    fn transition(&mut self, f: impl FnOnce(WizardState, NaiveDate) -> WizardState) {
        let today = self.today();
        let state = std::mem::take(&mut self.state);
        self.state = f(state, today);
    }

    pub fn can_advance(&self) -> bool {
        self.state.can_advance(self.today())
    }

    pub fn can_submit(&self) -> bool {
        self.state.can_submit(self.today())
    }

    pub fn advance(&mut self) -> &WizardState {
        self.transition(|s, today| s.advance(today));
        &self.state
    }

    pub fn retreat(&mut self) -> &WizardState {
        self.transition(|s, _| s.retreat());
        &self.state
    }

    pub fn update(&mut self, update: FieldUpdate) -> &WizardState {
        self.transition(|s, today| s.update(update, today));
        &self.state
    }

    /// Parse a dotted field path and apply it
    pub fn set_field(&mut self, path: &str, value: &str) -> Result<&WizardState, ValidationError> {
        let update = FieldUpdate::from_path(path, value)?;
        Ok(self.update(update))
    }

    /// Inline messages for the customer form
    pub fn customer_errors(&self) -> Vec<FieldError> {
        self.state
            .draft()
            .map(|d| customer_errors(&d.customer))
            .unwrap_or_default()
    }

    /// Month grid for the date step
    pub fn calendar(&self) -> CalendarMonthView {
        let selected = self.state.draft().and_then(|d| d.date);
        CalendarMonthView::build(self.visible_month, self.today(), selected)
    }

    pub fn visible_month(&self) -> MonthRef {
        self.visible_month
    }

    pub fn show_next_month(&mut self) -> MonthRef {
        self.visible_month = self.visible_month.next();
        self.visible_month
    }

    pub fn show_prev_month(&mut self) -> MonthRef {
        self.visible_month = self.visible_month.prev();
        self.visible_month
    }

    /// Slots for the selected date, empty until a date is chosen
    pub fn available_slots(&self) -> Vec<TimeSlot> {
        self.state
            .draft()
            .and_then(|d| d.date)
            .map(available_slots)
            .unwrap_or_default()
    }

    /// Available slots grouped by part of the day
    pub fn slots_by_period(&self) -> Vec<(DayPeriod, Vec<TimeSlot>)> {
        let slots = self.available_slots();
        DayPeriod::ALL
            .into_iter()
            .map(|period| {
                let group = slots.iter().copied().filter(|s| s.period() == period).collect();
                (period, group)
            })
            .collect()
    }

    /// Send the draft through the gateway.
    ///
    /// Only does something from the confirm step (or after a failure) with
    /// every step valid and terms accepted.
    pub async fn submit(&mut self) -> &WizardState {
        let today = self.today();
        let state = std::mem::take(&mut self.state);
        let (submitting, payload) = match state.begin_submit(today) {
            Ok(started) => started,
            Err(unchanged) => {
                self.state = unchanged;
                return &self.state;
            }
        };
        self.state = submitting;

        let result = self.gateway.submit_reservation(&payload).await;
        match &result {
            Ok(receipt) => tracing::info!(reservation_id = %receipt.reservation_id, "Reservation confirmed"),
            Err(e) => tracing::warn!(error = %e, "Reservation submission failed"),
        }

        let state = std::mem::take(&mut self.state);
        self.state = state.finish_submit(result);
        &self.state
    }

    /// Back to the first step with an empty draft
    pub fn reset(&mut self) -> &WizardState {
        self.state = WizardState::default();
        self.visible_month = MonthRef::containing(self.today());
        &self.state
    }

    /// Reset after the confirmation screen has been shown for `delay`
    pub async fn reset_after(&mut self, delay: Duration) -> &WizardState {
        tokio::time::sleep(delay).await;
        self.reset()
    }
}
