//! Wizard state machine
//!
//! ```text
//! Editing(Plan) -> Editing(Date) -> Editing(Time) -> Editing(Customer) -> Editing(Confirm)
//!                                                                             |
//!                                                               begin_submit  v
//!                                   Failed <------ finish_submit(Err) --- Submitting
//!                                                                             |
//!                                                          finish_submit(Ok)  v
//!                                                                         Confirmed
//! ```
//!
//! Every transition consumes the state and returns the next one; a transition
//! that does not apply returns the state unchanged.

use chrono::NaiveDate;
use shared::validation::{is_ready_to_submit, is_step_valid, validate_draft};
use shared::{ReservationDraft, ReservationPayload, Step};

use super::FieldUpdate;
use crate::{ClientError, ClientResult, SubmissionReceipt};

/// Why the last submission failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No response from the proxy
    Network,
    /// Proxy answered with an error status
    Upstream { status: u16 },
    /// Draft could not be turned into a payload
    Local,
}

/// User-facing description of a failed submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFailure {
    pub message: String,
    pub hint: Option<String>,
    pub kind: FailureKind,
}

impl From<&ClientError> for SubmissionFailure {
    fn from(err: &ClientError) -> Self {
        let kind = match err {
            ClientError::Network(_) => FailureKind::Network,
            ClientError::Upstream { status, .. } => FailureKind::Upstream { status: *status },
            _ => FailureKind::Local,
        };
        Self {
            message: err.to_string(),
            hint: err.hint().map(str::to_string),
            kind,
        }
    }
}

/// Where the booking flow currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardState {
    /// Filling in one of the five steps
    Editing { step: Step, draft: ReservationDraft },
    /// Request in flight
    Submitting { draft: ReservationDraft },
    /// Last submission failed; the draft is kept for a retry
    Failed {
        draft: ReservationDraft,
        failure: SubmissionFailure,
    },
    /// Terminal
    Confirmed {
        reservation_id: String,
        message: Option<String>,
    },
}

impl Default for WizardState {
    fn default() -> Self {
        Self::Editing {
            step: Step::Plan,
            draft: ReservationDraft::new(),
        }
    }
}

impl WizardState {
    /// Step shown to the user; `Submitting` and `Failed` belong to the confirm step
    pub fn step(&self) -> Option<Step> {
        match self {
            Self::Editing { step, .. } => Some(*step),
            Self::Submitting { .. } | Self::Failed { .. } => Some(Step::Confirm),
            Self::Confirmed { .. } => None,
        }
    }

    pub fn draft(&self) -> Option<&ReservationDraft> {
        match self {
            Self::Editing { draft, .. } | Self::Submitting { draft } | Self::Failed { draft, .. } => {
                Some(draft)
            }
            Self::Confirmed { .. } => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }

    pub fn failure(&self) -> Option<&SubmissionFailure> {
        match self {
            Self::Failed { failure, .. } => Some(failure),
            _ => None,
        }
    }

    /// Whether `advance` would move forward
    pub fn can_advance(&self, today: NaiveDate) -> bool {
        match self {
            Self::Editing { step, draft } => !step.is_last() && is_step_valid(*step, draft, today),
            _ => false,
        }
    }

    /// Whether `begin_submit` would start a request
    pub fn can_submit(&self, today: NaiveDate) -> bool {
        match self {
            Self::Editing {
                step: Step::Confirm,
                draft,
            }
            | Self::Failed { draft, .. } => is_ready_to_submit(draft, today),
            _ => false,
        }
    }

    /// Move to the next step if the current one is valid. No-op on the confirm step.
    pub fn advance(self, today: NaiveDate) -> Self {
        if !self.can_advance(today) {
            return self;
        }
        match self {
            Self::Editing { step, draft } => match step.next() {
                Some(next) => Self::Editing { step: next, draft },
                None => Self::Editing { step, draft },
            },
            other => other,
        }
    }

    /// Move to the previous step. No-op on the first step.
    pub fn retreat(self) -> Self {
        match self {
            Self::Editing { step, draft } => Self::Editing {
                step: step.prev().unwrap_or(step),
                draft,
            },
            Self::Failed { draft, .. } => Self::Editing {
                step: Step::Customer,
                draft,
            },
            other => other,
        }
    }

    /// Merge one field into the draft. The step never changes; editing after a
    /// failure returns to the confirm step.
    pub fn update(self, update: FieldUpdate, today: NaiveDate) -> Self {
        match self {
            Self::Editing { step, mut draft } => {
                update.apply(&mut draft, today);
                Self::Editing { step, draft }
            }
            Self::Failed { mut draft, .. } => {
                update.apply(&mut draft, today);
                Self::Editing {
                    step: Step::Confirm,
                    draft,
                }
            }
            other => other,
        }
    }

    /// Enter `Submitting` and hand out the payload to send.
    ///
    /// Returns the state unchanged in `Err` when submission is not allowed.
    pub fn begin_submit(self, today: NaiveDate) -> Result<(Self, ReservationPayload), Self> {
        if !self.can_submit(today) {
            return Err(self);
        }
        let draft = match self {
            Self::Editing { draft, .. } | Self::Failed { draft, .. } => draft,
            other => return Err(other),
        };

        let payload = validate_draft(&draft, today).and_then(|()| draft.to_payload());
        match payload {
            Ok(payload) => Ok((Self::Submitting { draft }, payload)),
            Err(e) => Err(Self::Failed {
                failure: SubmissionFailure::from(&ClientError::from(e)),
                draft,
            }),
        }
    }

    /// Settle an in-flight submission
    pub fn finish_submit(self, result: ClientResult<SubmissionReceipt>) -> Self {
        match (self, result) {
            (Self::Submitting { .. }, Ok(receipt)) => Self::Confirmed {
                reservation_id: receipt.reservation_id,
                message: receipt.message,
            },
            (Self::Submitting { draft }, Err(e)) => Self::Failed {
                failure: SubmissionFailure::from(&e),
                draft,
            },
            (other, _) => other,
        }
    }

    /// Back to the first step with an empty draft
    pub fn reset(self) -> Self {
        Self::default()
    }
}
