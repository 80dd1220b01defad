//! Step Validators
//!
//! Pure predicates deciding whether the wizard may leave a step. They never
//! fail for control flow: a step is simply valid or not, and the customer
//! step additionally reports per-field problems for inline messages.

use crate::calendar::is_available;
use crate::error::{CustomerField, FieldError, FieldErrorKind, ValidationError};
use crate::reservation::{CustomerInfo, CustomerPayload, ReservationDraft, ReservationPayload};
use crate::step::Step;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[\d\s-]{6,}$").expect("phone pattern compiles"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Optional leading `+`, then at least six digits, spaces or dashes
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone.trim())
}

/// `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// Email is optional: empty passes, anything else must look like an address
pub fn is_acceptable_email(email: &str) -> bool {
    email.trim().is_empty() || is_valid_email(email)
}

fn check_customer(name: &str, phone: &str, email: &str, address: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push(FieldError::new(CustomerField::Name, FieldErrorKind::Required));
    }
    if phone.trim().is_empty() {
        errors.push(FieldError::new(CustomerField::Phone, FieldErrorKind::Required));
    } else if !is_valid_phone(phone) {
        errors.push(FieldError::new(CustomerField::Phone, FieldErrorKind::InvalidPhone));
    }
    if !is_acceptable_email(email) {
        errors.push(FieldError::new(CustomerField::Email, FieldErrorKind::InvalidEmail));
    }
    if address.trim().is_empty() {
        errors.push(FieldError::new(CustomerField::Address, FieldErrorKind::Required));
    }

    errors
}

/// Inline problems on the customer form, in field order
pub fn customer_errors(customer: &CustomerInfo) -> Vec<FieldError> {
    check_customer(
        &customer.name,
        &customer.phone,
        &customer.email,
        &customer.address,
    )
}

pub fn is_plan_valid(draft: &ReservationDraft) -> bool {
    draft.plan.is_some()
}

pub fn is_date_valid(draft: &ReservationDraft, today: NaiveDate) -> bool {
    draft.date.is_some_and(|date| is_available(date, today))
}

pub fn is_time_valid(draft: &ReservationDraft) -> bool {
    draft.time.is_some()
}

pub fn is_customer_valid(draft: &ReservationDraft) -> bool {
    customer_errors(&draft.customer).is_empty()
}

/// Whether `step` may be left with "Next" (or, for the last step, submitted)
pub fn is_step_valid(step: Step, draft: &ReservationDraft, today: NaiveDate) -> bool {
    match step {
        Step::Plan => is_plan_valid(draft),
        Step::Date => is_date_valid(draft, today),
        Step::Time => is_time_valid(draft),
        Step::Customer => is_customer_valid(draft),
        Step::Confirm => is_ready_to_submit(draft, today),
    }
}

/// Every earlier step is valid and the terms are accepted
pub fn is_ready_to_submit(draft: &ReservationDraft, today: NaiveDate) -> bool {
    is_plan_valid(draft)
        && is_date_valid(draft, today)
        && is_time_valid(draft)
        && is_customer_valid(draft)
        && draft.accepted_terms
}

/// First reason the draft cannot be submitted yet
pub fn validate_draft(draft: &ReservationDraft, today: NaiveDate) -> Result<(), ValidationError> {
    draft.plan.ok_or(ValidationError::MissingField("plan"))?;
    let date = draft.date.ok_or(ValidationError::MissingField("date"))?;
    if !is_available(date, today) {
        return Err(ValidationError::PastDate(date.to_string()));
    }
    draft.time.ok_or(ValidationError::MissingField("time"))?;

    let errors = customer_errors(&draft.customer);
    if !errors.is_empty() {
        return Err(ValidationError::Customer(errors));
    }
    if !draft.accepted_terms {
        return Err(ValidationError::MissingField("accepted_terms"));
    }
    Ok(())
}

/// Server-side check of an incoming payload's customer section.
/// Plan and time are already constrained by their types.
pub fn validate_payload(payload: &ReservationPayload) -> Result<(), ValidationError> {
    let CustomerPayload {
        name,
        phone,
        email,
        address,
        ..
    } = &payload.customer;

    let errors = check_customer(name, phone, email.as_deref().unwrap_or(""), address);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Customer(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::PlanId;
    use crate::slot::TimeSlot;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn valid_customer() -> CustomerInfo {
        CustomerInfo {
            name: "Ana".into(),
            phone: "+34 600 123 456".into(),
            email: "ana@example.com".into(),
            address: "Calle Mayor 1".into(),
            ..Default::default()
        }
    }

    fn complete_draft() -> ReservationDraft {
        ReservationDraft {
            plan: Some(PlanId::Basic),
            date: Some(today()),
            time: TimeSlot::at_hour(9),
            customer: valid_customer(),
            accepted_terms: true,
        }
    }

    #[test]
    fn test_phone_shapes() {
        assert!(is_valid_phone("+34 600 123 456"));
        assert!(is_valid_phone("600-123-456"));
        assert!(is_valid_phone("600123456"));
        assert!(!is_valid_phone("abc"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("+34 600 abc 456"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_acceptable_email(""));
        assert!(is_acceptable_email("   "));
        assert!(is_acceptable_email("a@b.com"));
        assert!(!is_acceptable_email("not-an-email"));
        assert!(!is_acceptable_email("a@b"));
        assert!(!is_acceptable_email("a b@c.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_customer_errors_for_blank_form() {
        let errors = customer_errors(&CustomerInfo::default());
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![CustomerField::Name, CustomerField::Phone, CustomerField::Address]
        );
        assert!(errors.iter().all(|e| e.kind == FieldErrorKind::Required));
    }

    #[test]
    fn test_whitespace_only_fields_are_missing() {
        let customer = CustomerInfo {
            name: "   ".into(),
            address: "\t".into(),
            ..valid_customer()
        };
        assert_eq!(customer_errors(&customer).len(), 2);
    }

    #[test]
    fn test_bad_email_blocks_but_missing_email_does_not() {
        let mut draft = complete_draft();
        draft.customer.email = String::new();
        assert!(is_step_valid(Step::Customer, &draft, today()));

        draft.customer.email = "not-an-email".into();
        assert!(!is_step_valid(Step::Customer, &draft, today()));
        assert_eq!(
            customer_errors(&draft.customer),
            vec![FieldError::new(CustomerField::Email, FieldErrorKind::InvalidEmail)]
        );
    }

    #[test]
    fn test_step_validity() {
        let empty = ReservationDraft::new();
        for step in Step::ALL {
            assert!(!is_step_valid(step, &empty, today()), "{step:?}");
        }

        let draft = complete_draft();
        for step in Step::ALL {
            assert!(is_step_valid(step, &draft, today()), "{step:?}");
        }
    }

    #[test]
    fn test_past_date_invalidates_date_step() {
        let mut draft = complete_draft();
        draft.date = today().pred_opt();
        assert!(!is_step_valid(Step::Date, &draft, today()));
        assert!(matches!(
            validate_draft(&draft, today()),
            Err(ValidationError::PastDate(_))
        ));
    }

    #[test]
    fn test_confirm_requires_terms() {
        let mut draft = complete_draft();
        draft.accepted_terms = false;
        assert!(!is_step_valid(Step::Confirm, &draft, today()));
        assert_eq!(
            validate_draft(&draft, today()),
            Err(ValidationError::MissingField("accepted_terms"))
        );
    }

    #[test]
    fn test_validate_payload() {
        let payload = complete_draft().to_payload().unwrap();
        assert!(validate_payload(&payload).is_ok());

        let mut bad = payload.clone();
        bad.customer.phone = "abc".into();
        bad.customer.email = Some("nope".into());
        match validate_payload(&bad) {
            Err(ValidationError::Customer(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
