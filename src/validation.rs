use std::collections::HashMap;

use chrono::NaiveDate;

/// A value extracted from one form control. Checkboxes carry their checked
/// state; everything else is the raw string the visitor typed or picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

/// Flat snapshot of a form at submission time. Built fresh for every submit
/// and thrown away once validated.
#[derive(Debug, Clone, Default)]
pub struct FormPayload {
    fields: HashMap<String, FieldValue>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
        self.fields
            .insert(name.to_string(), FieldValue::Text(value.into()));
    }

    pub fn set_checked(&mut self, name: &str, checked: bool) {
        self.fields
            .insert(name.to_string(), FieldValue::Checked(checked));
    }

    fn text(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(FieldValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    fn checked(&self, name: &str) -> bool {
        matches!(self.fields.get(name), Some(FieldValue::Checked(true)))
    }
}

/// Outcome of running a payload through a validator. Validation stops at the
/// first failing rule, so `Invalid` always names exactly one problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    fn invalid(reason: &str) -> Self {
        Self::Invalid(reason.to_string())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Basic `local@domain.tld` shape: no whitespace, one `@` with a non-empty
/// local part, and a dot in the domain with text on both sides of it.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn meets_min_len(value: Option<&str>, min: usize) -> bool {
    value.map_or(false, |v| v.trim().chars().count() >= min)
}

fn is_present(value: Option<&str>) -> bool {
    value.map_or(false, |v| !v.is_empty())
}

fn has_valid_email(value: Option<&str>) -> bool {
    value.map_or(false, is_valid_email)
}

/// Contact form rules, in order, first failure wins. Pure: presenting the
/// resulting notification is the caller's job.
pub fn validate_contact(payload: &FormPayload) -> ValidationResult {
    if !meets_min_len(payload.text("name"), 2) {
        return ValidationResult::invalid("Please enter a valid name (at least 2 characters).");
    }
    if !has_valid_email(payload.text("email")) {
        return ValidationResult::invalid("Please enter a valid email address.");
    }
    if !meets_min_len(payload.text("message"), 10) {
        return ValidationResult::invalid("Please enter a message (at least 10 characters).");
    }
    if !payload.checked("consent") {
        return ValidationResult::invalid("Please agree to our privacy policy to continue.");
    }
    ValidationResult::Valid
}

/// Appointment form rules, same first-match-wins discipline. `today` is the
/// caller's local calendar date; passing it in keeps the date rule
/// independent of the wall clock. Same-day bookings are accepted.
pub fn validate_appointment(payload: &FormPayload, today: NaiveDate) -> ValidationResult {
    if !meets_min_len(payload.text("name"), 2) {
        return ValidationResult::invalid("Please enter a valid name (at least 2 characters).");
    }
    if !has_valid_email(payload.text("email")) {
        return ValidationResult::invalid("Please enter a valid email address.");
    }
    // Length only, no digit check. Known quirk, preserved until product
    // clarifies the intended phone format.
    if !meets_min_len(payload.text("phone"), 10) {
        return ValidationResult::invalid("Please enter a valid phone number.");
    }
    if !is_present(payload.text("dob")) {
        return ValidationResult::invalid("Please enter your date of birth.");
    }
    if !is_present(payload.text("service")) {
        return ValidationResult::invalid("Please select a service.");
    }
    if !is_present(payload.text("date")) {
        return ValidationResult::invalid("Please select a preferred appointment date.");
    }
    if !is_present(payload.text("time")) {
        return ValidationResult::invalid("Please select a preferred appointment time.");
    }
    // A malformed (but non-empty) date is left for the date input to catch;
    // only a date that parses and lies strictly before today is rejected.
    if let Some(date) = payload.text("date") {
        if let Ok(parsed) = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
            if parsed < today {
                return ValidationResult::invalid(
                    "Please select a future date for your appointment.",
                );
            }
        }
    }
    if !payload.checked("consent") {
        return ValidationResult::invalid("Please agree to our terms of service to continue.");
    }
    ValidationResult::Valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn contact_payload() -> FormPayload {
        let mut payload = FormPayload::new();
        payload.set_text("name", "Jamie Rivers");
        payload.set_text("email", "jamie@example.com");
        payload.set_text("message", "I would like to ask about check-ups.");
        payload.set_checked("consent", true);
        payload
    }

    fn appointment_payload(date: &str) -> FormPayload {
        let mut payload = FormPayload::new();
        payload.set_text("name", "Jamie Rivers");
        payload.set_text("email", "jamie@example.com");
        payload.set_text("phone", "0401234567");
        payload.set_text("dob", "1988-03-14");
        payload.set_text("service", "general");
        payload.set_text("date", date);
        payload.set_text("time", "10:00");
        payload.set_checked("consent", true);
        payload
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b.com "));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn contact_happy_path() {
        assert_eq!(validate_contact(&contact_payload()), ValidationResult::Valid);
    }

    #[test]
    fn contact_rules_fire_in_order() {
        let mut payload = FormPayload::new();
        // Everything missing: the name rule wins.
        match validate_contact(&payload) {
            ValidationResult::Invalid(reason) => assert!(reason.contains("name")),
            other => panic!("expected name failure, got {other:?}"),
        }

        payload.set_text("name", "Jamie");
        match validate_contact(&payload) {
            ValidationResult::Invalid(reason) => assert!(reason.contains("email")),
            other => panic!("expected email failure, got {other:?}"),
        }

        payload.set_text("email", "jamie@example.com");
        match validate_contact(&payload) {
            ValidationResult::Invalid(reason) => assert!(reason.contains("message")),
            other => panic!("expected message failure, got {other:?}"),
        }

        payload.set_text("message", "A long enough message here.");
        match validate_contact(&payload) {
            ValidationResult::Invalid(reason) => assert!(reason.contains("privacy policy")),
            other => panic!("expected consent failure, got {other:?}"),
        }
    }

    #[test]
    fn contact_trims_before_measuring() {
        let mut payload = contact_payload();
        payload.set_text("name", "  j  ");
        assert!(!validate_contact(&payload).is_valid());

        let mut payload = contact_payload();
        payload.set_text("message", "   short   ");
        assert!(!validate_contact(&payload).is_valid());
    }

    #[test]
    fn contact_unchecked_consent_rejected() {
        let mut payload = contact_payload();
        payload.set_checked("consent", false);
        match validate_contact(&payload) {
            ValidationResult::Invalid(reason) => assert!(reason.contains("privacy policy")),
            other => panic!("expected consent failure, got {other:?}"),
        }
    }

    #[test]
    fn appointment_happy_path_same_day() {
        // Today itself is accepted; the rule never sees a time of day.
        let payload = appointment_payload("2026-08-30");
        assert_eq!(
            validate_appointment(&payload, today()),
            ValidationResult::Valid
        );
    }

    #[test]
    fn appointment_rejects_yesterday() {
        let payload = appointment_payload("2026-08-29");
        match validate_appointment(&payload, today()) {
            ValidationResult::Invalid(reason) => assert!(reason.contains("future date")),
            other => panic!("expected past-date failure, got {other:?}"),
        }
    }

    #[test]
    fn appointment_accepts_future() {
        let date = today().checked_add_days(Days::new(30)).unwrap();
        let payload = appointment_payload(&date.format("%Y-%m-%d").to_string());
        assert!(validate_appointment(&payload, today()).is_valid());
    }

    #[test]
    fn appointment_malformed_date_passes_past_rule() {
        // Matches the long-standing behavior: the date input is trusted to
        // produce well-formed values, garbage is not treated as past.
        let payload = appointment_payload("not-a-date");
        assert!(validate_appointment(&payload, today()).is_valid());
    }

    #[test]
    fn appointment_rules_fire_in_order() {
        let mut payload = FormPayload::new();
        payload.set_text("name", "Jamie Rivers");
        payload.set_text("email", "jamie@example.com");
        match validate_appointment(&payload, today()) {
            ValidationResult::Invalid(reason) => assert!(reason.contains("phone")),
            other => panic!("expected phone failure, got {other:?}"),
        }

        payload.set_text("phone", "0401234567");
        match validate_appointment(&payload, today()) {
            ValidationResult::Invalid(reason) => assert!(reason.contains("date of birth")),
            other => panic!("expected dob failure, got {other:?}"),
        }

        payload.set_text("dob", "1988-03-14");
        match validate_appointment(&payload, today()) {
            ValidationResult::Invalid(reason) => assert!(reason.contains("service")),
            other => panic!("expected service failure, got {other:?}"),
        }

        payload.set_text("service", "general");
        match validate_appointment(&payload, today()) {
            ValidationResult::Invalid(reason) => assert!(reason.contains("appointment date")),
            other => panic!("expected date failure, got {other:?}"),
        }

        payload.set_text("date", "2026-09-15");
        match validate_appointment(&payload, today()) {
            ValidationResult::Invalid(reason) => assert!(reason.contains("appointment time")),
            other => panic!("expected time failure, got {other:?}"),
        }

        payload.set_text("time", "10:00");
        match validate_appointment(&payload, today()) {
            ValidationResult::Invalid(reason) => assert!(reason.contains("terms of service")),
            other => panic!("expected consent failure, got {other:?}"),
        }
    }

    #[test]
    fn appointment_phone_is_length_only() {
        let mut payload = appointment_payload("2026-09-15");
        payload.set_text("phone", "no digits here"); // 14 chars, passes
        assert!(validate_appointment(&payload, today()).is_valid());

        payload.set_text("phone", "123456789"); // 9 chars, fails
        assert!(!validate_appointment(&payload, today()).is_valid());
    }
}
