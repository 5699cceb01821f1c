//! Submission state machine and field validation
//!
//! `SubmissionState` is owned by the UI thread. A submit snapshots the field
//! values, validates them and hands back a [`Submission`] ready to be sent.
//! The network result is applied later through [`SubmissionState::settle`].

use crate::constants::*;
use crate::transport::TransportError;
use crate::types::*;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};
use url::Url;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", MSG_MISSING_FIELDS)]
    MissingRequiredFields,
    #[error("{}", MSG_INVALID_EMAIL)]
    InvalidEmail,
}

/// `local@domain.tld` sanity check, not RFC validation.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Required fields first, then the email format.
pub fn validate(fields: &ContactFields) -> Result<(), ValidationError> {
    if fields.name.is_empty() || fields.email.is_empty() || fields.message.is_empty() {
        return Err(ValidationError::MissingRequiredFields);
    }
    if !is_valid_email(&fields.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// A validated snapshot of the form, with the subject already defaulted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Submission {
    fn from_fields(fields: ContactFields) -> Self {
        let subject = if fields.subject.is_empty() {
            default_subject(&fields.name)
        } else {
            fields.subject
        };
        Self {
            name: fields.name,
            email: fields.email,
            subject,
            message: fields.message,
        }
    }

    pub fn query_pairs(&self) -> [(&'static str, &str); 4] {
        [
            (PARAM_NAME, self.name.as_str()),
            (PARAM_EMAIL, self.email.as_str()),
            (PARAM_SUBJECT, self.subject.as_str()),
            (PARAM_MESSAGE, self.message.as_str()),
        ]
    }

    /// Endpoint URL with the fields appended as query parameters
    pub fn url(&self, endpoint: &Url) -> Url {
        let mut url = endpoint.clone();
        url.query_pairs_mut().extend_pairs(self.query_pairs());
        url
    }
}

#[derive(Debug, Default)]
pub struct SubmissionState {
    pub fields: ContactFields,
    status: SubmissionStatus,
    feedback: Option<Feedback>,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Start an attempt from the current field values.
    ///
    /// Returns `None` when a request is already in flight or validation fails;
    /// in the latter case the error feedback is already set.
    pub fn begin(&mut self) -> Option<Submission> {
        if self.is_submitting() {
            debug!("Submit ignored, request already in flight");
            return None;
        }

        self.feedback = None;
        let snapshot = self.fields.clone();

        match validate(&snapshot) {
            Ok(()) => {
                self.status = SubmissionStatus::Submitting;
                Some(Submission::from_fields(snapshot))
            }
            Err(e) => {
                self.reject(e);
                None
            }
        }
    }

    pub fn reject(&mut self, error: ValidationError) {
        debug!(?error, "Form validation failed");
        self.status = SubmissionStatus::Idle;
        self.feedback = Some(Feedback::error(error.to_string()));
    }

    /// Apply the outcome of the request. A transport failure is still
    /// reported to the user as sent.
    pub fn settle(&mut self, result: Result<(), TransportError>) {
        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Succeeded;
                self.feedback = Some(Feedback::success(MSG_SENT));
            }
            Err(e) => {
                warn!(error = %e, "Form request failed, reporting as sent");
                self.status = SubmissionStatus::Failed;
                self.feedback = Some(Feedback::success(MSG_SENT_UNCONFIRMED));
            }
        }
        self.fields.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, subject: &str, message: &str) -> ContactFields {
        ContactFields {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    fn state_with(f: ContactFields) -> SubmissionState {
        SubmissionState {
            fields: f,
            ..SubmissionState::default()
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("ana@test.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));
        assert!(is_valid_email("x@y.z"));

        assert!(!is_valid_email("ana"));
        assert!(!is_valid_email("ana@test"));
        assert!(!is_valid_email("@test.com"));
        assert!(!is_valid_email("ana@.com"));
        assert!(!is_valid_email("ana@test."));
        assert!(!is_valid_email("ana @test.com"));
        assert!(!is_valid_email("ana@@test.com"));
    }

    #[test]
    fn test_required_fields_checked_before_email() {
        let f = fields("", "not-an-email", "", "Hola");
        assert_eq!(validate(&f), Err(ValidationError::MissingRequiredFields));

        let f = fields("Ana", "", "", "Hola");
        assert_eq!(validate(&f), Err(ValidationError::MissingRequiredFields));

        let f = fields("Ana", "ana@test.com", "Asunto", "");
        assert_eq!(validate(&f), Err(ValidationError::MissingRequiredFields));
    }

    #[test]
    fn test_subject_is_optional() {
        assert_eq!(validate(&fields("Ana", "ana@test.com", "", "Hola")), Ok(()));
    }

    #[test]
    fn test_missing_fields_sets_error_feedback() {
        let mut state = state_with(fields("Ana", "", "", "Hola"));

        assert!(state.begin().is_none());
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert_eq!(
            state.feedback(),
            Some(&Feedback::error(
                "❌ Por favor completa todos los campos obligatorios."
            ))
        );
        // Fields stay editable with their values
        assert_eq!(state.fields.name, "Ana");
    }

    #[test]
    fn test_malformed_email_sets_error_feedback() {
        let mut state = state_with(fields("Ana", "ana@test", "", "Hola"));

        assert!(state.begin().is_none());
        assert!(!state.is_submitting());
        assert_eq!(
            state.feedback(),
            Some(&Feedback::error("❌ Ingresa un correo electrónico válido."))
        );
    }

    #[test]
    fn test_valid_submit_defaults_subject() {
        let mut state = state_with(fields("Ana", "ana@test.com", "", "Hola"));

        let submission = state.begin().expect("valid form");
        assert!(state.is_submitting());
        assert_eq!(state.feedback(), None);
        assert_eq!(submission.subject, "Mensaje de Ana");
        assert_eq!(
            submission.query_pairs(),
            [
                ("nombre", "Ana"),
                ("email", "ana@test.com"),
                ("asunto", "Mensaje de Ana"),
                ("mensaje", "Hola"),
            ]
        );
    }

    #[test]
    fn test_explicit_subject_is_kept() {
        let mut state = state_with(fields("Ana", "ana@test.com", "Presupuesto", "Hola"));
        let submission = state.begin().unwrap();
        assert_eq!(submission.subject, "Presupuesto");
    }

    #[test]
    fn test_begin_clears_previous_feedback() {
        let mut state = state_with(fields("", "", "", ""));
        state.begin();
        assert!(state.feedback().is_some());

        state.fields = fields("Ana", "ana@test.com", "", "Hola");
        state.begin().unwrap();
        assert_eq!(state.feedback(), None);
    }

    #[test]
    fn test_second_begin_while_in_flight_is_ignored() {
        let mut state = state_with(fields("Ana", "ana@test.com", "", "Hola"));

        assert!(state.begin().is_some());
        assert!(state.begin().is_none());
        assert!(state.is_submitting());
        assert_eq!(state.feedback(), None);
    }

    #[test]
    fn test_settle_success_clears_fields() {
        let mut state = state_with(fields("Ana", "ana@test.com", "x", "Hola"));
        state.begin().unwrap();

        state.settle(Ok(()));

        assert_eq!(state.status(), SubmissionStatus::Succeeded);
        assert!(!state.is_submitting());
        assert_eq!(state.fields, ContactFields::default());
        assert_eq!(
            state.feedback(),
            Some(&Feedback::success("✅ ¡Mensaje enviado correctamente!"))
        );
    }

    #[test]
    fn test_settle_transport_failure_reports_sent() {
        let mut state = state_with(fields("Ana", "ana@test.com", "", "Hola"));
        state.begin().unwrap();

        state.settle(Err(TransportError::Abandoned));

        assert_eq!(state.status(), SubmissionStatus::Failed);
        assert!(!state.is_submitting());
        assert_eq!(state.fields, ContactFields::default());
        let feedback = state.feedback().unwrap();
        assert_eq!(feedback.kind, FeedbackKind::Success);
        assert_eq!(feedback.text, "✅ ¡Mensaje enviado!");
    }

    #[test]
    fn test_resubmit_after_settle() {
        let mut state = state_with(fields("Ana", "ana@test.com", "", "Hola"));
        state.begin().unwrap();
        state.settle(Ok(()));

        state.fields = fields("Luis", "luis@test.com", "", "Otra vez");
        let submission = state.begin().expect("form is editable again");
        assert_eq!(submission.subject, "Mensaje de Luis");
    }

    #[test]
    fn test_url_appends_encoded_query() {
        let endpoint = Url::parse("https://example.com/macros/s/abc/exec").unwrap();
        let mut state = state_with(fields("Ana María", "ana@test.com", "", "Hola & adiós"));
        let url = state.begin().unwrap().url(&endpoint);

        assert_eq!(url.path(), "/macros/s/abc/exec");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("nombre".to_string(), "Ana María".to_string()),
                ("email".to_string(), "ana@test.com".to_string()),
                ("asunto".to_string(), "Mensaje de Ana María".to_string()),
                ("mensaje".to_string(), "Hola & adiós".to_string()),
            ]
        );
    }
}
