use super::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// =============================================================
// Validation
// =============================================================

#[test]
fn email_accepts_simple_address() {
    assert_eq!(validate_email("a@b.co"), None);
    assert_eq!(validate_email("first.last@sub.domain.edu"), None);
}

#[test]
fn email_rejects_malformed_addresses() {
    for bad in ["a@b", "@b.co", "a@b.", "a b@c.io", "a@@b.co", "plainaddress"] {
        assert_eq!(validate_email(bad), Some(EMAIL_INVALID), "expected {bad:?} to be rejected");
    }
}

#[test]
fn email_blank_is_required_not_malformed() {
    assert_eq!(validate_email(""), Some(EMAIL_REQUIRED));
    assert_eq!(validate_email("   "), Some(EMAIL_REQUIRED));
}

#[test]
fn password_length_boundary() {
    assert_eq!(validate_password(""), Some(PASSWORD_REQUIRED));
    assert_eq!(validate_password("12345"), Some(PASSWORD_TOO_SHORT));
    assert_eq!(validate_password("123456"), None);
    assert_eq!(validate_password("a much longer passphrase"), None);
}

#[test]
fn password_length_counts_characters_not_bytes() {
    assert_eq!(validate_password("ñññññ"), Some(PASSWORD_TOO_SHORT));
    assert_eq!(validate_password("ññññññ"), None);
}

#[test]
fn validate_login_reports_both_fields() {
    let errors = validate_login(&LoginFormData { email: "nope".into(), password: "1".into() });
    assert_eq!(errors.email.as_deref(), Some(EMAIL_INVALID));
    assert_eq!(errors.password.as_deref(), Some(PASSWORD_TOO_SHORT));
    assert!(!errors.is_empty());
}

// =============================================================
// Form state transitions
// =============================================================

#[test]
fn typing_clears_that_fields_error_and_success_message() {
    let mut form = LoginFormState {
        errors: LoginFormErrors { email: Some("x".into()), password: Some("y".into()) },
        success_message: Some(LOGIN_SUCCEEDED.into()),
        ..LoginFormState::default()
    };
    form.set_field(LoginField::Email, "a@b.co".into());
    assert_eq!(form.data.email, "a@b.co");
    assert_eq!(form.errors.email, None);
    assert_eq!(form.errors.password.as_deref(), Some("y"));
    assert_eq!(form.success_message, None);
}

#[test]
fn begin_submit_on_invalid_form_populates_errors_and_stays_idle() {
    let mut form = LoginFormState::default();
    assert_eq!(form.begin_submit(), None);
    assert!(!form.submitting);
    assert_eq!(form.errors.email.as_deref(), Some(EMAIL_REQUIRED));
    assert_eq!(form.errors.password.as_deref(), Some(PASSWORD_REQUIRED));
}

#[test]
fn failure_is_reported_on_the_email_field() {
    let mut form = LoginFormState { submitting: true, ..LoginFormState::default() };
    form.finish_submit(Err(&LoginError::Network));
    assert!(!form.submitting);
    assert_eq!(form.errors.email.as_deref(), Some(LOGIN_FAILED));
    assert_eq!(form.errors.password, None);
}

// =============================================================
// submit_login flow
// =============================================================

fn filled(email: &str, password: &str) -> LoginFormState {
    let mut form = LoginFormState::default();
    form.set_field(LoginField::Email, email.into());
    form.set_field(LoginField::Password, password.into());
    form
}

struct CountingSubmitter {
    calls: AtomicUsize,
    result: Result<(), LoginError>,
}

impl CountingSubmitter {
    fn new(result: Result<(), LoginError>) -> Self {
        Self { calls: AtomicUsize::new(0), result }
    }
}

#[async_trait::async_trait(?Send)]
impl LoginSubmitter for CountingSubmitter {
    async fn submit(&self, _data: &LoginFormData) -> Result<(), LoginError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

#[tokio::test]
async fn invalid_submission_never_calls_submitter() {
    let form = Mutex::new(filled("a@b", "123"));
    let submitter = CountingSubmitter::new(Ok(()));

    assert!(!submit_login(&form, &submitter).await);

    assert_eq!(submitter.calls.load(Ordering::SeqCst), 0);
    let state = form.lock().unwrap();
    assert_eq!(state.errors.email.as_deref(), Some(EMAIL_INVALID));
    assert_eq!(state.errors.password.as_deref(), Some(PASSWORD_TOO_SHORT));
    assert!(!state.submitting);
}

#[tokio::test]
async fn failed_submission_clears_flag_and_sets_email_error() {
    let form = Mutex::new(filled("a@b.co", "123456"));
    let submitter = CountingSubmitter::new(Err(LoginError::InvalidCredentials));

    assert!(!submit_login(&form, &submitter).await);

    assert_eq!(submitter.calls.load(Ordering::SeqCst), 1);
    let state = form.lock().unwrap();
    assert!(!state.submitting);
    assert_eq!(state.errors.email.as_deref(), Some(LOGIN_FAILED));
    assert_eq!(state.data.email, "a@b.co");
}

#[tokio::test(start_paused = true)]
async fn success_shows_message_then_clears_form() {
    let form = Mutex::new(filled("a@b.co", "123456"));
    let submitter = CountingSubmitter::new(Ok(()));

    let midway = async {
        tokio::time::sleep(SUCCESS_CLEAR_DELAY / 2).await;
        form.lock().unwrap().clone()
    };
    let (accepted, snapshot) = tokio::join!(submit_login(&form, &submitter), midway);

    assert!(accepted);
    assert!(!snapshot.submitting);
    assert_eq!(snapshot.success_message.as_deref(), Some(LOGIN_SUCCEEDED));
    assert_eq!(snapshot.data.email, "a@b.co");

    let state = form.lock().unwrap();
    assert_eq!(state.success_message, None);
    assert_eq!(state.data, LoginFormData::default());
}

/// Observes the shared form while the submission is in flight.
struct ObservingSubmitter {
    form: Arc<Mutex<LoginFormState>>,
    seen_submitting: Mutex<Option<bool>>,
}

#[async_trait::async_trait(?Send)]
impl LoginSubmitter for ObservingSubmitter {
    async fn submit(&self, _data: &LoginFormData) -> Result<(), LoginError> {
        let submitting = self.form.lock().unwrap().submitting;
        *self.seen_submitting.lock().unwrap() = Some(submitting);
        Err(LoginError::Server)
    }
}

#[tokio::test]
async fn submitting_flag_is_set_only_while_in_flight() {
    let form = Arc::new(Mutex::new(filled("a@b.co", "123456")));
    let submitter = ObservingSubmitter { form: form.clone(), seen_submitting: Mutex::new(None) };

    submit_login(&*form, &submitter).await;

    assert_eq!(*submitter.seen_submitting.lock().unwrap(), Some(true));
    assert!(!form.lock().unwrap().submitting);
}
