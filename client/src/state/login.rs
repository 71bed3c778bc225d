//! Login form state, validation, and the submit flow.
//!
//! DESIGN
//! ======
//! `LoginFormState` holds everything the form renders. `submit_login` runs
//! one submission end to end against an injected [`LoginSubmitter`], so the
//! form never knows whether it talks to a simulated or real backend.
//!
//! TRADE-OFFS
//! ==========
//! A failed submission always reports a generic message on the email field,
//! whatever the cause (bad credentials, network, server). The specific
//! error is logged instead of shown.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::sync::LazyLock;

use regex::Regex;

use super::cell::StateCell;
use crate::config::SUCCESS_CLEAR_DELAY;
use crate::net::auth::LoginError;
use crate::net::types::LoginFormData;
use crate::util::delay;

pub const EMAIL_REQUIRED: &str = "El email es requerido";
pub const EMAIL_INVALID: &str = "El formato del email no es válido";
pub const PASSWORD_REQUIRED: &str = "La contraseña es requerida";
pub const PASSWORD_TOO_SHORT: &str = "La contraseña debe tener al menos 6 caracteres";
pub const LOGIN_FAILED: &str = "Error al iniciar sesión. Verifica tus credenciales.";
pub const LOGIN_SUCCEEDED: &str = "¡Inicio de sesión exitoso!";

pub const MIN_PASSWORD_CHARS: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern compiles"));

/// Receives validated credentials from the login form.
#[async_trait::async_trait(?Send)]
pub trait LoginSubmitter: Send + Sync {
    async fn submit(&self, data: &LoginFormData) -> Result<(), LoginError>;
}

/// Which input a change event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

/// Per-field validation messages; `None` means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFormErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginFormErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

#[must_use]
pub fn validate_email(email: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !EMAIL_PATTERN.is_match(email) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

#[must_use]
pub fn validate_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some(PASSWORD_REQUIRED)
    } else if password.chars().count() < MIN_PASSWORD_CHARS {
        Some(PASSWORD_TOO_SHORT)
    } else {
        None
    }
}

/// Validate every field of `data`.
#[must_use]
pub fn validate_login(data: &LoginFormData) -> LoginFormErrors {
    LoginFormErrors {
        email: validate_email(&data.email).map(str::to_owned),
        password: validate_password(&data.password).map(str::to_owned),
    }
}

/// Everything the login form renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub data: LoginFormData,
    pub errors: LoginFormErrors,
    /// True strictly while a submission is in flight.
    pub submitting: bool,
    pub success_message: Option<String>,
}

impl LoginFormState {
    /// Record a keystroke. Clears that field's error and any success message.
    pub fn set_field(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => {
                self.data.email = value;
                self.errors.email = None;
            }
            LoginField::Password => {
                self.data.password = value;
                self.errors.password = None;
            }
        }
        self.success_message = None;
    }

    /// Validate and, if valid, enter the submitting state.
    ///
    /// Returns the draft to submit, or `None` with `errors` populated.
    pub fn begin_submit(&mut self) -> Option<LoginFormData> {
        let errors = validate_login(&self.data);
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }
        self.errors = LoginFormErrors::default();
        self.submitting = true;
        Some(self.data.clone())
    }

    /// Leave the submitting state with the submission's outcome.
    pub fn finish_submit(&mut self, outcome: Result<(), &LoginError>) {
        self.submitting = false;
        match outcome {
            Ok(()) => self.success_message = Some(LOGIN_SUCCEEDED.to_owned()),
            Err(_) => self.errors.email = Some(LOGIN_FAILED.to_owned()),
        }
    }

    /// Reset the form once the success message has been shown.
    pub fn clear_after_success(&mut self) {
        self.data = LoginFormData::default();
        self.success_message = None;
    }
}

/// Run one submission: validate, submit, report, and clear after success.
///
/// Returns whether the submitter accepted the credentials. The submitter is
/// never called for an invalid form.
pub async fn submit_login<C>(form: &C, submitter: &dyn LoginSubmitter) -> bool
where
    C: StateCell<LoginFormState>,
{
    let Some(draft) = form.with_mut(LoginFormState::begin_submit).flatten() else {
        return false;
    };

    let outcome = submitter.submit(&draft).await;
    if let Err(e) = &outcome {
        leptos::logging::warn!("login failed for {}: {e}", draft.email);
    }
    form.with_mut(|f| f.finish_submit(outcome.as_ref().map(|_| ())));

    if outcome.is_err() {
        return false;
    }
    delay::sleep(SUCCESS_CLEAR_DELAY).await;
    form.with_mut(LoginFormState::clear_after_success);
    true
}
