//! Login transports and the session-persisting login service.
//!
//! ARCHITECTURE
//! ============
//! `LoginTransport` has exactly one capability: exchange credentials for a
//! [`LoginResponse`]. The app picks `SimulatedLogin` or `HttpLogin` once at
//! composition time from [`crate::config::LoginMode`]. `LoginService` sits
//! on top, persisting the session on success; it is what the login form
//! submits to.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is translated into a [`LoginError`] whose `Display` text is
//! the message shown to the user. HTTP statuses and transport failures map
//! through the pure functions `error_for_status` / `error_for_transport`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;
use std::time::Duration;

use super::http::{self, HttpRequest, Method, TransportError};
use super::types::{AuthUser, LoginFormData, LoginResponse};
use crate::config::{LOGIN_TIMEOUT, PROBE_TIMEOUT, SIMULATED_LOGIN_DELAY};
use crate::state::login::LoginSubmitter;
use crate::state::session::Session;
use crate::util::delay;

/// Login failures, displayed verbatim to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Credenciales inválidas")]
    InvalidCredentials,
    #[error("Datos de login inválidos")]
    InvalidPayload,
    #[error("Servicio no encontrado. Verifica la URL del API")]
    ServiceNotFound,
    #[error("Error del servidor. Intenta más tarde")]
    Server,
    #[error("Error de red. Verifica tu conexión a internet")]
    Network,
    #[error("Tiempo de espera agotado. El servidor no responde")]
    Timeout,
    #[error("Error de conexión inesperado. Intenta nuevamente")]
    Unexpected,
}

/// Map a non-2xx login status to its error.
#[must_use]
pub fn error_for_status(status: u16) -> LoginError {
    match status {
        401 => LoginError::InvalidCredentials,
        400 => LoginError::InvalidPayload,
        404 => LoginError::ServiceNotFound,
        500.. => LoginError::Server,
        _ => LoginError::Unexpected,
    }
}

/// Map a failure that produced no HTTP status to its error.
#[must_use]
pub fn error_for_transport(error: &TransportError) -> LoginError {
    match error {
        TransportError::Network(_) => LoginError::Network,
        TransportError::Timeout => LoginError::Timeout,
        TransportError::Encode(_) | TransportError::Other(_) => LoginError::Unexpected,
    }
}

/// Exchanges credentials for a session.
#[async_trait::async_trait(?Send)]
pub trait LoginTransport: Send + Sync {
    async fn login(&self, data: &LoginFormData) -> Result<LoginResponse, LoginError>;
}

// =============================================================================
// SIMULATED
// =============================================================================

/// Offline transport with canned outcomes, for working without a backend.
///
/// - `admin@test.com` / `123456` logs in as the fixed admin user.
/// - `error@test.com` always fails with invalid credentials.
/// - Any other pair logs in as a freshly generated user.
#[derive(Debug, Clone)]
pub struct SimulatedLogin {
    delay: Duration,
}

impl Default for SimulatedLogin {
    fn default() -> Self {
        Self { delay: SIMULATED_LOGIN_DELAY }
    }
}

impl SimulatedLogin {
    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

fn fake_token() -> String {
    format!("fake-jwt-token-{}", uuid::Uuid::new_v4().simple())
}

#[async_trait::async_trait(?Send)]
impl LoginTransport for SimulatedLogin {
    async fn login(&self, data: &LoginFormData) -> Result<LoginResponse, LoginError> {
        leptos::logging::log!("simulated login for {}", data.email);
        delay::sleep(self.delay).await;

        if data.email == "admin@test.com" && data.password == "123456" {
            return Ok(LoginResponse {
                token: fake_token(),
                user_id: "user-123".to_owned(),
                user: AuthUser {
                    id: "user-123".to_owned(),
                    email: data.email.clone(),
                    name: Some("Usuario Admin".to_owned()),
                },
            });
        }
        if data.email == "error@test.com" {
            return Err(LoginError::InvalidCredentials);
        }

        let user_id = format!("user-{}", uuid::Uuid::new_v4().simple());
        Ok(LoginResponse {
            token: fake_token(),
            user_id: user_id.clone(),
            user: AuthUser { id: user_id, email: data.email.clone(), name: Some("Usuario de Prueba".to_owned()) },
        })
    }
}

// =============================================================================
// HTTP
// =============================================================================

/// Transport for the real auth backend (`POST /api/auth/login`).
#[derive(Debug, Clone)]
pub struct HttpLogin {
    base_url: String,
    timeout: Duration,
}

impl HttpLogin {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_owned(), timeout: LOGIN_TIMEOUT }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn login_endpoint(&self) -> String {
        format!("{}/api/auth/login", self.base_url)
    }

    /// Check whether the auth backend answers at all.
    pub async fn probe(&self) -> bool {
        let request = HttpRequest::new(Method::Get, format!("{}/", self.base_url)).timeout(PROBE_TIMEOUT);
        match http::send(request).await {
            Ok(response) => {
                leptos::logging::log!("auth backend answered with {}", response.status);
                true
            }
            Err(e) => {
                leptos::logging::warn!("auth backend unreachable: {e}");
                false
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl LoginTransport for HttpLogin {
    async fn login(&self, data: &LoginFormData) -> Result<LoginResponse, LoginError> {
        let request = HttpRequest::new(Method::Post, self.login_endpoint())
            .json(data)
            .map_err(|e| error_for_transport(&e))?
            .timeout(self.timeout);

        let response = http::send(request).await.map_err(|e| {
            leptos::logging::warn!("login request failed: {e}");
            error_for_transport(&e)
        })?;
        if !response.is_success() {
            leptos::logging::warn!("login rejected with status {}", response.status);
            return Err(error_for_status(response.status));
        }
        serde_json::from_str(&response.body).map_err(|e| {
            leptos::logging::warn!("login response decode failed: {e}");
            LoginError::Unexpected
        })
    }
}

// =============================================================================
// SERVICE
// =============================================================================

/// Performs a login and persists the resulting session.
#[derive(Clone)]
pub struct LoginService {
    transport: Arc<dyn LoginTransport>,
    session: Session,
}

impl LoginService {
    #[must_use]
    pub fn new(transport: Arc<dyn LoginTransport>, session: Session) -> Self {
        Self { transport, session }
    }
}

#[async_trait::async_trait(?Send)]
impl LoginSubmitter for LoginService {
    async fn submit(&self, data: &LoginFormData) -> Result<(), LoginError> {
        let response = self.transport.login(data).await?;
        self.session.store(&response);
        leptos::logging::log!("logged in as {}", response.user.email);
        Ok(())
    }
}
