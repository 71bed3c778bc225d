//! Client configuration resolved at build time.
//!
//! DESIGN
//! ======
//! The browser bundle has no process environment, so values are baked in
//! with `option_env!` when the crate is compiled. Parsing is split into pure
//! functions so it can be tested without touching the build environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Origin of the hosted authentication backend.
pub const DEFAULT_AUTH_BASE_URL: &str = "https://students-web-fb5f86739d1b.herokuapp.com";
/// Upper bound for a login round-trip.
pub const LOGIN_TIMEOUT: Duration = Duration::from_secs(10);
/// Upper bound for the auth backend reachability probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);
/// Artificial latency of the simulated login transport.
pub const SIMULATED_LOGIN_DELAY: Duration = Duration::from_secs(1);
/// How long the login success message stays before the form is cleared.
pub const SUCCESS_CLEAR_DELAY: Duration = Duration::from_secs(2);

/// Errors produced while parsing configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown login mode `{0}` (expected `simulated` or `http`)")]
    UnknownLoginMode(String),
    #[error("invalid base URL `{0}`: must start with http:// or https://")]
    InvalidBaseUrl(String),
}

/// Which login transport the app is composed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMode {
    /// Canned responses after a short delay; never touches the network.
    #[default]
    Simulated,
    /// Real `POST /api/auth/login` against the auth backend.
    Http,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL for the students API. Empty means same origin.
    pub api_base_url: String,
    /// Base URL for the authentication backend.
    pub auth_base_url: String,
    pub login_mode: LoginMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_owned(),
            login_mode: LoginMode::default(),
        }
    }
}

impl ClientConfig {
    /// Build config from variables captured at compile time.
    ///
    /// - `CAMPUS_API_URL`: students API origin (default: same origin)
    /// - `CAMPUS_AUTH_URL`: auth backend origin (default: [`DEFAULT_AUTH_BASE_URL`])
    /// - `CAMPUS_LOGIN_MODE`: `simulated` (default) or `http`
    ///
    /// # Errors
    ///
    /// Returns an error if a captured value fails to parse.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("CAMPUS_API_URL"),
            option_env!("CAMPUS_AUTH_URL"),
            option_env!("CAMPUS_LOGIN_MODE"),
        )
    }

    /// Build config from optional raw values, applying defaults for `None`.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown login mode or a non-HTTP base URL.
    pub fn from_values(
        api_base_url: Option<&str>,
        auth_base_url: Option<&str>,
        login_mode: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_base_url = match api_base_url.map(str::trim) {
            None | Some("") => String::new(),
            Some(raw) => parse_base_url(raw)?,
        };
        let auth_base_url = parse_base_url(auth_base_url.unwrap_or(DEFAULT_AUTH_BASE_URL).trim())?;
        let login_mode = parse_login_mode(login_mode)?;
        Ok(Self { api_base_url, auth_base_url, login_mode })
    }
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_login_mode(raw: Option<&str>) -> Result<LoginMode, ConfigError> {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("" | "simulated") => Ok(LoginMode::Simulated),
        Some("http") => Ok(LoginMode::Http),
        Some(other) => Err(ConfigError::UnknownLoginMode(other.to_owned())),
    }
}
