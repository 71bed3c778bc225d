//! REST client for the students API.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; the page flows decide what to
//! log and whether to re-fetch. Nothing here panics on a bad response.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{self, HttpRequest, Method, TransportError};
use super::types::Student;
use crate::state::session::Session;

/// Errors from students API calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No bearer token in the session; the request was not sent.
    #[error("no session token; log in first")]
    Unauthenticated,
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("response decode failed: {0}")]
    Decode(String),
}

/// Operations the students page needs from the backend.
#[async_trait::async_trait(?Send)]
pub trait StudentsApi: Send + Sync {
    /// Fetch the full student list.
    async fn list(&self) -> Result<Vec<Student>, ApiError>;

    /// Create a student from a draft without an id.
    async fn create(&self, draft: &Student) -> Result<(), ApiError>;

    /// Replace the student `id` with `draft`.
    async fn update(&self, id: i64, draft: &Student) -> Result<(), ApiError>;

    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

pub(crate) fn students_endpoint(base_url: &str) -> String {
    format!("{}/api/students", base_url.trim_end_matches('/'))
}

pub(crate) fn student_endpoint(base_url: &str, id: i64) -> String {
    format!("{}/{id}", students_endpoint(base_url))
}

/// [`StudentsApi`] over HTTP, authenticated with the session's bearer token.
#[derive(Clone)]
pub struct HttpStudentsApi {
    base_url: String,
    session: Session,
}

impl HttpStudentsApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self { base_url: base_url.into(), session }
    }

    fn authorized(&self, method: Method, url: String) -> Result<HttpRequest, ApiError> {
        let token = self.session.token().ok_or(ApiError::Unauthenticated)?;
        Ok(HttpRequest::new(method, url).bearer(token))
    }

    async fn send_expecting_success(&self, request: HttpRequest) -> Result<String, ApiError> {
        let response = http::send(request).await?;
        if !response.is_success() {
            return Err(ApiError::Status(response.status));
        }
        Ok(response.body)
    }
}

#[async_trait::async_trait(?Send)]
impl StudentsApi for HttpStudentsApi {
    async fn list(&self) -> Result<Vec<Student>, ApiError> {
        let request = self.authorized(Method::Get, students_endpoint(&self.base_url))?;
        let body = self.send_expecting_success(request).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create(&self, draft: &Student) -> Result<(), ApiError> {
        let request = self.authorized(Method::Post, students_endpoint(&self.base_url))?.json(draft)?;
        self.send_expecting_success(request).await.map(|_| ())
    }

    async fn update(&self, id: i64, draft: &Student) -> Result<(), ApiError> {
        let request = self.authorized(Method::Put, student_endpoint(&self.base_url, id))?.json(draft)?;
        self.send_expecting_success(request).await.map(|_| ())
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let request = self.authorized(Method::Delete, student_endpoint(&self.base_url, id))?;
        self.send_expecting_success(request).await.map(|_| ())
    }
}
