//! Authenticated session persisted in client-side storage.
//!
//! DESIGN
//! ======
//! `Session` is the single owner of the storage key names. The login flow
//! writes through it and the students API reads the bearer token through
//! it, so both sides always agree on where the token lives. Storage is a
//! trait object: browser `localStorage` under hydrate, an in-memory map on
//! the server and in tests.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::net::types::LoginResponse;

pub const TOKEN_KEY: &str = "authToken";
pub const USER_ID_KEY: &str = "userId";
pub const USER_EMAIL_KEY: &str = "userEmail";

/// String key/value persistence backing a [`Session`].
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Process-local storage; contents are lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }
}

/// Browser `window.localStorage`. Every call re-resolves the handle since
/// `web_sys::Storage` cannot be shared across threads.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(feature = "hydrate")]
impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            leptos::logging::warn!("localStorage unavailable; `{key}` not persisted");
            return;
        };
        if storage.set_item(key, value).is_err() {
            leptos::logging::warn!("localStorage rejected write for `{key}`");
        }
    }
}

/// Handle to the persisted login session. Cheap to clone.
#[derive(Clone)]
pub struct Session {
    storage: Arc<dyn SessionStorage>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.token().is_some())
            .finish()
    }
}

impl Session {
    #[must_use]
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::default()))
    }

    /// Session backed by `localStorage` in the browser, memory elsewhere.
    #[must_use]
    pub fn for_platform() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(Arc::new(BrowserStorage))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::in_memory()
        }
    }

    /// Bearer token of the current session, if logged in.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Persist the artifacts of a successful login.
    pub fn store(&self, response: &LoginResponse) {
        self.storage.set(TOKEN_KEY, &response.token);
        self.storage.set(USER_ID_KEY, &response.user_id);
        self.storage.set(USER_EMAIL_KEY, &response.user.email);
    }
}
