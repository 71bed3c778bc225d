//! Networking for the campus console.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the platform-neutral request primitive, `auth` turns login
//! attempts into sessions, `api` wraps the students REST endpoints, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod auth;
pub mod http;
pub mod types;
