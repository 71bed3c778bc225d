//! Route-level pages.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route's state and flows and delegates rendering
//! details to `components`.

pub mod login;
pub mod students;
