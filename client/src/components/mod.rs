//! Presentational components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render what their props give them and report user actions
//! through callbacks. Pages own the state and the network calls.

pub mod students_form;
pub mod students_table;
