//! Client-side page state and the flows that mutate it.
//!
//! DESIGN
//! ======
//! State is split by page (`login`, `students`) so each container owns a
//! small focused model. `session` is shared: the login flow writes it and
//! the students API reads from it.

pub mod cell;
pub mod login;
pub mod session;
pub mod students;
