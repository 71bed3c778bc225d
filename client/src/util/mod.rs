//! Helpers shared across client modules.

pub mod delay;
pub mod task;
