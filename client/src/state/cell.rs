//! Mutable state handle shared by page flows.
//!
//! DESIGN
//! ======
//! Flows in `login` and `students` only need "apply this change to the
//! state". Abstracting that lets the same async flow drive a Leptos
//! `RwSignal` in the browser and a plain `Mutex` in unit tests, without a
//! reactive runtime.

use std::sync::{Mutex, PoisonError};

use leptos::prelude::{RwSignal, Update};

/// A container whose value can be mutated in place.
pub trait StateCell<T> {
    /// Apply `f` to the current value. Returns `None` if the cell is gone
    /// (e.g. a disposed signal after the page unmounted).
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T> StateCell<T> for Mutex<T> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut guard = self.lock().unwrap_or_else(PoisonError::into_inner);
        Some(f(&mut guard))
    }
}
