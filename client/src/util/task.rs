//! Fire-and-forget task spawning for page flows.

use std::future::Future;

/// Run `flow` on the browser's local executor.
///
/// Server renders never drive flows; the future is dropped unpolled there.
pub fn spawn_flow(flow: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(flow);
    #[cfg(not(feature = "hydrate"))]
    drop(flow);
}
