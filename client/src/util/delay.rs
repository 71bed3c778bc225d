//! Runtime-agnostic async sleep.
//!
//! The browser has no tokio timer driver, so hydrate builds sleep on a
//! `setTimeout`-backed gloo future; native builds (SSR, tests) use tokio.

use std::time::Duration;

/// Suspend the current task for `duration`.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        tokio::time::sleep(duration).await;
    }
}
