//! Simulated latency for pages backed by in-memory sample data.
//!
//! A page registers a [`ScopeAlive`] while it mounts; delayed updates check
//! it before touching page state, so a page left before its timer fires is
//! never written to.

#[cfg(test)]
#[path = "delay_test.rs"]
mod delay_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

/// Liveness flag tied to the reactive owner that created it.
#[derive(Clone, Debug)]
pub struct ScopeAlive(Arc<AtomicBool>);

impl ScopeAlive {
    /// Create a flag that clears when the current owner is cleaned up.
    pub fn register() -> Self {
        let flag = Arc::new(AtomicBool::new(true));
        let on_dispose = Arc::clone(&flag);
        on_cleanup(move || on_dispose.store(false, Ordering::Relaxed));
        Self(flag)
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Run `update` after `delay_ms` if the owning scope still exists then.
    ///
    /// Only the hydrated client has timers; the server render keeps the
    /// initial (loading) state.
    pub fn after(&self, delay_ms: u64, update: impl FnOnce() + 'static) {
        #[cfg(feature = "hydrate")]
        {
            let alive = self.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(delay_ms)).await;
                if alive.is_alive() {
                    update();
                } else {
                    log::debug!("page left before its {delay_ms}ms delay elapsed");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            drop(update);
            log::trace!("skipping {delay_ms}ms delayed update outside the browser");
        }
    }
}
